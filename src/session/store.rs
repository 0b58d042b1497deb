//! Durable visitor session.
//!
//! The session is the client-held proof of authentication: the verified
//! phone number plus an opaque token, written together on successful OTP
//! verification and removed together on logout. The on-disk file is a
//! write-through copy of the in-memory state; it is read once when the store
//! opens and decides the initial authenticated state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove session file '{path}': {source}")]
    RemoveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Snapshot of the visitor session.
///
/// Invariant: the visitor is authenticated iff both fields are present and
/// non-empty. Both fields always change together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.phone_number) && filled(&self.auth_token)
    }
}

/// Durable session store with a write-through in-memory copy.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    path: PathBuf,
}

impl SessionStore {
    /// Returns the path to the session file.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("smartvas").join("session.json")
    }

    /// Open the store, reading the persisted snapshot if one exists.
    ///
    /// A missing or unreadable file starts the visitor unauthenticated; a
    /// corrupt session is no different from no session.
    pub fn open(path: PathBuf) -> Self {
        let session = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            inner: Arc::new(RwLock::new(session)),
            path,
        }
    }

    /// Current snapshot of the session.
    pub fn snapshot(&self) -> Session {
        self.inner.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_authenticated()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist both fields, in memory first and then durably.
    ///
    /// The file is written to a sibling temp path and renamed into place so
    /// the two fields can never be observed half-updated.
    pub fn set(&self, phone_number: &str, auth_token: &str) -> Result<(), SessionError> {
        let session = Session {
            phone_number: Some(phone_number.to_string()),
            auth_token: Some(auth_token.to_string()),
        };
        *self.inner.write() = session.clone();
        self.persist(&session)
    }

    /// Clear the session in memory and on disk.
    pub fn clear(&self) -> Result<(), SessionError> {
        *self.inner.write() = Session::default();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::RemoveError {
                path: self.path.clone(),
                source: err,
            }),
        }
    }

    fn persist(&self, session: &Session) -> Result<(), SessionError> {
        let write_err = |source| SessionError::WriteError {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content =
            serde_json::to_string_pretty(session).expect("session serialization is infallible");
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        Ok(())
    }
}

//! Wire types for the SmartVAS REST surface.

use serde::{Deserialize, Serialize};

/// A user record returned by the lookup endpoint.
///
/// Only the fields the client reads are declared; the backend is free to
/// send more.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_phone_number: Option<String>,
}

/// Body of `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub user_name: String,
    pub user_email: String,
    pub user_phone_number: String,
    pub user_password: String,
}

/// Body of the `POST /sendotp` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SendOtpResponse {
    pub status: String,
}

impl SendOtpResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Body of the `POST /verifyotp` response.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl VerifyOtpResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

mod store;

pub use store::{Session, SessionError, SessionStore};

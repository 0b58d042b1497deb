mod client;
mod error;
mod types;

pub use client::VasClient;
pub use error::ApiError;
pub use types::{RegistrationRequest, SendOtpResponse, UserRecord, VerifyOtpResponse};

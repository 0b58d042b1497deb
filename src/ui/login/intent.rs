use crate::ui::mvi::Intent;

/// Result of the login flow (user lookup, then OTP dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The user exists and the OTP is on its way.
    OtpSent,
    /// The phone number is not registered.
    UserNotFound,
    /// The user exists but the backend declined to send an OTP.
    SendOtpFailed,
    /// Anything else went wrong (network, timeout, unexpected status).
    Failed,
}

#[derive(Debug, Clone)]
pub enum LoginIntent {
    Input(char),
    Backspace,
    Submit,
    Outcome(LoginOutcome),
}

impl Intent for LoginIntent {}

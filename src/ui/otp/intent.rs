use crate::ui::mvi::Intent;

/// Result of a verify-otp call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified,
    /// The backend rejected the code, optionally saying why.
    Rejected { message: Option<String> },
    /// The call itself failed (network, timeout, unexpected status).
    Failed,
}

/// Result of a resend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResendOutcome {
    Sent,
    Failed,
}

#[derive(Debug, Clone)]
pub enum OtpIntent {
    /// A keystroke aimed at the focused slot. Non-digits are ignored
    /// without mutating state.
    Digit(char),
    /// Clears the focused slot, or moves focus back when it is empty.
    Backspace,
    Submit,
    /// Resend request; a no-op unless the cooldown has expired.
    Resend,
    /// One-second tick driving the resend cooldown.
    CooldownTick,
    VerifyResult(VerifyOutcome),
    ResendResult(ResendOutcome),
}

impl Intent for OtpIntent {}

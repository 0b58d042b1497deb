use crate::ui::mvi::UiState;

/// Login screen: a single phone field plus submission status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginState {
    pub phone: String,
    pub error: Option<String>,
    /// Submit is ignored while a lookup/send-otp round trip is in flight.
    pub submitting: bool,
    /// Set when the OTP was sent; the app consumes it and navigates to the
    /// verification screen with this phone number.
    pub otp_sent: Option<String>,
}

impl UiState for LoginState {}

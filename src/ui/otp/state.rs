use crate::ui::mvi::UiState;
use crate::validation::OTP_LEN;

/// Seconds the resend action stays disabled after an OTP is sent.
pub const RESEND_COOLDOWN_SECS: u8 = 30;

/// OTP verification screen state machine.
///
/// `phone` is the navigation state this screen requires; the route gate
/// refuses entry without it. The four slots plus a focus index model the
/// per-digit entry boxes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OtpState {
    pub phone: Option<String>,
    pub slots: [Option<char>; OTP_LEN],
    pub focused: usize,
    pub error: Option<String>,
    /// Transient confirmation after a resend.
    pub notice: Option<String>,
    pub submitting: bool,
    /// Resend is permitted iff this is zero.
    pub cooldown: u8,
    /// Set when a resend was accepted; the app consumes it and fires the
    /// send-otp call.
    pub resend_requested: bool,
    /// Set on successful verification; the app consumes it, writes the
    /// session, and navigates to the dashboard.
    pub verified: bool,
}

impl OtpState {
    /// Fresh entry state for a phone number, cooldown running.
    pub fn for_phone(phone: String) -> Self {
        Self {
            phone: Some(phone),
            cooldown: RESEND_COOLDOWN_SECS,
            ..Self::default()
        }
    }

    /// The digits entered so far, in slot order.
    pub fn code(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn resend_ready(&self) -> bool {
        self.cooldown == 0
    }
}

impl UiState for OtpState {}

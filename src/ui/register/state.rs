use crate::ui::mvi::UiState;

/// Seconds the success message stays up before moving to OTP entry.
pub const REDIRECT_DELAY_SECS: u8 = 2;

/// The five form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [RegisterField; 5] = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Phone,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegisterField::Name => "Full Name",
            RegisterField::Email => "Email Address",
            RegisterField::Phone => "Mobile Number",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, RegisterField::Password | RegisterField::ConfirmPassword)
    }

    pub fn next(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Phone,
            RegisterField::Phone => RegisterField::Password,
            RegisterField::Password => RegisterField::ConfirmPassword,
            RegisterField::ConfirmPassword => RegisterField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::ConfirmPassword,
            RegisterField::Email => RegisterField::Name,
            RegisterField::Phone => RegisterField::Email,
            RegisterField::Password => RegisterField::Phone,
            RegisterField::ConfirmPassword => RegisterField::Password,
        }
    }
}

/// The registration form contents. Never persisted; discarded when the
/// visitor leaves the screen or the flow succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    pub fn field(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Phone => &self.phone,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: RegisterField) -> &mut String {
        match field {
            RegisterField::Name => &mut self.name,
            RegisterField::Email => &mut self.email,
            RegisterField::Phone => &mut self.phone,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Register screen state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterState {
    pub draft: RegistrationDraft,
    pub focused: RegisterField,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submitting: bool,
    /// Countdown (seconds) before the post-registration redirect. `Some(0)`
    /// tells the app to navigate to OTP entry with the draft phone.
    pub redirect_in: Option<u8>,
}

impl RegisterState {
    /// Editing is locked once a request is in flight or the redirect is
    /// pending.
    pub fn locked(&self) -> bool {
        self.submitting || self.redirect_in.is_some()
    }
}

impl UiState for RegisterState {}

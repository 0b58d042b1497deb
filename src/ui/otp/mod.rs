mod intent;
mod reducer;
mod state;

pub use intent::{OtpIntent, ResendOutcome, VerifyOutcome};
pub use reducer::OtpReducer;
pub use state::{OtpState, RESEND_COOLDOWN_SECS};

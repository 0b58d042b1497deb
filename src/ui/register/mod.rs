mod intent;
mod reducer;
mod state;

pub use intent::{RegisterIntent, RegisterOutcome};
pub use reducer::RegisterReducer;
pub use state::{RegisterField, RegisterState, RegistrationDraft};

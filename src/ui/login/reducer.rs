use crate::ui::login::intent::{LoginIntent, LoginOutcome};
use crate::ui::login::state::LoginState;
use crate::ui::mvi::Reducer;
use crate::validation::{validate_phone, PHONE_LEN};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Input(c) => {
                if state.submitting || state.phone.len() >= PHONE_LEN {
                    return state;
                }
                let mut state = state;
                state.phone.push(c);
                state.error = None;
                state
            }
            LoginIntent::Backspace => {
                if state.submitting {
                    return state;
                }
                let mut state = state;
                state.phone.pop();
                state.error = None;
                state
            }
            LoginIntent::Submit => {
                if state.submitting {
                    return state;
                }
                match validate_phone(&state.phone) {
                    Ok(()) => LoginState {
                        error: None,
                        submitting: true,
                        ..state
                    },
                    Err(err) => LoginState {
                        error: Some(err.to_string()),
                        ..state
                    },
                }
            }
            LoginIntent::Outcome(outcome) => {
                let mut state = LoginState {
                    submitting: false,
                    ..state
                };
                match outcome {
                    LoginOutcome::OtpSent => state.otp_sent = Some(state.phone.clone()),
                    LoginOutcome::UserNotFound => {
                        state.error = Some("User not found. Please register first.".to_string());
                    }
                    LoginOutcome::SendOtpFailed => {
                        state.error = Some("Failed to send OTP. Please try again.".to_string());
                    }
                    LoginOutcome::Failed => {
                        state.error = Some("An error occurred. Please try again.".to_string());
                    }
                }
                state
            }
        }
    }
}

use crate::ui::mvi::Reducer;
use crate::ui::otp::intent::{OtpIntent, ResendOutcome, VerifyOutcome};
use crate::ui::otp::state::{OtpState, RESEND_COOLDOWN_SECS};
use crate::validation::{validate_otp, OTP_LEN};

pub struct OtpReducer;

impl Reducer for OtpReducer {
    type State = OtpState;
    type Intent = OtpIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OtpIntent::Digit(c) => {
                if !c.is_ascii_digit() || state.submitting {
                    return state;
                }
                let mut state = state;
                state.slots[state.focused] = Some(c);
                if state.focused + 1 < OTP_LEN {
                    state.focused += 1;
                }
                state.error = None;
                state
            }
            OtpIntent::Backspace => {
                if state.submitting {
                    return state;
                }
                let mut state = state;
                if state.slots[state.focused].is_some() {
                    state.slots[state.focused] = None;
                } else if state.focused > 0 {
                    state.focused -= 1;
                }
                state
            }
            OtpIntent::Submit => {
                if state.submitting {
                    return state;
                }
                match validate_otp(&state.slots) {
                    Ok(()) => OtpState {
                        error: None,
                        notice: None,
                        submitting: true,
                        ..state
                    },
                    Err(err) => OtpState {
                        error: Some(err.to_string()),
                        ..state
                    },
                }
            }
            OtpIntent::Resend => {
                if !state.resend_ready() || state.submitting {
                    return state;
                }
                // Cooldown restarts immediately, before the call resolves.
                OtpState {
                    cooldown: RESEND_COOLDOWN_SECS,
                    resend_requested: true,
                    error: None,
                    notice: None,
                    ..state
                }
            }
            OtpIntent::CooldownTick => OtpState {
                cooldown: state.cooldown.saturating_sub(1),
                ..state
            },
            OtpIntent::VerifyResult(outcome) => {
                let mut state = OtpState {
                    submitting: false,
                    ..state
                };
                match outcome {
                    VerifyOutcome::Verified => state.verified = true,
                    VerifyOutcome::Rejected { message } => {
                        state.error = Some(
                            message.unwrap_or_else(|| "Invalid OTP. Please try again.".to_string()),
                        );
                    }
                    VerifyOutcome::Failed => {
                        state.error = Some("Verification failed. Please try again.".to_string());
                    }
                }
                state
            }
            OtpIntent::ResendResult(outcome) => {
                let mut state = state;
                match outcome {
                    ResendOutcome::Sent => {
                        state.notice = Some("OTP has been resent to your phone".to_string());
                    }
                    ResendOutcome::Failed => {
                        state.error = Some("Failed to resend OTP. Please try again.".to_string());
                    }
                }
                state
            }
        }
    }
}

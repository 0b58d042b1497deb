use crate::ui::mvi::Reducer;
use crate::ui::register::intent::{RegisterIntent, RegisterOutcome};
use crate::ui::register::state::{RegisterState, RegistrationDraft, REDIRECT_DELAY_SECS};
use crate::validation::{
    validate_email, validate_password, validate_phone, ValidationError,
};

pub struct RegisterReducer;

/// Check the whole draft, first failure wins.
///
/// Order matters: required fields, phone shape, password length, password
/// match, email shape. No network call happens until all pass.
fn validate_draft(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    let all_present = [
        &draft.name,
        &draft.email,
        &draft.phone,
        &draft.password,
        &draft.confirm_password,
    ]
    .iter()
    .all(|field| !field.is_empty());
    if !all_present {
        return Err(ValidationError::MissingFields);
    }
    validate_phone(&draft.phone)?;
    validate_password(&draft.password, &draft.confirm_password)?;
    validate_email(&draft.email)?;
    Ok(())
}

impl Reducer for RegisterReducer {
    type State = RegisterState;
    type Intent = RegisterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegisterIntent::Input(c) => {
                if state.locked() {
                    return state;
                }
                let mut state = state;
                state.draft.field_mut(state.focused).push(c);
                state.error = None;
                state
            }
            RegisterIntent::Backspace => {
                if state.locked() {
                    return state;
                }
                let mut state = state;
                state.draft.field_mut(state.focused).pop();
                state.error = None;
                state
            }
            RegisterIntent::FocusNext => {
                if state.locked() {
                    return state;
                }
                RegisterState {
                    focused: state.focused.next(),
                    ..state
                }
            }
            RegisterIntent::FocusPrev => {
                if state.locked() {
                    return state;
                }
                RegisterState {
                    focused: state.focused.prev(),
                    ..state
                }
            }
            RegisterIntent::Submit => {
                if state.locked() {
                    return state;
                }
                match validate_draft(&state.draft) {
                    Ok(()) => RegisterState {
                        error: None,
                        success: None,
                        submitting: true,
                        ..state
                    },
                    Err(err) => RegisterState {
                        error: Some(err.to_string()),
                        ..state
                    },
                }
            }
            RegisterIntent::Outcome(outcome) => {
                let mut state = RegisterState {
                    submitting: false,
                    ..state
                };
                match outcome {
                    RegisterOutcome::OtpSent => {
                        state.success = Some(
                            "Registration successful! Redirecting to OTP verification..."
                                .to_string(),
                        );
                        state.redirect_in = Some(REDIRECT_DELAY_SECS);
                    }
                    RegisterOutcome::AlreadyRegistered => {
                        state.error =
                            Some("Phone number already registered. Please login instead.".to_string());
                    }
                    RegisterOutcome::SendOtpFailed => {
                        state.error = Some(
                            "Registration successful but failed to send OTP. Please try logging in."
                                .to_string(),
                        );
                    }
                    RegisterOutcome::Failed => {
                        state.error = Some("Registration failed. Please try again.".to_string());
                    }
                }
                state
            }
            RegisterIntent::RedirectTick => match state.redirect_in {
                Some(remaining) => RegisterState {
                    redirect_in: Some(remaining.saturating_sub(1)),
                    ..state
                },
                None => state,
            },
        }
    }
}

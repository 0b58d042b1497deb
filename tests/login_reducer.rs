use smartvas::ui::login::{LoginIntent, LoginOutcome, LoginReducer, LoginState};
use smartvas::ui::mvi::Reducer;

fn typed(phone: &str) -> LoginState {
    phone.chars().fold(LoginState::default(), |state, c| {
        LoginReducer::reduce(state, LoginIntent::Input(c))
    })
}

#[test]
fn input_builds_phone() {
    let state = typed("98765");
    assert_eq!(state.phone, "98765");
    assert!(state.error.is_none());
}

#[test]
fn input_capped_at_ten_chars() {
    let state = typed("987654321099");
    assert_eq!(state.phone, "9876543210");
}

#[test]
fn backspace_removes_last_char() {
    let state = LoginReducer::reduce(typed("987"), LoginIntent::Backspace);
    assert_eq!(state.phone, "98");
}

#[test]
fn input_clears_previous_error() {
    let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Submit);
    assert!(state.error.is_some());
    let state = LoginReducer::reduce(state, LoginIntent::Input('9'));
    assert!(state.error.is_none());
}

#[test]
fn submit_empty_phone_shows_required_message() {
    let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Submit);
    assert_eq!(state.error.as_deref(), Some("Phone number is required"));
    assert!(!state.submitting);
}

#[test]
fn submit_invalid_phone_shows_format_message() {
    let state = LoginReducer::reduce(typed("12345"), LoginIntent::Submit);
    assert_eq!(
        state.error.as_deref(),
        Some("Please enter a valid 10-digit phone number")
    );
    assert!(!state.submitting);
}

#[test]
fn submit_valid_phone_enters_submitting() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    assert!(state.submitting);
    assert!(state.error.is_none());
}

#[test]
fn submit_while_submitting_is_noop() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    let again = LoginReducer::reduce(state.clone(), LoginIntent::Submit);
    assert_eq!(again, state);
}

#[test]
fn input_while_submitting_is_noop() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    let again = LoginReducer::reduce(state.clone(), LoginIntent::Input('1'));
    assert_eq!(again, state);
}

#[test]
fn user_not_found_outcome_shows_register_hint() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    let state = LoginReducer::reduce(state, LoginIntent::Outcome(LoginOutcome::UserNotFound));
    assert_eq!(
        state.error.as_deref(),
        Some("User not found. Please register first.")
    );
    assert!(!state.submitting);
    assert!(state.otp_sent.is_none());
}

#[test]
fn send_otp_failure_outcome() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    let state = LoginReducer::reduce(state, LoginIntent::Outcome(LoginOutcome::SendOtpFailed));
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to send OTP. Please try again.")
    );
}

#[test]
fn generic_failure_outcome() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    let state = LoginReducer::reduce(state, LoginIntent::Outcome(LoginOutcome::Failed));
    assert_eq!(
        state.error.as_deref(),
        Some("An error occurred. Please try again.")
    );
}

#[test]
fn otp_sent_outcome_carries_phone() {
    let state = LoginReducer::reduce(typed("9876543210"), LoginIntent::Submit);
    let state = LoginReducer::reduce(state, LoginIntent::Outcome(LoginOutcome::OtpSent));
    assert_eq!(state.otp_sent.as_deref(), Some("9876543210"));
    assert!(state.error.is_none());
    assert!(!state.submitting);
}

use smartvas::ui::mvi::Reducer;
use smartvas::ui::register::{
    RegisterField, RegisterIntent, RegisterOutcome, RegisterReducer, RegisterState,
    RegistrationDraft,
};

fn draft() -> RegistrationDraft {
    RegistrationDraft {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn with_draft(draft: RegistrationDraft) -> RegisterState {
    RegisterState {
        draft,
        ..RegisterState::default()
    }
}

fn submitted() -> RegisterState {
    RegisterReducer::reduce(with_draft(draft()), RegisterIntent::Submit)
}

// -- Focus and editing --------------------------------------------------------

#[test]
fn focus_moves_through_fields_in_order() {
    let mut state = RegisterState::default();
    assert_eq!(state.focused, RegisterField::Name);
    for expected in [
        RegisterField::Email,
        RegisterField::Phone,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::Name,
    ] {
        state = RegisterReducer::reduce(state, RegisterIntent::FocusNext);
        assert_eq!(state.focused, expected);
    }
}

#[test]
fn focus_prev_wraps_to_last_field() {
    let state = RegisterReducer::reduce(RegisterState::default(), RegisterIntent::FocusPrev);
    assert_eq!(state.focused, RegisterField::ConfirmPassword);
}

#[test]
fn input_lands_in_focused_field() {
    let state = RegisterReducer::reduce(RegisterState::default(), RegisterIntent::FocusNext);
    let state = RegisterReducer::reduce(state, RegisterIntent::Input('a'));
    assert_eq!(state.draft.email, "a");
    assert!(state.draft.name.is_empty());
}

#[test]
fn backspace_edits_focused_field() {
    let mut state = with_draft(draft());
    state.focused = RegisterField::Phone;
    let state = RegisterReducer::reduce(state, RegisterIntent::Backspace);
    assert_eq!(state.draft.phone, "987654321");
}

// -- Submit validation order --------------------------------------------------

#[test]
fn submit_empty_draft_reports_missing_fields() {
    let state = RegisterReducer::reduce(RegisterState::default(), RegisterIntent::Submit);
    assert_eq!(state.error.as_deref(), Some("All fields are required"));
    assert!(!state.submitting);
}

#[test]
fn missing_fields_beats_other_checks() {
    let mut d = draft();
    d.name.clear();
    d.phone = "12".to_string();
    let state = RegisterReducer::reduce(with_draft(d), RegisterIntent::Submit);
    assert_eq!(state.error.as_deref(), Some("All fields are required"));
}

#[test]
fn phone_checked_before_password() {
    let mut d = draft();
    d.phone = "12345".to_string();
    d.password = "x".to_string();
    d.confirm_password = "x".to_string();
    let state = RegisterReducer::reduce(with_draft(d), RegisterIntent::Submit);
    assert_eq!(
        state.error.as_deref(),
        Some("Please enter a valid 10-digit phone number")
    );
}

#[test]
fn password_length_checked_before_mismatch() {
    let mut d = draft();
    d.password = "abc".to_string();
    d.confirm_password = "def".to_string();
    let state = RegisterReducer::reduce(with_draft(d), RegisterIntent::Submit);
    assert_eq!(
        state.error.as_deref(),
        Some("Password must be at least 6 characters long")
    );
}

#[test]
fn password_mismatch_reported_when_both_long_enough() {
    let mut d = draft();
    d.confirm_password = "secret2".to_string();
    let state = RegisterReducer::reduce(with_draft(d), RegisterIntent::Submit);
    assert_eq!(state.error.as_deref(), Some("Passwords do not match"));
}

#[test]
fn email_checked_last() {
    let mut d = draft();
    d.email = "not-an-email".to_string();
    let state = RegisterReducer::reduce(with_draft(d), RegisterIntent::Submit);
    assert_eq!(
        state.error.as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn valid_draft_enters_submitting() {
    let state = submitted();
    assert!(state.submitting);
    assert!(state.error.is_none());
}

// -- Outcomes -----------------------------------------------------------------

#[test]
fn conflict_outcome_points_to_login() {
    let state = RegisterReducer::reduce(
        submitted(),
        RegisterIntent::Outcome(RegisterOutcome::AlreadyRegistered),
    );
    assert_eq!(
        state.error.as_deref(),
        Some("Phone number already registered. Please login instead.")
    );
    assert!(!state.submitting);
    assert!(state.redirect_in.is_none());
}

#[test]
fn send_otp_failure_points_to_login() {
    let state = RegisterReducer::reduce(
        submitted(),
        RegisterIntent::Outcome(RegisterOutcome::SendOtpFailed),
    );
    assert_eq!(
        state.error.as_deref(),
        Some("Registration successful but failed to send OTP. Please try logging in.")
    );
}

#[test]
fn generic_failure_outcome() {
    let state = RegisterReducer::reduce(
        submitted(),
        RegisterIntent::Outcome(RegisterOutcome::Failed),
    );
    assert_eq!(
        state.error.as_deref(),
        Some("Registration failed. Please try again.")
    );
}

#[test]
fn success_outcome_starts_two_second_redirect() {
    let state = RegisterReducer::reduce(
        submitted(),
        RegisterIntent::Outcome(RegisterOutcome::OtpSent),
    );
    assert_eq!(
        state.success.as_deref(),
        Some("Registration successful! Redirecting to OTP verification...")
    );
    assert_eq!(state.redirect_in, Some(2));
    assert!(!state.submitting);
}

#[test]
fn redirect_ticks_down_to_zero() {
    let state = RegisterReducer::reduce(
        submitted(),
        RegisterIntent::Outcome(RegisterOutcome::OtpSent),
    );
    let state = RegisterReducer::reduce(state, RegisterIntent::RedirectTick);
    assert_eq!(state.redirect_in, Some(1));
    let state = RegisterReducer::reduce(state, RegisterIntent::RedirectTick);
    assert_eq!(state.redirect_in, Some(0));
}

// -- Locking ------------------------------------------------------------------

#[test]
fn edits_ignored_while_submitting() {
    let state = submitted();
    let again = RegisterReducer::reduce(state.clone(), RegisterIntent::Input('x'));
    assert_eq!(again, state);
    let again = RegisterReducer::reduce(state.clone(), RegisterIntent::FocusNext);
    assert_eq!(again, state);
}

#[test]
fn edits_ignored_during_redirect() {
    let state = RegisterReducer::reduce(
        submitted(),
        RegisterIntent::Outcome(RegisterOutcome::OtpSent),
    );
    let again = RegisterReducer::reduce(state.clone(), RegisterIntent::Backspace);
    assert_eq!(again, state);
}

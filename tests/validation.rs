use smartvas::validation::{
    validate_email, validate_otp, validate_password, validate_phone, ValidationError,
};

// -- Phone --------------------------------------------------------------------

#[test]
fn phone_accepts_ten_digits() {
    assert!(validate_phone("9876543210").is_ok());
    assert!(validate_phone("0000000000").is_ok());
}

#[test]
fn phone_rejects_empty_with_required_message() {
    let err = validate_phone("").unwrap_err();
    assert_eq!(err, ValidationError::PhoneRequired);
    assert_eq!(err.to_string(), "Phone number is required");
}

#[test]
fn phone_rejects_wrong_length() {
    assert_eq!(validate_phone("123456789"), Err(ValidationError::PhoneFormat));
    assert_eq!(validate_phone("12345678901"), Err(ValidationError::PhoneFormat));
}

#[test]
fn phone_rejects_non_digits() {
    assert_eq!(validate_phone("98765x3210"), Err(ValidationError::PhoneFormat));
    assert_eq!(validate_phone("98765 3210"), Err(ValidationError::PhoneFormat));
    assert_eq!(validate_phone("+876543210"), Err(ValidationError::PhoneFormat));
}

#[test]
fn phone_message_is_user_facing() {
    assert_eq!(
        validate_phone("abc").unwrap_err().to_string(),
        "Please enter a valid 10-digit phone number"
    );
}

// -- Email --------------------------------------------------------------------

#[test]
fn email_accepts_simple_shape() {
    assert!(validate_email("user@example.com").is_ok());
    assert!(validate_email("a.b+c@sub.example.org").is_ok());
}

#[test]
fn email_rejects_missing_parts() {
    assert!(validate_email("").is_err());
    assert!(validate_email("userexample.com").is_err());
    assert!(validate_email("user@nodot").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("user@.").is_err());
}

#[test]
fn email_rejects_whitespace() {
    assert!(validate_email("us er@example.com").is_err());
}

// -- Password -----------------------------------------------------------------

#[test]
fn password_accepts_six_matching_chars() {
    assert!(validate_password("secret", "secret").is_ok());
}

#[test]
fn password_rejects_short() {
    assert_eq!(
        validate_password("12345", "12345"),
        Err(ValidationError::PasswordTooShort)
    );
}

#[test]
fn password_rejects_mismatch_even_when_both_valid() {
    assert_eq!(
        validate_password("secret1", "secret2"),
        Err(ValidationError::PasswordMismatch)
    );
}

// -- OTP ----------------------------------------------------------------------

#[test]
fn otp_accepts_four_filled_slots() {
    let slots = [Some('1'), Some('2'), Some('3'), Some('4')];
    assert!(validate_otp(&slots).is_ok());
}

#[test]
fn otp_rejects_partial_entry() {
    let slots = [Some('1'), Some('2'), None, Some('4')];
    assert_eq!(validate_otp(&slots), Err(ValidationError::OtpIncomplete));
}

#[test]
fn otp_rejects_empty_entry() {
    let slots: [Option<char>; 4] = [None; 4];
    assert_eq!(
        validate_otp(&slots).unwrap_err().to_string(),
        "Please enter the complete 4-digit OTP"
    );
}

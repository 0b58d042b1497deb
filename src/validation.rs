//! Client-side form validation.
//!
//! Pure checks, no I/O. Every failure carries the exact message the screens
//! display inline, so callers render `error.to_string()` verbatim.

use thiserror::Error;

/// Number of digits in a phone number.
pub const PHONE_LEN: usize = 10;

/// Number of slots in an OTP entry.
pub const OTP_LEN: usize = 4;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneFormat,
    #[error("All fields are required")]
    MissingFields,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Please enter the complete 4-digit OTP")]
    OtpIncomplete,
}

/// A phone number is exactly ten ASCII digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::PhoneRequired);
    }
    if phone.len() != PHONE_LEN || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::PhoneFormat);
    }
    Ok(())
}

/// Loose `local@domain.tld` shape check, mirroring what the backend accepts.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::EmailFormat);
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(ValidationError::EmailFormat);
    };
    let has_whitespace = email.contains(char::is_whitespace);
    if local.is_empty() || host.is_empty() || tld.is_empty() || has_whitespace {
        return Err(ValidationError::EmailFormat);
    }
    Ok(())
}

/// Passwords must be at least six characters and match the confirmation.
pub fn validate_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// An OTP entry is complete when all four slots hold a digit.
pub fn validate_otp(slots: &[Option<char>; OTP_LEN]) -> Result<(), ValidationError> {
    if slots.iter().any(|slot| slot.is_none()) {
        return Err(ValidationError::OtpIncomplete);
    }
    Ok(())
}

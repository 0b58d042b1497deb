//! Route gate.
//!
//! A navigation request never lands directly on a screen: it is resolved
//! against the current session state first. Authenticated visitors cannot
//! reach the entry screens, unauthenticated visitors cannot reach the
//! dashboard, and the OTP screen is unreachable without a phone number to
//! verify.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Register,
    OtpVerify,
    Dashboard,
}

/// Resolve a navigation request against the session.
///
/// `otp_phone` is the navigation state the OTP screen requires; requests for
/// it without one fall back to Login, which guards direct entry.
pub fn resolve(requested: Route, authenticated: bool, otp_phone: Option<&str>) -> Route {
    let route = match (authenticated, requested) {
        (true, Route::Login | Route::Register | Route::OtpVerify) => Route::Dashboard,
        (false, Route::Dashboard) => Route::Login,
        (_, other) => other,
    };
    match route {
        Route::OtpVerify if otp_phone.is_none() => Route::Login,
        other => other,
    }
}

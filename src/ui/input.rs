use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::login::LoginIntent;
use crate::ui::otp::OtpIntent;
use crate::ui::register::RegisterIntent;
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The splash gate blocks every route, and with it all screen input.
    if app.in_splash() {
        return;
    }

    match app.route() {
        Route::Login => handle_login_key(app, key),
        Route::Register => handle_register_key(app, key),
        Route::OtpVerify => handle_otp_key(app, key),
        Route::Dashboard => handle_dashboard_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.navigate(Route::Register);
        return;
    }
    match key.code {
        KeyCode::Enter => app.dispatch_login(LoginIntent::Submit),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(c) if is_plain(key) => app.dispatch_login(LoginIntent::Input(c)),
        _ => {}
    }
}

fn handle_register_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.navigate(Route::Login);
        return;
    }
    match key.code {
        KeyCode::Enter => app.dispatch_register(RegisterIntent::Submit),
        KeyCode::Backspace => app.dispatch_register(RegisterIntent::Backspace),
        KeyCode::Tab | KeyCode::Down => app.dispatch_register(RegisterIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_register(RegisterIntent::FocusPrev),
        KeyCode::Char(c) if is_plain(key) => app.dispatch_register(RegisterIntent::Input(c)),
        _ => {}
    }
}

fn handle_otp_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.navigate(Route::Login),
        KeyCode::Enter => app.dispatch_otp(OtpIntent::Submit),
        KeyCode::Backspace => app.dispatch_otp(OtpIntent::Backspace),
        KeyCode::Char(c) if is_plain(key) && c.is_ascii_digit() => {
            app.dispatch_otp(OtpIntent::Digit(c));
        }
        KeyCode::Char('r') | KeyCode::Char('R') if is_plain(key) => {
            app.dispatch_otp(OtpIntent::Resend);
        }
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'l') {
        app.logout();
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::api::RegistrationRequest;
use crate::config::ConfigStore;
use crate::session::{Session, SessionStore};
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::otp::{OtpIntent, OtpReducer, OtpState};
use crate::ui::register::{RegisterIntent, RegisterReducer, RegisterState};
use crate::ui::route::{self, Route};
use crate::ui::worker::{ApiCommand, ApiOutcome};

/// How long the splash blocks rendering of any route.
pub const SPLASH_DURATION: Duration = Duration::from_secs(3);

/// The backend issues no credential on verification; any non-empty token
/// marks the session authenticated.
const AUTH_TOKEN_PLACEHOLDER: &str = "dummy-token";

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    splash_deadline: Option<Instant>,
    last_countdown_tick: Instant,
    login: LoginState,
    register: RegisterState,
    otp: OtpState,
    session: SessionStore,
    config: ConfigStore,
    commands: ApiCommandSender,
    /// Bumped on every submission and every navigation; outcomes carrying an
    /// older value are dropped instead of being applied to a stale screen.
    generation: u64,
}

impl App {
    pub fn new(config: ConfigStore, session: SessionStore, commands: ApiCommandSender) -> Self {
        let now = Instant::now();
        Self {
            should_quit: false,
            route: Route::default(),
            splash_deadline: Some(now + SPLASH_DURATION),
            last_countdown_tick: now,
            login: LoginState::default(),
            register: RegisterState::default(),
            otp: OtpState::default(),
            session,
            config,
            commands,
            generation: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn in_splash(&self) -> bool {
        self.splash_deadline.is_some()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn register(&self) -> &RegisterState {
        &self.register
    }

    pub fn otp(&self) -> &OtpState {
        &self.otp
    }

    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.splash_deadline {
            if Instant::now() >= deadline {
                self.splash_deadline = None;
                let initial = if self.session.is_authenticated() {
                    Route::Dashboard
                } else {
                    Route::Login
                };
                self.navigate(initial);
            }
        }

        while self.last_countdown_tick.elapsed() >= Duration::from_secs(1) {
            self.last_countdown_tick += Duration::from_secs(1);
            self.on_second_tick();
        }
    }

    /// One-second cadence driving the visible countdowns.
    fn on_second_tick(&mut self) {
        match self.route {
            Route::OtpVerify if self.otp.cooldown > 0 => {
                self.dispatch_otp(OtpIntent::CooldownTick);
            }
            Route::Register if self.register.redirect_in.is_some() => {
                self.dispatch_register(RegisterIntent::RedirectTick);
            }
            _ => {}
        }
    }

    /// Resolve a navigation request through the route gate and switch
    /// screens, discarding the transient state of the screen being left and
    /// invalidating any of its in-flight requests.
    pub fn navigate(&mut self, requested: Route) {
        let resolved = route::resolve(
            requested,
            self.session.is_authenticated(),
            self.otp.phone.as_deref(),
        );
        self.generation += 1;
        if resolved != self.route {
            match self.route {
                Route::Login => self.login = LoginState::default(),
                Route::Register => self.register = RegisterState::default(),
                Route::OtpVerify => self.otp = OtpState::default(),
                Route::Dashboard => {}
            }
        }
        self.route = resolved;
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.session.clear() {
            error!(error = %err, "failed to clear session");
        }
        self.navigate(Route::Login);
    }

    pub fn on_api_outcome(&mut self, generation: u64, outcome: ApiOutcome) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale API outcome");
            return;
        }
        match outcome {
            ApiOutcome::Login(outcome) => self.dispatch_login(LoginIntent::Outcome(outcome)),
            ApiOutcome::Register(outcome) => {
                self.dispatch_register(RegisterIntent::Outcome(outcome));
            }
            ApiOutcome::Verify(outcome) => self.dispatch_otp(OtpIntent::VerifyResult(outcome)),
            ApiOutcome::Resend(outcome) => self.dispatch_otp(OtpIntent::ResendResult(outcome)),
        }
    }

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        let was_submitting = self.login.submitting;
        dispatch_mvi!(self, login, LoginReducer, intent);
        if self.login.submitting && !was_submitting {
            let phone = self.login.phone.clone();
            self.send_command(|generation| ApiCommand::Login { phone, generation });
        }
        if let Some(phone) = self.login.otp_sent.take() {
            self.enter_otp(phone);
        }
    }

    pub fn dispatch_register(&mut self, intent: RegisterIntent) {
        let was_submitting = self.register.submitting;
        dispatch_mvi!(self, register, RegisterReducer, intent);
        if self.register.submitting && !was_submitting {
            let draft = &self.register.draft;
            let request = RegistrationRequest {
                user_name: draft.name.clone(),
                user_email: draft.email.clone(),
                user_phone_number: draft.phone.clone(),
                user_password: draft.password.clone(),
            };
            self.send_command(|generation| ApiCommand::Register {
                request,
                generation,
            });
        }
        if self.register.redirect_in == Some(0) {
            let phone = self.register.draft.phone.clone();
            self.enter_otp(phone);
        }
    }

    pub fn dispatch_otp(&mut self, intent: OtpIntent) {
        let was_submitting = self.otp.submitting;
        dispatch_mvi!(self, otp, OtpReducer, intent);
        if self.otp.submitting && !was_submitting {
            if let Some(phone) = self.otp.phone.clone() {
                let otp = self.otp.code();
                self.send_command(|generation| ApiCommand::VerifyOtp {
                    phone,
                    otp,
                    generation,
                });
            }
        }
        if self.otp.resend_requested {
            self.otp.resend_requested = false;
            if let Some(phone) = self.otp.phone.clone() {
                self.send_command(|generation| ApiCommand::ResendOtp { phone, generation });
            }
        }
        if self.otp.verified {
            self.otp.verified = false;
            self.complete_verification();
        }
    }

    fn enter_otp(&mut self, phone: String) {
        self.otp = OtpState::for_phone(phone);
        self.navigate(Route::OtpVerify);
    }

    /// Successful verification: the session becomes the write-through record
    /// of the authenticated visitor, then the route gate takes over.
    fn complete_verification(&mut self) {
        let Some(phone) = self.otp.phone.clone() else {
            return;
        };
        if let Err(err) = self.session.set(&phone, AUTH_TOKEN_PLACEHOLDER) {
            error!(error = %err, "failed to persist session");
        }
        self.navigate(Route::Dashboard);
    }

    fn send_command(&mut self, build: impl FnOnce(u64) -> ApiCommand) {
        self.generation += 1;
        if let Err(err) = self.commands.try_send(build(self.generation)) {
            warn!(error = %err, "API worker unavailable");
        }
    }
}

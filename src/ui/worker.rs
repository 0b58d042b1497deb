//! API command worker.
//!
//! Screens never touch the network: the app sends a command here, the worker
//! runs the multi-call flow against the backend, and the outcome travels
//! back through the event channel tagged with the generation of the
//! submission that started it.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc::Receiver;
use tracing::warn;

use crate::api::{ApiError, RegistrationRequest, VasClient};
use crate::ui::events::AppEvent;
use crate::ui::login::LoginOutcome;
use crate::ui::otp::{ResendOutcome, VerifyOutcome};
use crate::ui::register::RegisterOutcome;

#[derive(Debug)]
pub enum ApiCommand {
    Login {
        phone: String,
        generation: u64,
    },
    Register {
        request: RegistrationRequest,
        generation: u64,
    },
    VerifyOtp {
        phone: String,
        otp: String,
        generation: u64,
    },
    ResendOtp {
        phone: String,
        generation: u64,
    },
}

#[derive(Debug)]
pub enum ApiOutcome {
    Login(LoginOutcome),
    Register(RegisterOutcome),
    Verify(VerifyOutcome),
    Resend(ResendOutcome),
}

pub async fn run(client: VasClient, mut commands: Receiver<ApiCommand>, events: Sender<AppEvent>) {
    while let Some(command) = commands.recv().await {
        let (generation, outcome) = match command {
            ApiCommand::Login { phone, generation } => {
                (generation, ApiOutcome::Login(login_flow(&client, &phone).await))
            }
            ApiCommand::Register {
                request,
                generation,
            } => (
                generation,
                ApiOutcome::Register(register_flow(&client, &request).await),
            ),
            ApiCommand::VerifyOtp {
                phone,
                otp,
                generation,
            } => (
                generation,
                ApiOutcome::Verify(verify_flow(&client, &phone, &otp).await),
            ),
            ApiCommand::ResendOtp { phone, generation } => {
                (generation, ApiOutcome::Resend(resend_flow(&client, &phone).await))
            }
        };

        if events.send(AppEvent::Api { generation, outcome }).is_err() {
            break;
        }
    }
}

/// Look the user up, then request an OTP.
async fn login_flow(client: &VasClient, phone: &str) -> LoginOutcome {
    let users = match client.lookup_user(phone).await {
        Ok(users) => users,
        Err(ApiError::NotFound) => return LoginOutcome::UserNotFound,
        Err(err) => {
            warn!(error = %err, "user lookup failed");
            return LoginOutcome::Failed;
        }
    };

    if users.is_empty() {
        return LoginOutcome::UserNotFound;
    }

    match client.send_otp(phone).await {
        Ok(response) if response.is_success() => LoginOutcome::OtpSent,
        Ok(_) => LoginOutcome::SendOtpFailed,
        Err(err) => {
            warn!(error = %err, "send-otp failed during login");
            LoginOutcome::Failed
        }
    }
}

/// Register the draft, then request an OTP for the new account.
async fn register_flow(client: &VasClient, request: &RegistrationRequest) -> RegisterOutcome {
    match client.register(request).await {
        Ok(()) => {}
        Err(ApiError::Conflict) => return RegisterOutcome::AlreadyRegistered,
        Err(err) => {
            warn!(error = %err, "registration failed");
            return RegisterOutcome::Failed;
        }
    }

    match client.send_otp(&request.user_phone_number).await {
        Ok(response) if response.is_success() => RegisterOutcome::OtpSent,
        Ok(_) => RegisterOutcome::SendOtpFailed,
        Err(err) => {
            warn!(error = %err, "send-otp failed after registration");
            RegisterOutcome::SendOtpFailed
        }
    }
}

async fn verify_flow(client: &VasClient, phone: &str, otp: &str) -> VerifyOutcome {
    match client.verify_otp(phone, otp).await {
        Ok(response) if response.is_success() => VerifyOutcome::Verified,
        Ok(response) => VerifyOutcome::Rejected {
            message: response.message,
        },
        Err(err) => {
            // A rejected code can arrive as an error status with a message
            // body; surface that message like an in-band rejection.
            if let Some(message) = err.server_message() {
                return VerifyOutcome::Rejected {
                    message: Some(message.to_string()),
                };
            }
            warn!(error = %err, "verify-otp failed");
            VerifyOutcome::Failed
        }
    }
}

async fn resend_flow(client: &VasClient, phone: &str) -> ResendOutcome {
    match client.send_otp(phone).await {
        Ok(response) if response.is_success() => ResendOutcome::Sent,
        Ok(_) => ResendOutcome::Failed,
        Err(err) => {
            warn!(error = %err, "resend-otp failed");
            ResendOutcome::Failed
        }
    }
}

//! HTTP client for the four SmartVAS backend operations.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{RegistrationRequest, SendOtpResponse, UserRecord, VerifyOtpResponse};
use crate::config::Config;

/// Error body shape some backend failures carry.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct VasClient {
    client: Client,
    base_url: String,
}

impl VasClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(
                config.defaults.connect_timeout_seconds.into(),
            ))
            .timeout(Duration::from_secs(config.defaults.timeout_seconds.into()))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.backend.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /login?user_phone_number={phone}`.
    ///
    /// An empty list means the phone is unknown; some deployments answer 404
    /// instead, which surfaces as `ApiError::NotFound`.
    pub async fn lookup_user(&self, phone: &str) -> Result<Vec<UserRecord>, ApiError> {
        let response = self
            .client
            .get(format!("{}/login", self.base_url))
            .query(&[("user_phone_number", phone)])
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::from_transport)
    }

    /// `POST /register`.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// `POST /sendotp`.
    pub async fn send_otp(&self, phone: &str) -> Result<SendOtpResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/sendotp", self.base_url))
            .json(&json!({ "user_phone_number": phone }))
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::from_transport)
    }

    /// `POST /verifyotp`.
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<VerifyOtpResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/verifyotp", self.base_url))
            .json(&json!({ "user_phone_number": phone, "otp": otp }))
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::from_transport)
    }

    /// Normalize a non-success status into a typed error, salvaging the
    /// server message from the body when there is one.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message);
        debug!(status = status.as_u16(), %body, "backend error response");
        Err(ApiError::from_status(status.as_u16(), message))
    }
}

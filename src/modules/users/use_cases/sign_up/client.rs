use crate::modules::users::core::register_request::RegisterRequest;
use crate::modules::users::use_cases::sign_up::error::SignUpError;
use crate::modules::users::use_cases::sign_up::response::{SignUpResponse, decode_body};
use crate::shared::config::SignUpConfig;
use url::Url;

/// Thin client over the sign-up endpoint. One POST per call, no retries.
pub struct SignUpClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SignUpClient {
    pub fn new(config: &SignUpConfig) -> Self {
        Self::with_endpoint(config.endpoint().clone())
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint, username = %request.username))]
    pub async fn submit(&self, request: &RegisterRequest) -> Result<SignUpResponse, SignUpError> {
        tracing::debug!("submitting sign-up");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = decode_body(&response.bytes().await?);

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "sign-up accepted");
            Ok(SignUpResponse { status, body })
        } else {
            tracing::warn!(status = status.as_u16(), %body, "sign-up rejected");
            Err(SignUpError::Status { status, body })
        }
    }
}

//! reqwest-backed [`ElevatorApi`] implementation.

use async_trait::async_trait;
use elevator_core::{ElevatorStatus, RideRequest, RideResponse};
use runtime::{ApiError, ElevatorApi};
use serde::de::DeserializeOwned;

use crate::config::HttpConfig;
use crate::error::{HttpSetupError, error_detail, network};

/// Elevator backend reached over HTTP.
pub struct HttpElevatorApi {
    /// Connection configuration
    config: HttpConfig,

    /// HTTP client
    http_client: reqwest::Client,
}

impl HttpElevatorApi {
    /// Build a client for the backend described by `config`.
    pub fn new(config: HttpConfig) -> Result<Self, HttpSetupError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// POST an empty JSON object to a command endpoint, ignoring the body.
    async fn command(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(network)?;

        Self::read_body(response).await.map(|_| ())
    }

    /// Check the status and return the response text.
    async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let text = response.text().await.map_err(network)?;

        if !status.is_success() {
            return Err(ApiError::backend(status.as_u16(), error_detail(&text, status)));
        }
        Ok(text)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|e| {
            tracing::debug!("Undecodable backend response: {}", text);
            ApiError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl ElevatorApi for HttpElevatorApi {
    async fn start(&self) -> Result<(), ApiError> {
        self.command("start").await
    }

    async fn stop(&self) -> Result<(), ApiError> {
        self.command("stop").await
    }

    async fn request_ride(&self, request: &RideRequest) -> Result<RideResponse, ApiError> {
        let url = self.config.endpoint("request");
        tracing::debug!(
            "POST {} (pickup={}, destination={}, direction={})",
            url,
            request.pickup_floor,
            request.destination_floor,
            request.desired_direction
        );

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(network)?;

        let text = Self::read_body(response).await?;
        Self::decode(&text)
    }

    async fn fetch_status(&self) -> Result<Vec<ElevatorStatus>, ApiError> {
        let url = self.config.endpoint("status");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(network)?;

        let text = Self::read_body(response).await?;
        Self::decode(&text)
    }

    fn endpoint(&self) -> &str {
        &self.config.base_url
    }
}

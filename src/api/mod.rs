// src/api/mod.rs
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{RoomId, RoomSnapshot, UserId};

use self::types::{Envelope, SelectWinnerRequest};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Server(String),

    #[error("Unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Reads `DEVCONNECT_API_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        match std::env::var("DEVCONNECT_API_URL") {
            Ok(url) => ApiConfig::new(url),
            Err(_) => ApiConfig::default(),
        }
    }
}

/// REST collaborator surface of the bidding core.
///
/// Control actions go over REST, not the realtime channel; the server is
/// expected to push the resulting state change back as an event. Object-safe
/// so sessions can hold a fake in tests.
#[async_trait]
pub trait BiddingBackend: Send + Sync {
    /// Authoritative room snapshot, fetched on view mount.
    async fn fetch_room(&self, room_id: &RoomId) -> Result<RoomSnapshot, ApiError>;

    /// Marks the given freelancer's bid as the winning one.
    async fn select_winner(&self, room_id: &RoomId, freelancer_id: &UserId)
        -> Result<(), ApiError>;

    /// Cancels the auction.
    async fn cancel_bidding(&self, room_id: &RoomId) -> Result<(), ApiError>;

    /// All rooms attached to a project, for the project-detail view.
    async fn rooms_for_project(&self, project_id: &str) -> Result<Vec<RoomSnapshot>, ApiError>;
}

/// reqwest-backed [`BiddingBackend`] against the DevConnect REST API.
#[derive(Debug, Clone)]
pub struct BiddingApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl BiddingApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(BiddingApi { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Unwraps the `{success, message, data}` envelope, mapping a failure
    /// flag to the server-provided message.
    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, ApiError> {
        let envelope = response.json::<Envelope<T>>().await.map_err(|err| {
            ApiError::UnexpectedResponse(format!("could not parse envelope: {}", err))
        })?;

        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "Something went wrong".to_string());
            return Err(ApiError::Server(message));
        }
        Ok(envelope.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        Self::unwrap_envelope(response)
            .await?
            .ok_or_else(|| ApiError::UnexpectedResponse("missing data field".to_string()))
    }
}

#[async_trait]
impl BiddingBackend for BiddingApi {
    async fn fetch_room(&self, room_id: &RoomId) -> Result<RoomSnapshot, ApiError> {
        self.get(&format!("/bidding/{}", room_id)).await
    }

    async fn select_winner(
        &self,
        room_id: &RoomId,
        freelancer_id: &UserId,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/bidding/update/{}", room_id));
        debug!("PATCH {}", url);
        let body = SelectWinnerRequest {
            freelancer_id: freelancer_id.clone(),
        };
        let response = self.http.patch(&url).json(&body).send().await?;
        Self::unwrap_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn cancel_bidding(&self, room_id: &RoomId) -> Result<(), ApiError> {
        // Route assumed pending confirmation with the backend team; the
        // upstream contract never exercised this call.
        let url = self.url(&format!("/bidding/cancel/{}", room_id));
        debug!("POST {}", url);
        let response = self.http.post(&url).send().await?;
        Self::unwrap_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn rooms_for_project(&self, project_id: &str) -> Result<Vec<RoomSnapshot>, ApiError> {
        self.get(&format!("/bidding/{}/project", project_id)).await
    }
}

// src/realtime/config.rs
use super::TransportError;

pub const DEFAULT_WS_URL: &str = "ws://localhost:5000/bidding";

/// How many inbound events may queue per subscriber before the slowest one
/// starts lagging.
pub const EVENT_BUFFER: usize = 256;

#[derive(Debug, Clone)]
pub struct WsConfig {
    pub url: String,
}

impl Default for WsConfig {
    fn default() -> Self {
        WsConfig {
            url: DEFAULT_WS_URL.to_string(),
        }
    }
}

impl WsConfig {
    pub fn new(url: impl Into<String>) -> Self {
        WsConfig { url: url.into() }
    }

    /// Reads `DEVCONNECT_WS_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        match std::env::var("DEVCONNECT_WS_URL") {
            Ok(url) => WsConfig::new(url),
            Err(_) => WsConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), TransportError> {
        if self.url.is_empty() {
            return Err(TransportError::InvalidConfig(
                "url cannot be empty".to_string(),
            ));
        }
        if !self.url.starts_with("ws://") && !self.url.starts_with("wss://") {
            return Err(TransportError::InvalidConfig(
                "url must start with ws:// or wss://".to_string(),
            ));
        }
        Ok(())
    }
}

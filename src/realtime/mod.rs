// src/realtime/mod.rs
pub mod config;
pub mod socket;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::domain::{ClientEvent, ServerEvent};

pub use self::config::WsConfig;
pub use self::socket::SocketTransport;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Invalid transport configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode outbound event: {0}")]
    Serialization(String),

    #[error("Transport is closed")]
    Closed,
}

/// Bidirectional event channel shared by every room view.
///
/// One physical connection lives for the whole application; views hold the
/// handle behind `Arc<dyn Transport>` so tests can substitute a fake. Nothing
/// here assumes delivery guarantees: consumers reconcile via the full-state
/// `biddingData` push rather than relying on strict event ordering.
pub trait Transport: Send + Sync {
    /// Queues one event for the server. Fails only when the connection is
    /// gone; delivery is otherwise fire-and-forget.
    fn emit(&self, event: ClientEvent) -> Result<(), TransportError>;

    /// A fresh subscription to inbound pushes. Dropping the receiver is the
    /// unsubscribe; no handler survives the view that created it.
    fn events(&self) -> broadcast::Receiver<ServerEvent>;
}

// src/realtime/socket.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use tokio::sync::{broadcast, mpsc};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use super::config::{WsConfig, EVENT_BUFFER};
use super::{Transport, TransportError};
use crate::domain::{ClientEvent, ServerEvent};

enum Outbound {
    Event(ClientEvent),
    Shutdown,
}

/// WebSocket-backed [`Transport`], the process-wide realtime connection.
///
/// Created once at application start and handed to views as
/// `Arc<dyn Transport>`. Inbound frames are decoded on a reader task and fanned
/// out over a broadcast channel; outbound events are queued to a writer task so
/// `emit` never blocks the caller.
pub struct SocketTransport {
    out_tx: mpsc::UnboundedSender<Outbound>,
    event_tx: broadcast::Sender<ServerEvent>,
    connected: Arc<AtomicBool>,
}

impl SocketTransport {
    pub async fn connect(config: WsConfig) -> Result<Self, TransportError> {
        config.validate()?;

        let (stream, _) = connect_async(config.url.as_str())
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        info!("Realtime channel connected: {}", config.url);

        let (mut sink, mut source) = stream.split();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<Outbound>();
        let (event_tx, _) = broadcast::channel(EVENT_BUFFER);
        let connected = Arc::new(AtomicBool::new(true));

        // Writer: drains queued client events into the socket.
        tokio::spawn(async move {
            while let Some(outbound) = out_rx.recv().await {
                match outbound {
                    Outbound::Event(event) => match serde_json::to_string(&event) {
                        Ok(text) => {
                            if sink.send(Message::Text(text)).await.is_err() {
                                warn!("Realtime channel write failed, stopping writer");
                                break;
                            }
                        }
                        Err(err) => warn!("Could not encode outbound event: {}", err),
                    },
                    Outbound::Shutdown => {
                        let _ = sink.send(Message::Close(None)).await;
                        break;
                    }
                }
            }
        });

        // Reader: decodes inbound frames and fans them out. A frame that
        // fails shape validation is dropped, never fatal.
        let inbound_tx = event_tx.clone();
        let reader_flag = connected.clone();
        tokio::spawn(async move {
            while let Some(frame) = source.next().await {
                match frame {
                    Ok(Message::Text(text)) => match serde_json::from_str::<ServerEvent>(&text) {
                        Ok(event) => {
                            // Send errors only mean nobody is subscribed right now.
                            let _ = inbound_tx.send(event);
                        }
                        Err(err) => debug!("Dropping unrecognized frame: {}", err),
                    },
                    Ok(Message::Close(_)) => {
                        info!("Realtime channel closed by server");
                        break;
                    }
                    Ok(_) => {}
                    Err(err) => {
                        warn!("Realtime channel read failed: {}", err);
                        break;
                    }
                }
            }
            reader_flag.store(false, Ordering::SeqCst);
        });

        Ok(SocketTransport {
            out_tx,
            event_tx,
            connected,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Graceful shutdown at application exit.
    pub fn close(&self) {
        self.connected.store(false, Ordering::SeqCst);
        let _ = self.out_tx.send(Outbound::Shutdown);
    }
}

impl Transport for SocketTransport {
    fn emit(&self, event: ClientEvent) -> Result<(), TransportError> {
        if !self.is_connected() {
            return Err(TransportError::Closed);
        }
        self.out_tx
            .send(Outbound::Event(event))
            .map_err(|_| TransportError::Closed)
    }

    fn events(&self) -> broadcast::Receiver<ServerEvent> {
        self.event_tx.subscribe()
    }
}

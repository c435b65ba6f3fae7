/// Chat Session Loop
///
/// One task per connection. The loop joins the room on accept, then
/// multiplexes two directions until the client goes away:
/// - Inbound:  WebSocket frame -> parse -> MessageStore -> Broadcaster
/// - Outbound: mpsc bridge (fed by broadcasts) -> WebSocket
///
/// Disconnect is the only path that removes a still-alive connection
/// from its room; every other removal is the broadcaster pruning a
/// connection whose bridge already closed.
use actix_ws::{Message, MessageStream};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::modules::message::{model::InsertMessage, repository::MessageStore};

use super::broadcaster::Broadcaster;
use super::connection::Connection;
use super::frame::{ErrorFrame, InboundFrame};
use super::registry::RoomRegistry;

pub struct ChatSession<S: MessageStore> {
    conn: Connection,
    room_name: String,
    user_name: String,
    registry: Arc<RoomRegistry>,
    broadcaster: Broadcaster,
    store: Arc<S>,
}

impl<S> ChatSession<S>
where
    S: MessageStore + Send + Sync + 'static,
{
    pub fn new(
        conn: Connection,
        room_name: String,
        user_name: String,
        registry: Arc<RoomRegistry>,
        broadcaster: Broadcaster,
        store: Arc<S>,
    ) -> Self {
        Self { conn, room_name, user_name, registry, broadcaster, store }
    }

    /// Drive the session from accept to disconnect.
    pub async fn run(
        self,
        mut ws: actix_ws::Session,
        mut msg_stream: MessageStream,
        mut rx: mpsc::UnboundedReceiver<String>,
    ) {
        self.registry.join(&self.room_name, self.conn.clone()).await;
        tracing::info!("{} joined room {}", self.user_name, self.room_name);

        loop {
            tokio::select! {
                // === INBOUND: client -> store -> fan-out ===
                msg = msg_stream.recv() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            self.handle_frame(&text).await;
                        }

                        Some(Ok(Message::Ping(data))) => {
                            if let Err(e) = ws.pong(&data).await {
                                tracing::error!("Unable to send pong: {}", e);
                                break;
                            }
                        }

                        Some(Ok(Message::Pong(_))) => {}

                        Some(Ok(Message::Close(reason))) => {
                            tracing::info!("WebSocket close frame: {:?}", reason);
                            break;
                        }

                        Some(Ok(Message::Binary(_))) => {
                            tracing::warn!("Binary messages are not supported");
                        }

                        Some(Ok(Message::Continuation(_) | Message::Nop)) => {}

                        Some(Err(e)) => {
                            tracing::error!("WebSocket protocol error: {}", e);
                            break;
                        }

                        // Stream ended (client disconnect)
                        None => break,
                    }
                }

                // === OUTBOUND: broadcasts -> client ===
                Some(json) = rx.recv() => {
                    if ws.text(json).await.is_err() {
                        break;
                    }
                }
            }
        }

        // Leave before dropping the bridge receiver, so membership never
        // holds a connection the session has already torn down.
        self.registry.leave(&self.room_name, self.conn.id()).await;
        let _ = ws.close(None).await;
        tracing::debug!("Session for {} in room {} ended", self.user_name, self.room_name);
    }

    /// Process one inbound text frame: validate, self-heal membership,
    /// record to history, then rebroadcast the original payload verbatim.
    async fn handle_frame(&self, raw: &str) {
        let frame: InboundFrame = match serde_json::from_str(raw) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(
                    "Malformed payload from {}: {} - raw: {}",
                    self.user_name,
                    e,
                    raw.chars().take(100).collect::<String>()
                );
                // reject the frame, keep the session alive
                let _ = self.conn.send(&ErrorFrame::new("invalid message payload").to_json());
                return;
            }
        };

        // A reconnect race can leave this connection out of the fan-out
        // set while it can still read. Re-join before processing.
        if !self.registry.is_member(&self.room_name, self.conn.id()).await {
            tracing::warn!(
                "Sender {} not in members of room {}, rejoining",
                self.user_name,
                self.room_name
            );
            self.registry.join(&self.room_name, self.conn.clone()).await;
        }

        if let Err(e) = self
            .store
            .append(&InsertMessage {
                room_name: self.room_name.clone(),
                sender: frame.sender.clone(),
                content: frame.message.clone(),
            })
            .await
        {
            // a history write failure does not gate the fan-out
            tracing::error!("Failed to record message in room {}: {}", self.room_name, e);
        }

        let delivered = self.broadcaster.broadcast(&self.room_name, raw).await;
        tracing::debug!("Broadcast to room {}: delivered to {} members", self.room_name, delivered);
    }
}

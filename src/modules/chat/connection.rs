/// Connection Handle
///
/// One live client connection. The session task owns the receiving half
/// of the outbound channel and pumps it into the WebSocket; everything
/// else (registry, broadcaster) holds clones of this handle and can only
/// push text into the channel. A send fails exactly when the session
/// task has exited and dropped the receiver, which is the liveness
/// signal the broadcaster prunes on.
use tokio::sync::mpsc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
#[error("connection {0} is closed")]
pub struct ConnectionClosed(pub Uuid);

#[derive(Debug, Clone)]
pub struct Connection {
    id: Uuid,
    tx: mpsc::UnboundedSender<String>,
}

impl Connection {
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { id: Uuid::now_v7(), tx }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queue one text message for delivery to the client.
    pub fn send(&self, text: &str) -> Result<(), ConnectionClosed> {
        self.tx.send(text.to_string()).map_err(|_| ConnectionClosed(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn send_reaches_the_receiver() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = Connection::new(tx);

        conn.send("hello").unwrap();

        assert_eq!(rx.try_recv().unwrap(), "hello");
    }

    #[test]
    fn send_fails_once_receiver_is_dropped() {
        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let conn = Connection::new(tx);
        drop(rx);

        let err = conn.send("hello").unwrap_err();

        assert_eq!(err.0, conn.id());
    }

    #[test]
    fn clones_share_the_same_identity() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let conn = Connection::new(tx);

        assert_eq!(conn.id(), conn.clone().id());
    }
}

/// Room Broadcaster
///
/// Delivers one message to every current member of a room and heals the
/// membership set as it goes: any member whose connection turns out to
/// be dead is removed from the registry instead of surfacing an error.
/// A message is attempted at most once per member and never retried.
use std::sync::Arc;
use uuid::Uuid;

use super::registry::RoomRegistry;

#[derive(Clone)]
pub struct Broadcaster {
    registry: Arc<RoomRegistry>,
}

impl Broadcaster {
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self { registry }
    }

    /// Fan `text` out to the room. Returns the number of members the
    /// message was delivered to; a room with no members is a no-op.
    ///
    /// The whole fan-out runs under the room's mutex: sends are
    /// synchronous channel pushes, so no await is held across the lock,
    /// and same-room broadcasts are serialized, which keeps the delivery
    /// order identical for every member. Two-phase inside the section:
    /// attempt every send, then prune the failures. One dead member
    /// never aborts delivery to the rest.
    pub async fn broadcast(&self, room_name: &str, text: &str) -> usize {
        let Some(slot) = self.registry.slot(room_name).await else {
            return 0;
        };
        let mut members = slot.lock().await;

        let mut delivered = 0;
        let mut dead: Vec<Uuid> = Vec::new();
        for conn in members.values() {
            match conn.send(text) {
                Ok(()) => delivered += 1,
                Err(_) => dead.push(conn.id()),
            }
        }

        for conn_id in dead {
            members.remove(&conn_id);
            tracing::debug!("Pruned dead connection {} from room {}", conn_id, room_name);
        }

        delivered
    }
}

/// Room Registry
///
/// Single source of truth for room name -> live connections. Each room
/// owns its own mutex, so joins, leaves and membership snapshots on the
/// same room are linearized while unrelated rooms never contend. The
/// outer map only grows: an empty room is a valid, inert state and its
/// slot is kept for the next join.
///
/// No lock is held across an await point; all waiting happens on the
/// locks themselves.
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use super::connection::Connection;

pub(super) type MemberMap = HashMap<Uuid, Connection>;

#[derive(Default)]
pub struct RoomRegistry {
    rooms: RwLock<HashMap<String, Arc<Mutex<MemberMap>>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared with the broadcaster, which holds the slot's lock for the
    /// whole of a fan-out so same-room broadcasts stay serialized.
    pub(super) async fn slot(&self, room_name: &str) -> Option<Arc<Mutex<MemberMap>>> {
        self.rooms.read().await.get(room_name).cloned()
    }

    /// Room slots are created lazily on first join.
    async fn slot_or_create(&self, room_name: &str) -> Arc<Mutex<MemberMap>> {
        if let Some(slot) = self.slot(room_name).await {
            return slot;
        }
        let mut rooms = self.rooms.write().await;
        rooms.entry(room_name.to_string()).or_default().clone()
    }

    /// Add `conn` to the room's member set.
    ///
    /// Idempotent: joining the same connection twice leaves a single
    /// entry. Membership of the same connection in another room is left
    /// untouched; a session that switches rooms must leave explicitly.
    pub async fn join(&self, room_name: &str, conn: Connection) {
        let slot = self.slot_or_create(room_name).await;
        slot.lock().await.insert(conn.id(), conn);
    }

    /// Remove a connection from the room's member set. Absent members
    /// and unknown rooms are a no-op, not an error.
    pub async fn leave(&self, room_name: &str, conn_id: Uuid) {
        if let Some(slot) = self.slot(room_name).await {
            slot.lock().await.remove(&conn_id);
        }
    }

    /// Point-in-time snapshot of the room's members. Unknown rooms
    /// yield an empty list.
    pub async fn members(&self, room_name: &str) -> Vec<Connection> {
        match self.slot(room_name).await {
            Some(slot) => slot.lock().await.values().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub async fn is_member(&self, room_name: &str, conn_id: Uuid) -> bool {
        match self.slot(room_name).await {
            Some(slot) => slot.lock().await.contains_key(&conn_id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn connection() -> Connection {
        let (tx, _rx) = mpsc::unbounded_channel();
        Connection::new(tx)
    }

    #[actix_web::test]
    async fn members_of_unknown_room_is_empty() {
        let registry = RoomRegistry::new();

        assert!(registry.members("nowhere").await.is_empty());
    }

    #[actix_web::test]
    async fn join_twice_keeps_a_single_entry() {
        let registry = RoomRegistry::new();
        let conn = connection();

        registry.join("lobby", conn.clone()).await;
        registry.join("lobby", conn.clone()).await;

        let members = registry.members("lobby").await;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id(), conn.id());
    }

    #[actix_web::test]
    async fn leave_of_absent_member_is_a_noop() {
        let registry = RoomRegistry::new();
        let conn = connection();

        registry.leave("lobby", conn.id()).await;
        registry.join("lobby", conn.clone()).await;
        registry.leave("lobby", connection().id()).await;

        assert_eq!(registry.members("lobby").await.len(), 1);
    }

    #[actix_web::test]
    async fn join_leave_sequence_behaves_like_a_set() {
        let registry = RoomRegistry::new();
        let a = connection();
        let b = connection();

        registry.join("lobby", a.clone()).await;
        registry.join("lobby", b.clone()).await;
        registry.leave("lobby", a.id()).await;
        registry.leave("lobby", a.id()).await;
        registry.join("lobby", b.clone()).await;

        let members = registry.members("lobby").await;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id(), b.id());
    }

    #[actix_web::test]
    async fn room_slot_survives_becoming_empty() {
        let registry = RoomRegistry::new();
        let conn = connection();

        registry.join("lobby", conn.clone()).await;
        registry.leave("lobby", conn.id()).await;

        assert!(registry.members("lobby").await.is_empty());

        // joining again works against the same inert slot
        registry.join("lobby", conn.clone()).await;
        assert_eq!(registry.members("lobby").await.len(), 1);
    }

    #[actix_web::test]
    async fn join_does_not_touch_membership_in_other_rooms() {
        let registry = RoomRegistry::new();
        let conn = connection();

        registry.join("red", conn.clone()).await;
        registry.join("blue", conn.clone()).await;

        // no implicit leave; the session is responsible for leaving "red"
        assert!(registry.is_member("red", conn.id()).await);
        assert!(registry.is_member("blue", conn.id()).await);
    }

    #[actix_web::test]
    async fn concurrent_joins_both_land_in_the_room() {
        let registry = Arc::new(RoomRegistry::new());
        let a = connection();
        let b = connection();

        let r1 = registry.clone();
        let c1 = a.clone();
        let t1 = tokio::spawn(async move { r1.join("r", c1).await });
        let r2 = registry.clone();
        let c2 = b.clone();
        let t2 = tokio::spawn(async move { r2.join("r", c2).await });

        t1.await.unwrap();
        t2.await.unwrap();

        let ids: Vec<Uuid> = registry.members("r").await.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&a.id()));
        assert!(ids.contains(&b.id()));
    }
}

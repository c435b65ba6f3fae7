use crate::{api::error, modules::room::schema::RoomEntity};

/// Directory of named rooms.
///
/// Consulted by the HTTP endpoints only; the fan-out core never goes
/// through here (a room exists for fan-out purposes as soon as someone
/// joins it).
#[async_trait::async_trait]
pub trait RoomDirectory {
    async fn insert(
        &self,
        room_name: &str,
        created_by: &str,
    ) -> Result<RoomEntity, error::SystemError>;

    async fn find_by_name(&self, room_name: &str)
        -> Result<Option<RoomEntity>, error::SystemError>;

    async fn list(&self) -> Result<Vec<RoomEntity>, error::SystemError>;
}

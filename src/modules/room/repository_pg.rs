use uuid::Uuid;

use crate::{
    api::error,
    modules::room::{repository::RoomDirectory, schema::RoomEntity},
};

#[derive(Clone)]
pub struct RoomDirectoryPg {
    pool: sqlx::PgPool,
}

impl RoomDirectoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RoomDirectory for RoomDirectoryPg {
    async fn insert(
        &self,
        room_name: &str,
        created_by: &str,
    ) -> Result<RoomEntity, error::SystemError> {
        // rooms.name carries a unique constraint; 23505 surfaces as Conflict
        let room = sqlx::query_as::<_, RoomEntity>(
            "INSERT INTO rooms (id, name, created_by) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(room_name)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(room)
    }

    async fn find_by_name(
        &self,
        room_name: &str,
    ) -> Result<Option<RoomEntity>, error::SystemError> {
        let room = sqlx::query_as::<_, RoomEntity>("SELECT * FROM rooms WHERE name = $1")
            .bind(room_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(room)
    }

    async fn list(&self) -> Result<Vec<RoomEntity>, error::SystemError> {
        let rooms = sqlx::query_as::<_, RoomEntity>("SELECT * FROM rooms ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rooms)
    }
}

use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// One durably recorded chat message.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessageEntity {
    pub id: Uuid,
    pub room_name: String,
    pub sender: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

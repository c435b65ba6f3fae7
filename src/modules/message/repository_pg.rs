use uuid::Uuid;

use crate::{
    api::error,
    modules::message::{model::InsertMessage, repository::MessageStore, schema::MessageEntity},
};

#[derive(Clone)]
pub struct MessageStorePg {
    pool: sqlx::PgPool,
}

impl MessageStorePg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MessageStore for MessageStorePg {
    async fn append(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError> {
        let message = sqlx::query_as::<_, MessageEntity>(
            "INSERT INTO messages (id, room_name, sender, content) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&message.room_name)
        .bind(&message.sender)
        .bind(&message.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn recent(
        &self,
        room_name: &str,
        limit: usize,
    ) -> Result<Vec<MessageEntity>, error::SystemError> {
        // has index on (room_name, created_at DESC)
        let messages = sqlx::query_as::<_, MessageEntity>(
            "SELECT * FROM messages WHERE room_name = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(room_name)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}

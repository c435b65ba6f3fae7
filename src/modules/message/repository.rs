use crate::modules::message::model::InsertMessage;
use crate::{api::error, modules::message::schema::MessageEntity};

/// Durable message history for chat rooms.
///
/// The fan-out core appends through this trait before broadcasting; the
/// room endpoints read recent history back out of it.
#[async_trait::async_trait]
pub trait MessageStore {
    async fn append(&self, message: &InsertMessage) -> Result<MessageEntity, error::SystemError>;

    async fn recent(
        &self,
        room_name: &str,
        limit: usize,
    ) -> Result<Vec<MessageEntity>, error::SystemError>;
}

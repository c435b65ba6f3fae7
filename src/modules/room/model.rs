use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::{message::schema::MessageEntity, room::schema::RoomEntity};

#[derive(Debug, Deserialize, Validate)]
pub struct NewRoom {
    #[validate(length(min = 1, max = 64, message = "Room name must be 1-64 characters"))]
    pub room_name: String,
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
}

/// Room plus its recent history, newest message first.
#[derive(Debug, Serialize)]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: RoomEntity,
    pub messages: Vec<MessageEntity>,
}

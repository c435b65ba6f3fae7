use actix_web::{get, post, web};
use validator::Validate;

use crate::{
    api::{error, success},
    modules::{
        message::{repository::MessageStore, repository_pg::MessageStorePg},
        room::{
            model::{NewRoom, RoomDetail},
            repository::RoomDirectory,
            repository_pg::RoomDirectoryPg,
            schema::RoomEntity,
        },
    },
};

/// How much history is embedded in a single room response.
const ROOM_HISTORY_LIMIT: usize = 50;

#[post("/")]
pub async fn create_room(
    directory: web::Data<RoomDirectoryPg>,
    body: web::Json<NewRoom>,
) -> Result<success::Success<RoomEntity>, error::Error> {
    let body = body.into_inner();
    body.validate().map_err(|e| error::Error::bad_request(e.to_string()))?;

    let room = directory.insert(&body.room_name, &body.username).await?;

    Ok(success::Success::created(Some(room)).message("Successfully created room"))
}

#[get("/")]
pub async fn get_rooms(
    directory: web::Data<RoomDirectoryPg>,
) -> Result<success::Success<Vec<RoomEntity>>, error::Error> {
    let rooms = directory.list().await?;

    Ok(success::Success::ok(Some(rooms)).message("Successfully retrieved rooms"))
}

#[get("/{room_name}")]
pub async fn get_room(
    directory: web::Data<RoomDirectoryPg>,
    store: web::Data<MessageStorePg>,
    room_name: web::Path<String>,
) -> Result<success::Success<RoomDetail>, error::Error> {
    let room = directory
        .find_by_name(&room_name)
        .await?
        .ok_or_else(|| error::Error::not_found("Room not found"))?;

    let messages = store.recent(&room.name, ROOM_HISTORY_LIMIT).await?;

    Ok(success::Success::ok(Some(RoomDetail { room, messages }))
        .message("Successfully retrieved room"))
}

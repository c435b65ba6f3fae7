/// WebSocket HTTP Handler
///
/// Upgrades `GET /ws/{room_name}/{user_name}` into a WebSocket and
/// hands the connection to a `ChatSession` task. The outbound half is
/// an mpsc channel: the registry and broadcaster only ever see the
/// sending side (wrapped in a `Connection`), while the session task
/// pumps the receiving side into the socket.
use actix_web::{web, Error, HttpRequest, HttpResponse};
use tokio::sync::mpsc;

use crate::modules::message::repository_pg::MessageStorePg;

use super::broadcaster::Broadcaster;
use super::connection::Connection;
use super::registry::RoomRegistry;
use super::session::ChatSession;

pub async fn websocket_handler(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<(String, String)>,
    registry: web::Data<RoomRegistry>,
    broadcaster: web::Data<Broadcaster>,
    store: web::Data<MessageStorePg>,
) -> Result<HttpResponse, Error> {
    let (room_name, user_name) = path.into_inner();
    tracing::debug!(
        "WebSocket upgrade request from {:?} for room {}",
        req.peer_addr(),
        room_name
    );

    let (response, ws_session, msg_stream) = actix_ws::handle(&req, stream)?;

    let (tx, rx) = mpsc::unbounded_channel::<String>();
    let conn = Connection::new(tx);

    let session = ChatSession::new(
        conn,
        room_name,
        user_name,
        registry.into_inner(),
        broadcaster.get_ref().clone(),
        store.into_inner(),
    );

    actix_web::rt::spawn(session.run(ws_session, msg_stream, rx));

    Ok(response)
}

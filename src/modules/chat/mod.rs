/// Chat Module
///
/// Real-time room membership and message fan-out:
///
/// - Connection handle (outbound channel to one client)
/// - RoomRegistry (room name -> live connections)
/// - Broadcaster (fan-out with pruning of dead connections)
/// - ChatSession (per-connection read loop)
/// - HTTP handler (upgrade HTTP to WebSocket)
pub mod broadcaster;
pub mod connection;
pub mod frame;
pub mod handler;
pub mod registry;
pub mod session;

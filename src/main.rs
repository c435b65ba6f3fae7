use actix_cors::Cors;
use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::connect_database,
    modules::{
        chat::{broadcaster::Broadcaster, handler::websocket_handler, registry::RoomRegistry},
        message::repository_pg::MessageStorePg,
        room::repository_pg::RoomDirectoryPg,
    },
};

mod api;
mod configs;
mod constants;
mod modules;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let registry = Arc::new(RoomRegistry::new());
    let broadcaster = Broadcaster::new(registry.clone());
    let message_store = MessageStorePg::new(db_pool.clone());
    let room_directory = RoomDirectoryPg::new(db_pool.clone());

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::from(registry.clone()))
            .app_data(web::Data::new(broadcaster.clone()))
            .app_data(web::Data::new(message_store.clone()))
            .app_data(web::Data::new(room_directory.clone()))
            .service(health_check)
            .service(web::scope("/api").configure(modules::room::route::configure))
            .route("/ws/{room_name}/{user_name}", web::get().to(websocket_handler))
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}

pub mod chat;

pub mod message {
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod schema;
}

pub mod room {
    pub mod handle;
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod route;
    pub mod schema;
}

use actix_web::web::{scope, ServiceConfig};

use crate::modules::room::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/rooms").service(create_room).service(get_rooms).service(get_room));
}

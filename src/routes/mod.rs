// Route exports
pub mod data;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/data")
            .configure(data::configure),
    );
}

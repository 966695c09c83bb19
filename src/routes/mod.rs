// Route exports
pub mod dashboard;

use actix_web::web;

pub use dashboard::{render_page, AppState};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(dashboard::configure);
}

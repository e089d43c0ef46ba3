pub mod health;
pub mod seo;

use actix_web::web;

/// Register the server-only routes. Call before the Leptos routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    seo::configure(cfg);
    health::configure(cfg);
}

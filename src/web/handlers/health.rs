use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::content::validate_all;
use crate::web::state::AppState;

#[get("/healthz")]
pub async fn healthz(state: web::Data<AppState>) -> impl Responder {
    match validate_all() {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "environment": state.config.environment.as_str(),
        })),
        Err(e) => {
            log::error!("content check failed: {e}");
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "error",
                "error": e.to_string(),
            }))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}

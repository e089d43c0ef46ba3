use actix_web::{Responder, get, web};

use crate::web::helpers::{absolute_url, render};
use crate::web::state::AppState;
use crate::web::templates::{RobotsTemplate, SitemapTemplate};

#[get("/sitemap.xml")]
pub async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    render(
        SitemapTemplate::for_origin(&state.config.public_origin),
        "application/xml; charset=utf-8",
    )
}

#[get("/robots.txt")]
pub async fn robots(state: web::Data<AppState>) -> impl Responder {
    render(
        RobotsTemplate {
            sitemap_url: absolute_url(
                &state.config.public_origin,
                "/sitemap.xml",
            ),
            allow: state.config.environment.is_production(),
        },
        "text/plain; charset=utf-8",
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sitemap).service(robots);
}

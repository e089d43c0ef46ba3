use actix_web::HttpResponse;
use askama::Template;

pub fn render<T: Template>(t: T, content_type: &str) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok().content_type(content_type).body(body),
        Err(e) => {
            log::error!("template render failed: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    }
}

/// Absolute URL for a site path. `origin` never ends in a slash.
pub fn absolute_url(origin: &str, path: &str) -> String {
    if path == "/" {
        format!("{origin}/")
    } else {
        format!("{origin}{path}")
    }
}

//! HTTP handlers rendering the task lists and receiving ordering changes.

use actix_web::HttpResponse;
use tera::{Context, Tera};

pub mod ordering;
pub mod tasks;

/// Renders `template` into an HTML response.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::RenderError;

/// Render an askama template into an HTML response, or a 500 if it fails.
pub fn html_response<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => render_failure(RenderError::from(e)),
    }
}

pub fn render_failure(e: RenderError) -> Response {
    tracing::error!(%e, "Failed to render page");
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}

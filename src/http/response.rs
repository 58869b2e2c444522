//! Response construction.
//!
//! # Responsibilities
//! - HTML pages with the `text/html; charset=utf-8` content type
//! - Plain-text error bodies in the net/http style (`404 page not found`)
//! - Map render failures to status codes
//!
//! # Design Decisions
//! - Redirects are client-side markup; this module never emits a 3xx
//! - Parse failures expose the raw error text, execution failures do not

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::render::RenderError;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// 200 with an HTML body.
pub fn html(body: String) -> Response {
    ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body).into_response()
}

/// Plain-text error body terminated by a newline.
pub fn plain_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, TEXT_CONTENT_TYPE),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        format!("{message}\n"),
    )
        .into_response()
}

pub fn not_found() -> Response {
    plain_error(StatusCode::NOT_FOUND, "404 page not found")
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        match self {
            RenderError::Parse(message) => {
                plain_error(StatusCode::INTERNAL_SERVER_ERROR, &message)
            }
            RenderError::Execute(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

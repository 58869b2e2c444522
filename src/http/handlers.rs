//! Request handlers.
//!
//! Every request lands in [`dispatch`], which asks the internal router where
//! the path leads and renders the matching page.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::registry::PackageEntry;
use crate::render::{HomeContext, RedirectContext, RenderContext, VanityContext};
use crate::routing::{decode_path, wants_import_metadata, Route};

/// Entry point for all paths and methods.
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&request);
    let path = decode_path(request.uri().path());

    let (route_label, response) = match state.router.route(&path) {
        Route::Home => ("home", home(&state, &request, request_id)),
        Route::Package(entry) => package(&state, &request, entry, request_id),
        Route::NotFound => {
            tracing::debug!(request_id = %request_id, path = %path, "No package registered");
            ("not_found", response::not_found())
        }
    };

    metrics::record_request(route_label, response.status(), start_time);
    response
}

/// Listing of every registered package.
fn home(state: &AppState, request: &Request<Body>, request_id: &str) -> Response {
    let host = state.hosts.resolve(request);
    let ctx = HomeContext::new(&host, state.router.registry());
    render_page(state, ctx.into(), request_id)
}

/// Import metadata for `go get`, or a browser redirect to the docs.
fn package(
    state: &AppState,
    request: &Request<Body>,
    entry: &PackageEntry,
    request_id: &str,
) -> (&'static str, Response) {
    let host = state.hosts.resolve(request);

    if wants_import_metadata(request.uri().query()) {
        tracing::debug!(
            request_id = %request_id,
            import_path = %format_args!("{host}{}", entry.path),
            vcs = %entry.vcs,
            "Serving import metadata"
        );
        let ctx = VanityContext::new(&host, entry);
        ("vanity", render_page(state, ctx.into(), request_id))
    } else {
        let ctx = RedirectContext::new(&host, entry);
        ("redirect", render_page(state, ctx.into(), request_id))
    }
}

fn render_page(state: &AppState, ctx: RenderContext<'_>, request_id: &str) -> Response {
    match state.renderer.render(&ctx) {
        Ok(body) => response::html(body),
        Err(err) => {
            tracing::error!(
                request_id = %request_id,
                template = %ctx.kind(),
                error = %err,
                "Template rendering failed"
            );
            err.into_response()
        }
    }
}

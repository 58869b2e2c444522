//! Behavior when a page template is broken.

use axum::http::{header, StatusCode};
use vanity_resolver::render::{Renderer, TemplateSources};
use vanity_resolver::{HttpServer, Registry, ResolverConfig};

mod common;

fn app_with(sources: TemplateSources) -> axum::Router {
    HttpServer::with_parts(
        ResolverConfig::default(),
        Registry::builtin(),
        Renderer::with_sources(sources),
    )
    .unwrap()
    .router()
}

#[tokio::test]
async fn test_parse_error_returns_500_with_error_text() {
    let app = app_with(TemplateSources {
        home: "{% if %}".into(),
        ..TemplateSources::default()
    });

    let (status, response) = common::get(&app, "/", &[]).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    let body = common::body_string(response).await;
    assert!(!body.trim().is_empty());
    assert!(!body.contains("<html>"));

    // Other pages are unaffected.
    let (status, _) = common::get(&app, "/go-utils?go-get=1", &[]).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_execution_error_returns_500_without_partial_body() {
    let app = app_with(TemplateSources {
        vanity: "<html>{{ domain }}{{ not_in_context }}</html>".into(),
        ..TemplateSources::default()
    });

    let (status, body) = common::get_body(&app, "/sarin?go-get=1", &[]).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());

    let (status, _) = common::get(&app, "/sarin", &[]).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_not_found_never_touches_templates() {
    let app = app_with(TemplateSources {
        home: "{% if %}".into(),
        vanity: "{% if %}".into(),
        redirect: "{% if %}".into(),
    });

    let (status, _) = common::get(&app, "/missing?go-get=1", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

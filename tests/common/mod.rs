//! Shared utilities for integration tests.

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt; // for `oneshot`
use vanity_resolver::{HttpServer, ResolverConfig};

/// Router built from the given configuration and the compiled-in registry.
#[allow(dead_code)]
pub fn app(config: ResolverConfig) -> Router {
    HttpServer::new(config).unwrap().router()
}

/// Issue a GET for `uri` with the given extra headers.
pub async fn get(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, Response<Body>) {
    let mut builder = Request::builder()
        .method("GET")
        .uri(uri)
        .header("Host", "localhost:8421");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    (response.status(), response)
}

/// Read a response body as UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// GET `uri` and return status plus body.
#[allow(dead_code)]
pub async fn get_body(app: &Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, String) {
    let (status, response) = get(app, uri, headers).await;
    (status, body_string(response).await)
}

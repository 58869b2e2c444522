//! Public host derivation.
//!
//! # Responsibilities
//! - Pick the domain shown in rendered pages and import paths
//!
//! # Design Decisions
//! - Precedence: configured override, forwarded header, request host
//! - Empty values fall through to the next source
//! - Never fails; an empty string is a valid result

use axum::http::{header, HeaderName, HeaderValue, Request};

use crate::config::HostConfig;

/// Resolves the externally visible host for a request.
#[derive(Debug, Clone)]
pub struct HostResolver {
    override_host: Option<String>,
    forwarded_header: HeaderName,
}

impl HostResolver {
    pub fn new(override_host: Option<String>, forwarded_header: HeaderName) -> Self {
        Self {
            override_host: override_host.filter(|host| !host.is_empty()),
            forwarded_header,
        }
    }

    /// Build from configuration.
    ///
    /// `HttpServer` validates the configuration first, so the header name is
    /// known to parse; a direct caller passing an invalid one gets the default.
    pub fn from_config(config: &HostConfig) -> Self {
        let forwarded_header = HeaderName::from_bytes(config.forwarded_header.as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("x-forwarded-host"));
        Self::new(config.override_host.clone(), forwarded_header)
    }

    /// Resolve the host for `req`.
    pub fn resolve<B>(&self, req: &Request<B>) -> String {
        if let Some(host) = &self.override_host {
            return host.clone();
        }

        let forwarded = req
            .headers()
            .get(&self.forwarded_header)
            .filter(|v| !v.is_empty());
        if let Some(host) = forwarded {
            return header_text(host);
        }

        request_host(req).unwrap_or_default()
    }
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new(None, HeaderName::from_static("x-forwarded-host"))
    }
}

/// Host the client addressed: URI authority first, then the `Host` header.
fn request_host<B>(req: &Request<B>) -> Option<String> {
    if let Some(authority) = req.uri().authority() {
        return Some(authority.as_str().to_string());
    }
    req.headers().get(header::HOST).map(header_text)
}

/// Header value as text. Bytes outside visible ASCII are kept, with invalid
/// UTF-8 replaced, so such a value still takes precedence.
fn header_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

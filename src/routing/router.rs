//! Request dispatch.
//!
//! # Responsibilities
//! - Decide between the home page and a package page
//! - Look package paths up in the registry
//! - Detect the `go-get` discovery flag
//!
//! # Design Decisions
//! - Only the exact path `/` is the home page
//! - Immutable after construction (thread-safe without locks)
//! - Explicit NotFound rather than a silent default

use std::borrow::Cow;
use std::sync::Arc;

use percent_encoding::percent_decode_str;

use crate::registry::{PackageEntry, Registry};

/// Query parameter set by `go get` when probing an import path.
pub const DISCOVERY_PARAM: &str = "go-get";

/// Where a request path leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    Package(&'a PackageEntry),
    NotFound,
}

/// Dispatches request paths against the package registry.
#[derive(Debug, Clone)]
pub struct Router {
    registry: Arc<Registry>,
}

impl Router {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Route a request path (without query string).
    pub fn route(&self, path: &str) -> Route<'_> {
        if path == "/" {
            return Route::Home;
        }
        match self.registry.find_by_path(path) {
            Some(entry) => Route::Package(entry),
            None => Route::NotFound,
        }
    }
}

/// Percent-decode a raw request path before it is routed.
///
/// `/go%2Dutils` and `/go-utils` name the same package. Escapes that do not
/// decode to UTF-8 are replaced, so such paths never match a registry entry.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Whether the first `go-get` query value is exactly `1`.
pub fn wants_import_metadata(query: Option<&str>) -> bool {
    let Some(query) = query else {
        return false;
    };
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == DISCOVERY_PARAM)
        .is_some_and(|(_, value)| value == "1")
}

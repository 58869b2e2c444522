//! Vanity import path resolver library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;
pub mod render;
pub mod routing;

pub use config::ResolverConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::{PackageEntry, Registry, VcsKind};

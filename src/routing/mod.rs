//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (host, path, query, headers)
//!     → host.rs (public host for rendering)
//!     → router.rs (percent-decode path; home / package / not found)
//!     → router.rs (go-get flag: import metadata or browser redirect)
//! ```
//!
//! # Design Decisions
//! - Deterministic: same input always yields the same route
//! - First registry match wins
//! - Paths are compared after percent-decoding, without other normalization
//! - No prefix or wildcard matching

pub mod host;
pub mod router;

pub use host::HostResolver;
pub use router::{decode_path, wants_import_metadata, Route, Router};

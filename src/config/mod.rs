//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (VANITY_CONFIG)
//!     → environment overrides (PORT, HOST_HEADER, HOST)
//!     → validation.rs (semantic checks)
//!     → ResolverConfig (validated, immutable)
//!     → passed by value into the HTTP server
//! ```
//!
//! # Design Decisions
//! - Resolved once at startup; there is no reload
//! - All fields have defaults so an empty environment is a valid deployment
//! - The package registry is compiled in and never read from configuration

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::{HostConfig, ListenerConfig, ObservabilityConfig, ResolverConfig, TimeoutConfig};

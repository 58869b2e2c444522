//! Vanity import path resolver.
//!
//! Serves `go get` discovery metadata for packages hosted under a custom
//! domain and sends browsers to their pkg.go.dev documentation.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::router ──▶ registry
//!                         │                  │
//!                         │                  ▼
//!                         │           routing::host (public domain)
//!                         │                  │
//!                         │                  ▼
//!     Client Response     │            render (home / vanity / redirect)
//!     ◀───────────────────┘
//! ```
//!
//! # Configuration
//! - `PORT`: listening port (default 8421)
//! - `HOST_HEADER`: header carrying the public host (default `X-Forwarded-Host`)
//! - `HOST`: fixed public host, overrides everything else
//! - `VANITY_CONFIG`: optional TOML file applied before the variables above

use std::process::ExitCode;

use vanity_resolver::config::load_from_env;
use vanity_resolver::lifecycle;
use vanity_resolver::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_from_env() {
        Ok(config) => config,
        Err(err) => {
            logging::init_logging(&Default::default());
            tracing::error!(error = %err, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);

    tracing::info!("vanity-resolver v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        port = config.listener.port,
        forwarded_header = %config.host.forwarded_header,
        host_override = ?config.host.override_host,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if let Err(err) = lifecycle::run(config).await {
        tracing::error!(error = %err, "Fatal error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

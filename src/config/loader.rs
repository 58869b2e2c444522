//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ResolverConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Names a TOML file to load before environment overrides are applied.
pub const CONFIG_FILE_ENV: &str = "VANITY_CONFIG";
pub const PORT_ENV: &str = "PORT";
pub const HOST_HEADER_ENV: &str = "HOST_HEADER";
pub const HOST_OVERRIDE_ENV: &str = "HOST";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name} value `{value}`")]
    Env { name: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ResolverConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ResolverConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the startup configuration from the real process environment.
pub fn load_from_env() -> Result<ResolverConfig, ConfigError> {
    resolve(|name| std::env::var(name).ok())
}

/// Resolve configuration through an arbitrary variable lookup.
///
/// Defaults, then the file named by `VANITY_CONFIG`, then `PORT`,
/// `HOST_HEADER` and `HOST`. Empty variables count as unset.
pub fn resolve<F>(lookup: F) -> Result<ResolverConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

    let mut config = match var(CONFIG_FILE_ENV) {
        Some(path) => load_config(Path::new(&path))?,
        None => ResolverConfig::default(),
    };

    if let Some(port) = var(PORT_ENV) {
        config.listener.port = port.parse().map_err(|_| ConfigError::Env {
            name: PORT_ENV,
            value: port.clone(),
        })?;
    }

    if let Some(header) = var(HOST_HEADER_ENV) {
        config.host.forwarded_header = header;
    }

    if let Some(host) = var(HOST_OVERRIDE_ENV) {
        config.host.override_host = Some(host);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = resolve(env(&[])).unwrap();
        assert_eq!(config.listener.port, 8421);
        assert_eq!(config.host.forwarded_header, "X-Forwarded-Host");
        assert_eq!(config.host.override_host, None);
    }

    #[test]
    fn test_environment_overrides() {
        let config = resolve(env(&[
            ("PORT", "9000"),
            ("HOST_HEADER", "X-Original-Host"),
            ("HOST", "go.example.org"),
        ]))
        .unwrap();

        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.host.forwarded_header, "X-Original-Host");
        assert_eq!(config.host.override_host.as_deref(), Some("go.example.org"));
    }

    #[test]
    fn test_empty_variables_are_ignored() {
        let config = resolve(env(&[("PORT", ""), ("HOST_HEADER", ""), ("HOST", "")])).unwrap();
        assert_eq!(config.listener.port, 8421);
        assert_eq!(config.host.forwarded_header, "X-Forwarded-Host");
        assert_eq!(config.host.override_host, None);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = resolve(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Env { name: "PORT", .. }));
    }

    #[test]
    fn test_invalid_header_rejected() {
        let err = resolve(env(&[("HOST_HEADER", "not a header")])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("not a header"));
    }

    #[test]
    fn test_file_then_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[listener]
port = 8000

[host]
override_host = "file.example.org"

[observability]
log_level = "debug"
"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = resolve(env(&[("VANITY_CONFIG", path.as_str()), ("PORT", "8100")])).unwrap();
        assert_eq!(config.listener.port, 8100);
        assert_eq!(config.host.override_host.as_deref(), Some("file.example.org"));
        assert_eq!(config.host.forwarded_header, "X-Forwarded-Host");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = resolve(env(&[("VANITY_CONFIG", "/nonexistent/vanity.toml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

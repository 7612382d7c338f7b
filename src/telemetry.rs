use anyhow::{Context, Result};
use std::env::VarError;
use tracing_subscriber::EnvFilter;
use crate::config::{Config, LogFormat};

/// Default filter when `RUST_LOG` is not set: this crate and the HTTP trace
/// layer at the configured level, everything else at the subscriber default.
pub fn default_directives(level: &str) -> String {
    format!("user_service={level},tower_http={level}")
}

/// `RUST_LOG` wins when set; a value that does not parse is an error rather
/// than a silent fallback.
pub fn filter_from(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("CONFIG ERROR: invalid RUST_LOG '{}'", directives)),
        None => EnvFilter::try_new(default_directives(level))
            .with_context(|| format!("CONFIG ERROR: invalid LOG_LEVEL '{}'", level)),
    }
}

pub fn build_filter(cfg: &Config) -> Result<EnvFilter> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => filter_from(Some(&directives), &cfg.log_level),
        Err(VarError::NotPresent) => filter_from(None, &cfg.log_level),
        Err(VarError::NotUnicode(_)) => anyhow::bail!("CONFIG ERROR: RUST_LOG is not valid UTF-8"),
    }
}

/// Install the global tracing subscriber. Fails if one is already set.
pub fn init(cfg: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(build_filter(cfg)?);

    match cfg.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

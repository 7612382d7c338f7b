use anyhow::Result;
use serde::Deserialize;
use std::ffi::OsString;

/// Environment variables read at startup. Anything else in the process
/// environment is ignored.
const RECOGNIZED_VARS: [&str; 3] = ["PORT", "LOG_LEVEL", "LOG_FORMAT"];

pub const BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

fn default_port() -> u16 { DEFAULT_PORT }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> LogFormat { LogFormat::Text }

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", BIND_HOST, self.port)
    }
}

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.port == 0 {
        anyhow::bail!("CONFIG ERROR: PORT must be between 1 and 65535");
    }
    Ok(())
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config> {
    load_from(recognized_vars(std::env::vars_os())?)
}

/// Keep only the recognized variables. Other variables may hold arbitrary
/// bytes and are skipped without decoding their values.
pub fn recognized_vars<I>(vars: I) -> Result<config::Map<String, String>>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut recognized = config::Map::new();
    for (key, value) in vars {
        let Some(key) = key.to_str().filter(|k| RECOGNIZED_VARS.contains(k)) else {
            continue;
        };
        let value = value
            .into_string()
            .map_err(|_| anyhow::anyhow!("CONFIG ERROR: {} is not valid UTF-8", key))?;
        recognized.insert(key.to_string(), value);
    }
    Ok(recognized)
}

/// Load configuration from an explicit variable map.
///
/// Empty values are treated as unset, so `PORT=` falls back to the default.
pub fn load_from(vars: config::Map<String, String>) -> Result<Config> {
    let cfg: Config = config::Config::builder()
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("log_level", "info")?
        .set_default("log_format", "text")?
        .add_source(
            config::Environment::default()
                .source(Some(vars))
                .try_parsing(true)
                .ignore_empty(true),
        )
        .build()?
        .try_deserialize()?;

    validate(&cfg)?;

    Ok(cfg)
}

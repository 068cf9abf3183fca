//! Server configuration from the environment.

use std::net::SocketAddr;

use crate::schedule::ScheduleConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Where and how schedules are loaded.
    pub schedule: ScheduleConfig,

    /// Directory served under `/static`.
    pub static_dir: String,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// | Variable                  | Default          |
    /// |---------------------------|------------------|
    /// | `BOARD_BIND_ADDR`         | `127.0.0.1:3000` |
    /// | `BOARD_SCHEDULE_DIR`      | `data`           |
    /// | `BOARD_SCHEDULE_URL`      | unset            |
    /// | `BOARD_STATIC_DIR`        | `static`         |
    /// | `BOARD_DAY_SELECTION`     | `false`          |
    /// | `BOARD_HTTP_TIMEOUT_SECS` | `30`             |
    ///
    /// `BOARD_SCHEDULE_URL` takes precedence over `BOARD_SCHEDULE_DIR`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("BOARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                name: "BOARD_BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let schedule = match lookup("BOARD_SCHEDULE_URL").filter(|u| !u.is_empty()) {
            Some(url) => ScheduleConfig::remote(url),
            None => ScheduleConfig::directory(
                lookup("BOARD_SCHEDULE_DIR").unwrap_or_else(|| "data".to_string()),
            ),
        };

        let day_selection = match lookup("BOARD_DAY_SELECTION") {
            Some(raw) => parse_bool("BOARD_DAY_SELECTION", &raw)?,
            None => false,
        };

        let timeout_secs = match lookup("BOARD_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    name: "BOARD_HTTP_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => 30,
        };

        let static_dir = lookup("BOARD_STATIC_DIR").unwrap_or_else(|| "static".to_string());

        Ok(Self {
            bind_addr,
            schedule: schedule
                .with_day_selection(day_selection)
                .with_timeout_secs(timeout_secs),
            static_dir,
        })
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}

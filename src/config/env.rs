//! Configuration loading from the process environment.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::config::schema::{ProbeSettings, RecordSettings, Settings};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is present but does not parse as its expected type.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl Settings {
    /// Load settings from the environment.
    ///
    /// Fails fast on the first missing or unparsable variable, before any
    /// network call is made.
    pub fn from_env() -> Result<Self, ConfigError> {
        let hosted_zone = required("HOSTED_ZONE")?;
        let record_name = required("RECORD_NAME")?;
        let primary_ip = required("PRIMARY_IP")?;
        let secondary_ip = required("SECONDARY_IP")?;
        let workspace = required("WORKSPACE")?;

        let phase_param = match optional("CLUSTER_PHASE_PARAM") {
            Some(key) => key,
            None => format!("/kubernetes/{workspace}/cluster_phase"),
        };

        let probes = ProbeSettings {
            health_port: parsed_or("HEALTH_PORT", 8080)?,
            liveness_scheme: optional("LIVENESS_SCHEME").unwrap_or_else(|| "https".to_string()),
            liveness_port: parsed_or("LIVENESS_PORT", 6443)?,
            liveness_path: optional("LIVENESS_PATH").unwrap_or_else(|| "/healthz".to_string()),
            accept_invalid_certs: parsed_or("ACCEPT_INVALID_CERTS", true)?,
            connect_timeout_secs: parsed_or("CONNECT_TIMEOUT_SECS", 2)?,
            request_timeout_secs: parsed_or("REQUEST_TIMEOUT_SECS", 3)?,
        };

        Ok(Settings {
            record: RecordSettings {
                hosted_zone,
                record_name,
                ttl: parsed_or("RECORD_TTL", 60)?,
            },
            primary_ip,
            secondary_ip,
            phase_param,
            probes,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

fn parsed_or<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            value: raw,
            reason: e.to_string(),
        }),
    }
}

//! Gateway configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use mantel_client::state::boot::{BootConfig, HealthCheckPolicy, LandingScreen};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://localhost:4001";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL requests under `api_prefix` are forwarded to, without trailing slash.
    pub api_upstream: String,
    /// Path prefix stripped before forwarding, e.g. `/api`.
    pub api_prefix: String,
    pub proxy_timeout_secs: u64,
    /// Settings rendered into the SSR shell for the browser app.
    pub boot: BootConfig,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MANTEL_API_UPSTREAM`: default `http://localhost:4001`
    /// - `MANTEL_API_PREFIX`: default `/api`
    /// - `MANTEL_PROXY_TIMEOUT_SECS`: default 30
    /// - `MANTEL_LANDING`: `authorization` (default) or `splash`
    /// - `MANTEL_HEALTHCHECK_POLICY`: `once` (default) or `navigation`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a set variable cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
                reason: "expected a port number",
            })?,
            None => DEFAULT_PORT,
        };

        let api_upstream = parse_upstream(lookup("MANTEL_API_UPSTREAM"))?;
        let api_prefix = parse_prefix(lookup("MANTEL_API_PREFIX"))?;

        let proxy_timeout_secs = match lookup("MANTEL_PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "MANTEL_PROXY_TIMEOUT_SECS",
                        value: raw,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        let boot = BootConfig {
            landing: LandingScreen::parse(lookup("MANTEL_LANDING").as_deref()),
            healthcheck: HealthCheckPolicy::parse(lookup("MANTEL_HEALTHCHECK_POLICY").as_deref()),
        };

        Ok(Self { port, api_upstream, api_prefix, proxy_timeout_secs, boot })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_upstream: DEFAULT_API_UPSTREAM.to_owned(),
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
            boot: BootConfig::default(),
        }
    }
}

fn parse_upstream(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_UPSTREAM.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::Invalid {
            var: "MANTEL_API_UPSTREAM",
            value: raw,
            reason: "expected an http(s) URL",
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_prefix(raw: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_PREFIX.to_owned());
    };
    let segment = raw.trim().trim_matches('/');
    if segment.is_empty() || segment.contains(['{', '}', '*']) {
        return Err(ConfigError::Invalid {
            var: "MANTEL_API_PREFIX",
            value: raw,
            reason: "expected a non-root path prefix",
        });
    }
    Ok(format!("/{segment}"))
}

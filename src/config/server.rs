//! HTTP listener configuration.

use std::env;

const DEFAULT_PORT: u16 = 3001;

/// Where the HTTP server listens
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Behind a reverse proxy: key rate limits on `X-Forwarded-For` /
    /// `X-Real-IP` instead of the socket address (`TRUST_PROXY`)
    pub trust_proxy: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("127.0.0.1:{DEFAULT_PORT}"),
            trust_proxy: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let in_container = env::var("KUBERNETES_SERVICE_HOST").is_ok()
            || env::var("DOCKER_CONTAINER").is_ok()
            || std::path::Path::new("/.dockerenv").exists();

        let bind_address = detect_bind_address(
            env::var("BIND_ADDRESS").ok().as_deref(),
            env::var("HOST").ok().as_deref(),
            super::env_parse("PORT"),
            in_container,
        );

        Self {
            bind_address,
            trust_proxy: super::env_flag("TRUST_PROXY", false),
        }
    }
}

/// Resolve the listen address.
///
/// An explicit `BIND_ADDRESS` wins. Otherwise the host comes from `HOST`, or
/// all interfaces inside a container and loopback elsewhere.
pub fn detect_bind_address(
    bind_override: Option<&str>,
    host: Option<&str>,
    port: Option<u16>,
    in_container: bool,
) -> String {
    if let Some(bind) = bind_override.filter(|b| !b.trim().is_empty()) {
        return bind.trim().to_string();
    }

    let host = match host.filter(|h| !h.trim().is_empty()) {
        Some(h) => h.trim(),
        None if in_container => "0.0.0.0",
        None => "127.0.0.1",
    };

    format!("{host}:{}", port.unwrap_or(DEFAULT_PORT))
}

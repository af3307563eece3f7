//! Environment-driven configuration for both binaries.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_CHAT_SERVICE_PORT: u16 = 8001;
const DEFAULT_GATEWAY_PORT: u16 = 8000;
const DEFAULT_CHAT_SERVICE_URL: &str = "http://localhost:8001";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Configuration for the chat service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatServiceConfig {
    pub host: String,
    pub port: u16,
}

impl ChatServiceConfig {
    /// | Variable            | Default   |
    /// |---------------------|-----------|
    /// | `CHAT_SERVICE_HOST` | `0.0.0.0` |
    /// | `CHAT_SERVICE_PORT` | `8001`    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("CHAT_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or(lookup("CHAT_SERVICE_PORT"), DEFAULT_CHAT_SERVICE_PORT),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration for the API gateway.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the chat service, without a trailing slash.
    pub chat_service_url: String,
    pub upstream_timeout: Duration,
}

impl GatewayConfig {
    /// | Variable                    | Default                 |
    /// |-----------------------------|-------------------------|
    /// | `GATEWAY_HOST`              | `0.0.0.0`               |
    /// | `GATEWAY_PORT`              | `8000`                  |
    /// | `CHAT_SERVICE_URL`          | `http://localhost:8001` |
    /// | `CHAT_SERVICE_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let chat_service_url = lookup("CHAT_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_CHAT_SERVICE_URL.into())
            .trim_end_matches('/')
            .to_string();
        Self {
            host: lookup("GATEWAY_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: parse_or(lookup("GATEWAY_PORT"), DEFAULT_GATEWAY_PORT),
            chat_service_url,
            upstream_timeout: Duration::from_secs(parse_or(
                lookup("CHAT_SERVICE_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default upstream provider for proposal voting summaries.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.koios.rest/api/v1";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the voting summary provider
    pub upstream_base_url: String,
    /// Credential forwarded as the upstream `authorization` header
    pub api_key: String,
    /// Freshness window of cached summaries, in seconds
    pub cache_ttl: u64,
    /// Entry count above which an insert triggers a stale-entry sweep
    pub sweep_threshold: usize,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
    /// `max-age` sent to the upstream transport cache, in seconds
    pub upstream_max_age: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Provider base URL (default: Koios v1)
    /// - `KOIOS_API_KEY` - Upstream credential (default: empty)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `SWEEP_THRESHOLD` - Sweep trigger size (default: 100)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 30)
    /// - `UPSTREAM_MAX_AGE` - Transport cache max-age in seconds (default: 1800)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.upstream_base_url),
            api_key: env::var("KOIOS_API_KEY").unwrap_or_default(),
            cache_ttl: parse_var("CACHE_TTL", defaults.cache_ttl),
            sweep_threshold: parse_var("SWEEP_THRESHOLD", defaults.sweep_threshold),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT", defaults.upstream_timeout),
            upstream_max_age: parse_var("UPSTREAM_MAX_AGE", defaults.upstream_max_age),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            api_key: String::new(),
            cache_ttl: 300,
            sweep_threshold: 100,
            upstream_timeout: 30,
            upstream_max_age: 1800,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.api_key, "");
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.sweep_threshold, 100);
        assert_eq!(config.upstream_timeout, 30);
        assert_eq!(config.upstream_max_age, 1800);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("UPSTREAM_BASE_URL");
        env::remove_var("KOIOS_API_KEY");
        env::remove_var("CACHE_TTL");
        env::remove_var("SWEEP_THRESHOLD");
        env::remove_var("UPSTREAM_TIMEOUT");
        env::remove_var("UPSTREAM_MAX_AGE");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_base_url, DEFAULT_UPSTREAM_BASE_URL);
        assert_eq!(config.api_key, "");
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.sweep_threshold, 100);
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        env::set_var("VSP_TEST_GARBAGE_PORT", "not-a-number");
        assert_eq!(parse_var("VSP_TEST_GARBAGE_PORT", 8080u16), 8080);
        env::remove_var("VSP_TEST_GARBAGE_PORT");
    }
}

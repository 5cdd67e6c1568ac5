//! Engine configuration from environment variables.

use crate::infrastructure::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_TIMEOUT_SECS};
use crate::infrastructure::plugins::DEFAULT_PLUGIN_DIR;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Everything `main` needs to wire the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub plugin_dir: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
    /// `None` disables CORS handling; `Some("*")` allows any origin
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset or unparseable values fall back to defaults. An unset
    /// `CORS_ALLOWED_ORIGINS` allows any origin; set it to an empty string to
    /// turn CORS handling off.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let gemini_timeout_secs = lookup("GEMINI_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_GEMINI_TIMEOUT_SECS);

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            None => Some("*".to_string()),
            Some(v) => Some(v.trim().to_string()).filter(|s| !s.is_empty()),
        };

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port,
            plugin_dir: lookup("PLUGIN_DIR").unwrap_or_else(|| DEFAULT_PLUGIN_DIR.into()),
            gemini_base_url: lookup("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.into()),
            gemini_timeout_secs,
            cors_allowed_origins,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.plugin_dir, "plugins");
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.gemini_timeout_secs, 120);
        assert_eq!(config.cors_allowed_origins.as_deref(), Some("*"));
    }

    #[test]
    fn server_port_wins_over_port() {
        let config = config_from(&[("SERVER_PORT", "9000"), ("PORT", "7000")]);
        assert_eq!(config.server_port, 9000);

        let config = config_from(&[("PORT", "7000")]);
        assert_eq!(config.server_port, 7000);
    }

    #[test]
    fn unparseable_numbers_fall_back() {
        let config = config_from(&[("SERVER_PORT", "eighty"), ("GEMINI_TIMEOUT_SECS", "-5")]);
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.gemini_timeout_secs, DEFAULT_GEMINI_TIMEOUT_SECS);
    }

    #[test]
    fn blank_cors_setting_disables_cors() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "  ")]);
        assert_eq!(config.cors_allowed_origins, None);

        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "http://localhost:5173")]);
        assert_eq!(
            config.cors_allowed_origins.as_deref(),
            Some("http://localhost:5173")
        );
    }
}

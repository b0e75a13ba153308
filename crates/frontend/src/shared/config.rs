//! Client configuration
//!
//! A static WASM bundle has no process environment at runtime, so settings
//! are read from the build environment (`option_env!`) once and cached.
//!
//! | variable              | default                 |
//! |-----------------------|-------------------------|
//! | `API_BASE_URL`        | `http://localhost:8000` |
//! | `UPLOAD_TIMEOUT_SECS` | `300`                   |
//! | `CHAT_TIMEOUT_SECS`   | `120`                   |
//! | `AUTH_DISABLED`       | unset (sign-in required) |

use once_cell::sync::Lazy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u32 = 300;
pub const DEFAULT_CHAT_TIMEOUT_SECS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without a trailing slash
    pub api_base_url: String,
    pub upload_timeout_ms: u32,
    pub chat_timeout_ms: u32,
    /// Skip the identity provider and treat the visitor as signed in
    pub auth_disabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None)
    }
}

impl AppConfig {
    /// Build the config from raw variable values; blank or invalid values
    /// fall back to the defaults.
    pub fn from_values(
        api_base_url: Option<&str>,
        upload_timeout_secs: Option<&str>,
        chat_timeout_secs: Option<&str>,
        auth_disabled: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        Self {
            api_base_url,
            upload_timeout_ms: secs_to_ms(upload_timeout_secs, DEFAULT_UPLOAD_TIMEOUT_SECS),
            chat_timeout_ms: secs_to_ms(chat_timeout_secs, DEFAULT_CHAT_TIMEOUT_SECS),
            auth_disabled: auth_disabled.map(is_truthy).unwrap_or(false),
        }
    }

    /// Config baked in at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("UPLOAD_TIMEOUT_SECS"),
            option_env!("CHAT_TIMEOUT_SECS"),
            option_env!("AUTH_DISABLED"),
        )
    }
}

fn secs_to_ms(value: Option<&str>, default_secs: u32) -> u32 {
    let secs = value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default_secs);
    secs.saturating_mul(1000)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::from_build_env();
    log::info!(
        "config: api_base_url={} upload_timeout_ms={} chat_timeout_ms={} auth_disabled={}",
        config.api_base_url,
        config.upload_timeout_ms,
        config.chat_timeout_ms,
        config.auth_disabled
    );
    config
});

/// Process-wide configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.upload_timeout_ms, 300_000);
        assert_eq!(config.chat_timeout_ms, 120_000);
        assert!(!config.auth_disabled);
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = AppConfig::from_values(Some(" https://rag.example.com/ "), None, None, None);
        assert_eq!(config.api_base_url, "https://rag.example.com");

        let config = AppConfig::from_values(Some("   "), None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_timeouts_fall_back() {
        let config = AppConfig::from_values(None, Some("abc"), Some("0"), None);
        assert_eq!(config.upload_timeout_ms, 300_000);
        assert_eq!(config.chat_timeout_ms, 120_000);

        let config = AppConfig::from_values(None, Some("15"), Some(" 30 "), None);
        assert_eq!(config.upload_timeout_ms, 15_000);
        assert_eq!(config.chat_timeout_ms, 30_000);
    }

    #[test]
    fn test_auth_disabled_flag() {
        assert!(AppConfig::from_values(None, None, None, Some("TRUE")).auth_disabled);
        assert!(AppConfig::from_values(None, None, None, Some("1")).auth_disabled);
        assert!(!AppConfig::from_values(None, None, None, Some("no")).auth_disabled);
    }
}

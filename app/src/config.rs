//! Client configuration loaded via OrthoConfig.
//!
//! Values come from a config file or `VENDOR_APP_*` environment variables;
//! the binary lets `--api-base-url` and `--session-dir` override them. Unset
//! values fall back to the defaults below.

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::CheckoutSettings;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_DIR: &str = ".vendor-app";
const DEFAULT_MERCHANT_NAME: &str = "Mera GharSansaar";
const DEFAULT_CHECKOUT_THEME: &str = "#f59e0b";
const DEFAULT_CHECKOUT_TIMEOUT_SECS: u64 = 300;

/// Errors raised while turning loaded settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The API base URL did not parse.
    #[error("invalid api base url {value}: {source}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// Runtime configuration for the vendor client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "VENDOR_APP")]
pub struct AppSettings {
    /// Backend REST base URL.
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Directory holding the persisted session.
    pub session_dir: Option<String>,
    /// Public key of the hosted checkout.
    pub checkout_key: Option<String>,
    /// Merchant name shown at checkout.
    pub merchant_name: Option<String>,
    /// Checkout accent colour.
    pub checkout_theme: Option<String>,
    /// Longest wait for a checkout callback, in seconds.
    pub checkout_timeout_secs: Option<u64>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl AppSettings {
    /// Parsed backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value is not a URL.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(raw).map_err(|source| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Per-request timeout; zero is raised to one second.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
                .max(1),
        )
    }

    /// Session directory.
    pub fn session_dir(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.session_dir.as_deref().unwrap_or(DEFAULT_SESSION_DIR))
    }

    /// Checkout presentation and timeout settings.
    pub fn checkout(&self) -> CheckoutSettings {
        CheckoutSettings {
            key: self.checkout_key.clone().unwrap_or_default(),
            merchant_name: self
                .merchant_name
                .clone()
                .unwrap_or_else(|| DEFAULT_MERCHANT_NAME.to_owned()),
            theme_color: self
                .checkout_theme
                .clone()
                .unwrap_or_else(|| DEFAULT_CHECKOUT_THEME.to_owned()),
            timeout: Duration::from_secs(
                self.checkout_timeout_secs
                    .unwrap_or(DEFAULT_CHECKOUT_TIMEOUT_SECS)
                    .max(1),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for client configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 8] = [
        "VENDOR_APP_API_BASE_URL",
        "VENDOR_APP_REQUEST_TIMEOUT_SECS",
        "VENDOR_APP_SESSION_DIR",
        "VENDOR_APP_CHECKOUT_KEY",
        "VENDOR_APP_MERCHANT_NAME",
        "VENDOR_APP_CHECKOUT_THEME",
        "VENDOR_APP_CHECKOUT_TIMEOUT_SECS",
        "VENDOR_APP_LOG_JSON",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("vendor-app")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("default url").as_str(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.session_dir(), Utf8PathBuf::from(".vendor-app"));
        assert!(!settings.log_json);

        let checkout = settings.checkout();
        assert_eq!(checkout.merchant_name, "Mera GharSansaar");
        assert_eq!(checkout.theme_color, "#f59e0b");
        assert_eq!(checkout.timeout, Duration::from_secs(300));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("VENDOR_APP_API_BASE_URL", Some("https://api.example.com/v2".to_owned())),
            ("VENDOR_APP_REQUEST_TIMEOUT_SECS", Some("0".to_owned())),
            ("VENDOR_APP_SESSION_DIR", Some("/tmp/vendor-session".to_owned())),
            ("VENDOR_APP_CHECKOUT_KEY", Some("rzp_live_x".to_owned())),
            ("VENDOR_APP_MERCHANT_NAME", None),
            ("VENDOR_APP_CHECKOUT_THEME", None),
            ("VENDOR_APP_CHECKOUT_TIMEOUT_SECS", Some("45".to_owned())),
            ("VENDOR_APP_LOG_JSON", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("url").as_str(),
            "https://api.example.com/v2"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
        assert_eq!(
            settings.session_dir(),
            Utf8PathBuf::from("/tmp/vendor-session")
        );
        assert!(settings.log_json);
        let checkout = settings.checkout();
        assert_eq!(checkout.key, "rzp_live_x");
        assert_eq!(checkout.timeout, Duration::from_secs(45));
    }

    #[rstest]
    fn invalid_base_url_is_reported() {
        let settings = AppSettings {
            api_base_url: Some("not a url".to_owned()),
            request_timeout_secs: None,
            session_dir: None,
            checkout_key: None,
            merchant_name: None,
            checkout_theme: None,
            checkout_timeout_secs: None,
            log_json: false,
        };
        assert!(matches!(
            settings.api_base_url(),
            Err(SettingsError::InvalidBaseUrl { .. })
        ));
    }
}

//! Notification presentation defaults and server-list endpoint configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Action identifier of the "Join" notification button.
pub const JOIN_ACTION: &str = "join";
/// Action identifier of the "Close" notification button.
pub const CLOSE_ACTION: &str = "close";

const DEFAULT_NOTIFICATION_ICON: &str = "/images/icon/512.png";
const DEFAULT_NOTIFICATION_BADGE: &str = "https://spyna.it/icons/android-icon-192x192.png";
const DEFAULT_VIBRATION_PATTERN: [u32; 3] = [200, 100, 200];

const PRODUCTION_API_BASE_URL: &str = "https://api.bzlist.net";
const WEB_LOGIN_PAGE_URL: &str = "https://my.bzflag.org/weblogin.php";
const PRODUCTION_SITE_ORIGIN: &str = "https://bzlist.net";
const DEVELOPMENT_SITE_ORIGIN: &str = "http://localhost:3000";

/// Configuration validation and parsing failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field is empty.
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
    /// A URL field does not use an http(s) scheme.
    #[error("config field `{field}` must be an http(s) URL, got `{value}`")]
    InvalidUrl {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// The config document is not valid JSON for the expected shape.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

fn require_http_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    require_non_empty(field, value)?;
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}

/// Presentation settings applied to every delivered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Icon URL (absolute or site-relative).
    pub icon: String,
    /// Monochrome badge URL.
    pub badge: String,
    /// Vibration pattern in milliseconds.
    pub vibrate: Vec<u32>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            icon: DEFAULT_NOTIFICATION_ICON.to_string(),
            badge: DEFAULT_NOTIFICATION_BADGE.to_string(),
            vibrate: DEFAULT_VIBRATION_PATTERN.to_vec(),
        }
    }
}

impl NotificationConfig {
    /// Parses and validates a JSON config document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that icon and badge are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] for a blank icon or badge.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty("icon", &self.icon)?;
        require_non_empty("badge", &self.badge)
    }
}

/// Endpoints the server-list UI talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Base URL of the server-list API.
    pub api_base_url: String,
    /// BZFlag web-login page.
    pub login_page_url: String,
    /// Origin of the site itself, used to build the login return URL.
    pub site_origin: String,
}

impl ListingConfig {
    /// Endpoints of the deployed site.
    pub fn production() -> Self {
        Self {
            api_base_url: PRODUCTION_API_BASE_URL.to_string(),
            login_page_url: WEB_LOGIN_PAGE_URL.to_string(),
            site_origin: PRODUCTION_SITE_ORIGIN.to_string(),
        }
    }

    /// Endpoints for a local dev server; only the site origin differs.
    pub fn development() -> Self {
        Self {
            site_origin: DEVELOPMENT_SITE_ORIGIN.to_string(),
            ..Self::production()
        }
    }

    /// Selects [`Self::development`] for debug builds and [`Self::production`] otherwise.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse or fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every endpoint is an http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_http_url("api_base_url", &self.api_base_url)?;
        require_http_url("login_page_url", &self.login_page_url)?;
        require_http_url("site_origin", &self.site_origin)
    }

    /// Returns the API URL for `endpoint`.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Returns the web-login URL that sends the user back to the account page with their
    /// username and token substituted by the login service.
    pub fn web_login_url(&self) -> String {
        let return_url = format!(
            "{}/account?username=%USERNAME%&token=%TOKEN%",
            self.site_origin.trim_end_matches('/')
        );
        format!(
            "{}?action=weblogin&url={}",
            self.login_page_url,
            urlencoding::encode(&return_url)
        )
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::for_build()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn notification_defaults_match_deployed_site() {
        let config = NotificationConfig::default();
        assert_eq!(config.icon, "/images/icon/512.png");
        assert_eq!(config.vibrate, vec![200, 100, 200]);
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn notification_config_fills_missing_fields_from_defaults() {
        let config = NotificationConfig::from_json(r#"{"vibrate":[50]}"#).expect("parse");
        assert_eq!(
            config,
            NotificationConfig {
                vibrate: vec![50],
                ..NotificationConfig::default()
            }
        );
        assert!(matches!(
            NotificationConfig::from_json(r#"{"icon":"  "}"#),
            Err(ConfigError::EmptyField("icon"))
        ));
        assert!(matches!(
            NotificationConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn production_login_url_encodes_return_address() {
        assert_eq!(
            ListingConfig::production().web_login_url(),
            "https://my.bzflag.org/weblogin.php?action=weblogin&url=https%3A%2F%2Fbzlist.net%2Faccount%3Fusername%3D%25USERNAME%25%26token%3D%25TOKEN%25"
        );
    }

    #[test]
    fn development_login_url_returns_to_localhost() {
        assert_eq!(
            ListingConfig::development().web_login_url(),
            "https://my.bzflag.org/weblogin.php?action=weblogin&url=http%3A%2F%2Flocalhost%3A3000%2Faccount%3Fusername%3D%25USERNAME%25%26token%3D%25TOKEN%25"
        );
    }

    #[test]
    fn api_url_joins_without_doubled_slashes() {
        let config = ListingConfig {
            api_base_url: "https://api.bzlist.net/".to_string(),
            ..ListingConfig::production()
        };
        assert_eq!(config.api_url("/servers"), "https://api.bzlist.net/servers");
        assert_eq!(
            ListingConfig::production().api_url("account/login"),
            "https://api.bzlist.net/account/login"
        );
    }

    #[test]
    fn listing_config_rejects_non_http_endpoints() {
        let err = ListingConfig::from_json(
            r#"{"api_base_url":"ftp://api","login_page_url":"https://l","site_origin":"https://s"}"#,
        )
        .expect_err("ftp rejected");
        assert_eq!(
            err.to_string(),
            "config field `api_base_url` must be an http(s) URL, got `ftp://api`"
        );
        ListingConfig::for_build().validate().expect("built-in endpoints are valid");
    }
}

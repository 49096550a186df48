//! Storefront configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, CountryCode};

/// Storefront-wide locale and session settings.
///
/// Loaded from TOML:
///
/// ```toml
/// default_country_code = "us"
/// supported_countries = ["us", "dk", "de"]
/// checkout_start_step = "addresses"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Code used when no preference is stored and none can be inferred.
    #[serde(default = "default_country_code")]
    pub default_country_code: CountryCode,

    /// Countries with a locale-scoped storefront.
    #[serde(default)]
    pub supported_countries: Vec<CountryCode>,

    /// Step the `/checkout` entry redirect opens at.
    #[serde(default = "default_checkout_step")]
    pub checkout_start_step: String,

    /// Cookie holding the storefront session id.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// Request header carrying the edge geo country.
    #[serde(default = "default_country_header")]
    pub country_header: String,

    /// Session cookie lifetime in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,

    /// Commerce API used for region and product data. Pages render without
    /// product data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commerce: Option<CommerceConfig>,
}

/// Remote commerce API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommerceConfig {
    /// Base URL, e.g. `https://api.example.com`.
    pub api_url: String,
    /// Key sent as `x-publishable-api-key`.
    #[serde(default)]
    pub publishable_key: String,
}

fn default_country_code() -> CountryCode {
    CountryCode(String::from("us"))
}

fn default_checkout_step() -> String {
    "addresses".to_string()
}

fn default_session_cookie() -> String {
    "_storefront_session".to_string()
}

fn default_country_header() -> String {
    "x-country-code".to_string()
}

fn default_session_ttl() -> u64 {
    60 * 60 * 24 * 365
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_country_code: default_country_code(),
            supported_countries: Vec::new(),
            checkout_start_step: default_checkout_step(),
            session_cookie: default_session_cookie(),
            country_header: default_country_header(),
            session_ttl_secs: default_session_ttl(),
            commerce: None,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the given default country.
    pub fn new(default_country_code: CountryCode) -> Self {
        Self {
            default_country_code,
            ..Default::default()
        }
    }

    /// Add a supported country.
    pub fn with_country(mut self, code: CountryCode) -> Self {
        if !self.supported_countries.contains(&code) {
            self.supported_countries.push(code);
        }
        self
    }

    /// Set the checkout start step.
    pub fn with_checkout_step(mut self, step: impl Into<String>) -> Self {
        self.checkout_start_step = step.into();
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkout_start_step.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "checkout_start_step must not be empty".to_string(),
            ));
        }
        if !is_token(&self.session_cookie) {
            return Err(ConfigError::Invalid(format!(
                "session_cookie {:?} is not a valid cookie name",
                self.session_cookie
            )));
        }
        if !is_token(&self.country_header) {
            return Err(ConfigError::Invalid(format!(
                "country_header {:?} is not a valid header name",
                self.country_header
            )));
        }
        if self.session_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "session_ttl_secs must be positive".to_string(),
            ));
        }
        if let Some(commerce) = &self.commerce {
            let url = commerce.api_url.as_str();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "commerce.api_url {url:?} must be an http(s) URL"
                )));
            }
        }
        Ok(())
    }

    /// Whether a locale-scoped storefront exists for `code`.
    ///
    /// The default country is always supported.
    pub fn is_supported(&self, code: &CountryCode) -> bool {
        *code == self.default_country_code || self.supported_countries.contains(code)
    }
}

/// RFC 7230 token characters (shared by cookie and header names).
fn is_token(name: &str) -> bool {
    !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
        })
}

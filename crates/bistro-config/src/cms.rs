//! Content API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Default page size requested from collection endpoints.
const fn default_page_size() -> u32 {
    25
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmsConfig {
    /// Base URL of the CMS (e.g., `http://localhost:1337`). Empty means the
    /// live fetch is skipped and fallback content is served.
    #[serde(default)]
    pub url: String,

    /// API token sent as a bearer token. Optional for public endpoints.
    #[serde(default)]
    pub api_token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `pagination[pageSize]` sent to collection endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_token: String::new(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl CmsConfig {
    /// Check if a CMS URL is set.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    pub fn has_token(&self) -> bool {
        !self.api_token.is_empty()
    }

    /// The URL with any trailing `/` removed, ready for path joining.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            let url = self.url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    "cms.url",
                    format!("'{url}' must start with http:// or https://"),
                ));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("cms.timeout_secs", "must be greater than zero"));
        }
        if self.page_size == 0 {
            return Err(ConfigError::invalid("cms.page_size", "must be greater than zero"));
        }
        Ok(())
    }
}

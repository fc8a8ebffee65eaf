//! # bistro-cms
//!
//! HTTP client for the headless CMS that backs the Bistro site.
//!
//! Each content type has two entry points:
//! - `fetch_*` performs one request and returns the typed response or a
//!   [`CmsError`]. There is no retry; the request is bounded by the
//!   configured timeout.
//! - the un-prefixed method (`menu_items`, `homepage`, `testimonials`) never
//!   fails: on any error it logs a warning and returns the fallback dataset,
//!   tagged with [`ContentSource::Fallback`].
//!
//! The `load_*` functions accept an optional client so callers that skip
//! the CMS (offline builds, no URL configured) share the same code path.

mod content;
mod error;
mod http;
mod sourced;

pub use error::CmsError;
pub use sourced::{ContentSource, Sourced, load_homepage, load_menu_items, load_testimonials};

use std::time::Duration;

use bistro_config::CmsConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

const USER_AGENT: &str = concat!("bistro/", env!("CARGO_PKG_VERSION"));

/// Client for the content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl ContentClient {
    /// Build a client from the `[cms]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::NotConfigured`] when no URL is set,
    /// [`CmsError::InvalidToken`] when the token is not a valid header value,
    /// or [`CmsError::Http`] if the underlying client fails to build.
    pub fn from_config(config: &CmsConfig) -> Result<Self, CmsError> {
        if !config.is_configured() {
            return Err(CmsError::NotConfigured);
        }

        let mut headers = HeaderMap::new();
        if config.has_token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
                .map_err(|_| CmsError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            page_size: config.page_size,
        })
    }

    /// Build a client when the CMS is configured, `None` otherwise.
    ///
    /// A config that is set but unusable is logged and treated as absent.
    pub fn try_from_config(config: &CmsConfig) -> Option<Self> {
        match Self::from_config(config) {
            Ok(client) => Some(client),
            Err(CmsError::NotConfigured) => {
                tracing::debug!("no CMS url configured; live fetch disabled");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "CMS client could not be built; live fetch disabled");
                None
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }
}

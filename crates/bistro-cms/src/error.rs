//! Content client error types.

use bistro_core::CoreError;
use thiserror::Error;

/// Errors that can occur while fetching content from the CMS.
#[derive(Debug, Error)]
pub enum CmsError {
    /// No CMS URL is configured, so there is nothing to fetch from.
    #[error("CMS is not configured (set cms.url or BISTRO_CMS__URL)")]
    NotConfigured,

    /// The configured API token cannot be sent as a header value.
    #[error("CMS API token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token was missing, expired, or lacks permission for the endpoint.
    #[error("unauthorized ({status}) for {path}")]
    Unauthorized { status: u16, path: String },

    /// The content type does not exist or is not published.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The CMS returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body does not match the expected shape.
    #[error("parse error for {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response parsed but violates a content invariant.
    #[error("invalid content: {0}")]
    Invalid(#[from] CoreError),
}

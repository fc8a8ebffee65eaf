//! Status-code mapping for content API responses.

use crate::error::CmsError;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest error body kept in [`CmsError::Api`].
const MAX_ERROR_BODY: usize = 512;

/// Pass successful responses through; map everything else to a [`CmsError`].
///
/// `path` is the endpoint path, used in error messages.
pub async fn ensure_success(
    resp: reqwest::Response,
    path: &str,
) -> Result<reqwest::Response, CmsError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    match status.as_u16() {
        401 | 403 => Err(CmsError::Unauthorized {
            status: status.as_u16(),
            path: path.to_string(),
        }),
        404 => Err(CmsError::NotFound {
            path: path.to_string(),
        }),
        429 => Err(CmsError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        code => {
            let mut message = resp.text().await.unwrap_or_default();
            if message.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !message.is_char_boundary(cut) {
                    cut -= 1;
                }
                message.truncate(cut);
            }
            Err(CmsError::Api {
                status: code,
                message,
            })
        }
    }
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

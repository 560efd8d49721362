//! Target URL validation.
//!
//! Guards against open-redirect abuse: only absolute http/https URLs with a
//! host are accepted as redirect targets. Full RFC conformance beyond what
//! the `url` crate enforces is out of scope.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Maximum accepted length for a target URL.
pub const MAX_TARGET_URL_LENGTH: usize = 2048;

/// Validates a redirect target and returns it unchanged.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is longer than
/// [`MAX_TARGET_URL_LENGTH`], is not parseable as an absolute URL, uses a
/// scheme other than http/https, or has no host.
pub fn validate_target_url(raw: &str) -> Result<String, AppError> {
    if raw.len() > MAX_TARGET_URL_LENGTH {
        return Err(AppError::bad_request(
            "URL too long",
            json!({ "max_length": MAX_TARGET_URL_LENGTH, "length": raw.len() }),
        ));
    }

    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::bad_request(
                "Only HTTP and HTTPS protocols are allowed",
                json!({ "scheme": other }),
            ));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_request(
            "URL must include a domain",
            json!({ "url": raw }),
        ));
    }

    Ok(raw.to_string())
}

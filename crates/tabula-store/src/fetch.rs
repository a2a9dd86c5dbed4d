//! Blocking text fetch.

use tabula_model::FetchError;

/// GET `url` and return the body as text.
///
/// Blocks until the whole body is buffered. There is no timeout and no retry;
/// callers that need bounded latency must enforce it themselves.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    tracing::debug!("Fetching {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(None::<std::time::Duration>)
        .build()
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: format!("failed to create HTTP client: {e}"),
        })?;

    let response = client.get(url).send().map_err(|e| FetchError::Request {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_request_error() {
        let result = fetch_text("not a url");
        assert!(matches!(result, Err(FetchError::Request { .. })));
    }
}

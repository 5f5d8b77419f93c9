use std::time::Duration;
use thiserror::Error;

/// Message returned with HTTP 400 when the `url` query parameter is missing or empty
pub const MISSING_URL_MESSAGE: &str = "Missing 'url' query parameter.";

/// Message attached to an otherwise empty result when no Recipe node was found
pub const RECIPE_NOT_FOUND_MESSAGE: &str = "No schema.org Recipe found in the page's JSON-LD.";

/// Errors raised while fetching the target page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("Request to {url} timed out after {}s", .timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    /// The target answered with a non-2xx status
    #[error("Request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Connection, DNS, TLS or body decoding failure
    #[error("Failed to fetch URL: {0}")]
    Request(#[from] reqwest::Error),

    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors that can occur while scraping a recipe
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// No page URL was supplied
    #[error("{}", MISSING_URL_MESSAGE)]
    MissingUrl,

    /// Failed to fetch the page
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A Recipe node was found but could not be mapped
    #[error("Failed to map recipe: {0}")]
    Mapping(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_url_and_bound() {
        let err = FetchError::Timeout {
            url: "http://slow.example".to_string(),
            timeout: Duration::from_secs(10),
        };
        assert_eq!(
            err.to_string(),
            "Request to http://slow.example timed out after 10s"
        );
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let err: ScrapeError = FetchError::Status {
            url: "http://example.com".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Request to http://example.com failed with status 404 Not Found"
        );
    }

    #[test]
    fn test_missing_url_message() {
        assert_eq!(
            ScrapeError::MissingUrl.to_string(),
            "Missing 'url' query parameter."
        );
    }
}

//! Classification of HTTP failures into operator-facing errors.

use reqwest::StatusCode;
use std::fmt;

/// HTTP-level download failures, carrying the provider's error detail.
#[derive(Debug)]
pub enum DownloadError {
    /// HTTP 404: the release or asset does not exist.
    NotFound(String),
    /// HTTP 403 or 429: the release host is throttling requests.
    RateLimited(String),
    /// Any other unsuccessful HTTP status.
    Http(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            DownloadError::RateLimited(msg) => {
                write!(f, "Rate limited by the release host: {}. Try again later.", msg)
            }
            DownloadError::Http(msg) => {
                write!(f, "Download failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for DownloadError {}

/// Maps an `error_for_status` failure to the download taxonomy.
/// Transport-level errors (no status) pass through unchanged.
pub fn classify_status(error: reqwest::Error) -> anyhow::Error {
    let Some(status) = error.status() else {
        return anyhow::Error::from(error);
    };

    let mapped = match status {
        StatusCode::NOT_FOUND => DownloadError::NotFound(
            "the requested release or asset does not exist".to_string(),
        ),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            DownloadError::RateLimited(error.to_string())
        }
        _ => DownloadError::Http(error.to_string()),
    };
    anyhow::Error::from(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_error_display() {
        let err = DownloadError::NotFound("no such asset".to_string());
        assert!(err.to_string().contains("Not found"));

        let err = DownloadError::RateLimited("429".to_string());
        assert!(err.to_string().contains("Rate limited"));

        let err = DownloadError::Http("HTTP 500".to_string());
        assert!(err.to_string().contains("Download failed"));
    }

    #[tokio::test]
    async fn test_classify_status_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(404)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = client.get(server.url()).send().await.unwrap();
        let err = response.error_for_status().unwrap_err();

        let classified = classify_status(err);
        assert!(matches!(
            classified.downcast_ref::<DownloadError>(),
            Some(DownloadError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_status_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(429)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = client.get(server.url()).send().await.unwrap();
        let err = response.error_for_status().unwrap_err();

        let classified = classify_status(err);
        assert!(matches!(
            classified.downcast_ref::<DownloadError>(),
            Some(DownloadError::RateLimited(_))
        ));
    }

    #[tokio::test]
    async fn test_classify_status_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let response = client.get(server.url()).send().await.unwrap();
        let err = response.error_for_status().unwrap_err();

        let classified = classify_status(err);
        assert!(matches!(
            classified.downcast_ref::<DownloadError>(),
            Some(DownloadError::Http(_))
        ));
    }
}

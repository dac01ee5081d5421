use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode JSON from {0}")]
    JsonDecode(String, #[source] reqwest::Error),
}

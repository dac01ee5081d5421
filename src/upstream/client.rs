//! Thin JSON fetch layer shared by both upstream APIs.

use crate::upstream::error::UpstreamError;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Request timeout applied when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP client with a per-request timeout, typed for JSON endpoints.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
}

impl UpstreamClient {
    /// Builds the client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`reqwest::Error`] if the TLS backend or
    /// system configuration prevents constructing a client.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(UpstreamClient { http })
    }

    /// Fetches `url` and decodes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// * [`UpstreamError::NetworkRequest`] when the request cannot be sent
    ///   or times out.
    /// * [`UpstreamError::HttpStatus`] when the server answers with a
    ///   non-success status.
    /// * [`UpstreamError::JsonDecode`] when the body is not valid JSON for
    ///   `T`.
    pub async fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        info!("Fetching {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    UpstreamError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    UpstreamError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::JsonDecode(url.to_string(), e))
    }

    /// Like [`try_fetch`](Self::try_fetch), but absorbs every failure into
    /// `None` after logging it. One unreachable or misbehaving endpoint must
    /// not abort a long sampling run.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.try_fetch(url).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!("Upstream error for {}: {:?}", url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn decodes_a_json_body() {
        let payload = json!({"answer": 42});
        let app = Router::new().route("/data", get(move || async move { Json(payload) }));
        let base = serve(app).await;

        let client = UpstreamClient::new(DEFAULT_TIMEOUT).unwrap();
        let fetched: Value = client.try_fetch(&format!("{base}/data")).await.unwrap();
        assert_eq!(fetched["answer"], 42);
    }

    #[tokio::test]
    async fn server_error_maps_to_http_status() {
        let app = Router::new().route(
            "/data",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(app).await;
        let url = format!("{base}/data");

        let client = UpstreamClient::new(DEFAULT_TIMEOUT).unwrap();
        let err = client.try_fetch::<Value>(&url).await.unwrap_err();
        assert!(matches!(
            err,
            UpstreamError::HttpStatus { status, .. }
                if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert!(client.fetch_json::<Value>(&url).await.is_none());
    }

    #[tokio::test]
    async fn non_json_body_maps_to_decode_error() {
        let app = Router::new().route("/data", get(|| async { "plain text" }));
        let base = serve(app).await;
        let url = format!("{base}/data");

        let client = UpstreamClient::new(DEFAULT_TIMEOUT).unwrap();
        let err = client.try_fetch::<Value>(&url).await.unwrap_err();
        assert!(matches!(err, UpstreamError::JsonDecode(..)));
        assert!(client.fetch_json::<Value>(&url).await.is_none());
    }

    #[tokio::test]
    async fn slow_server_times_out_to_none() {
        let app = Router::new().route(
            "/data",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let base = serve(app).await;
        let url = format!("{base}/data");

        let client = UpstreamClient::new(Duration::from_millis(200)).unwrap();
        let err = client.try_fetch::<Value>(&url).await.unwrap_err();
        assert!(matches!(err, UpstreamError::NetworkRequest(..)));
        assert!(client.fetch_json::<Value>(&url).await.is_none());
    }

    #[tokio::test]
    async fn unreachable_host_maps_to_network_error() {
        let client = UpstreamClient::new(Duration::from_millis(500)).unwrap();
        let result = client
            .fetch_json::<Value>("http://127.0.0.1:9/data")
            .await;
        assert!(result.is_none());
    }
}

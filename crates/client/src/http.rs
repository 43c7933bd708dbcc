//! reqwest-backed [`Transport`] adapter.
//!
//! Joins paths onto the configured base URL, injects the authentication and
//! accept headers, buffers the response body, and maps non-success statuses to
//! [`Error::Status`]. Resource crates never see a raw `reqwest::Response`.

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::transport::{ApiResponse, Transport};

/// Accept header value selecting v2 of the API.
const ACCEPT_HEADER: &str = "application/vnd.oncall+json;version=2";

/// The production HTTP transport.
///
/// Holds a connection-pooled `reqwest::Client`; cloning is cheap and all
/// methods take `&self`, so one instance may be shared across tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Config,
    inner: reqwest::Client,
}

impl HttpClient {
    /// Builds a transport from `config`.
    pub fn new(config: Config) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config {
                message: "API token must not be empty".to_string(),
            });
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, inner })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        method: &'static str,
        path: &str,
    ) -> Result<ApiResponse> {
        let response = request
            .header(
                header::AUTHORIZATION,
                format!("Token token={}", self.config.token),
            )
            .header(header::ACCEPT, ACCEPT_HEADER)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(method, path, status = %status, "API request completed");

        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.dispatch(self.inner.get(self.url(path)), "GET", path).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.dispatch(self.inner.post(self.url(path)).json(&body), "POST", path)
            .await
    }

    async fn put(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.dispatch(self.inner.put(self.url(path)).json(&body), "PUT", path)
            .await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.dispatch(self.inner.delete(self.url(path)), "DELETE", path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_empty_token() {
        let err = HttpClient::new(Config::new("")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn url_joins_without_doubling_slashes() {
        let mut config = Config::new("secret");
        config.base_url = "https://api.oncall.io/".to_string();
        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.url("/extensions"), "https://api.oncall.io/extensions");
    }
}

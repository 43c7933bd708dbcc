//! The HTTP collaborator port.
//!
//! [`Transport`] is the seam between resource clients and the network: the
//! reqwest-backed [`crate::HttpClient`] implements it in production, and test
//! doubles implement it with canned responses. Each method is one round trip;
//! cancellation and deadlines belong to the caller — dropping the returned
//! future abandons the in-flight request, and no resource outlives the call.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Buffered response
// ---------------------------------------------------------------------------

/// A fully buffered HTTP response.
///
/// The transport adapter has already consumed the network stream and verified
/// the status is a success; holders of an `ApiResponse` only ever decode it.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Bytes,
}

impl ApiResponse {
    /// Creates a response from a status code and a buffered body.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// Fails with [`crate::Error::Decode`] when the body is not valid JSON or
    /// does not match the target shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

// ---------------------------------------------------------------------------
// Port definition
// ---------------------------------------------------------------------------

/// One REST verb per method, each a single request/response round trip.
///
/// Implementations surface non-success statuses as [`crate::Error::Status`]
/// before the response reaches the caller, so a returned [`ApiResponse`] is
/// always a success.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request against `path` (joined onto the configured base URL).
    async fn get(&self, path: &str) -> Result<ApiResponse>;

    /// Issues a POST request with a JSON `body`.
    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse>;

    /// Issues a PUT request with a JSON `body`.
    async fn put(&self, path: &str, body: Value) -> Result<ApiResponse>;

    /// Issues a DELETE request against `path`.
    async fn delete(&self, path: &str) -> Result<ApiResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, path: &str) -> Result<ApiResponse> {
        (**self).get(path).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse> {
        (**self).post(path, body).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<ApiResponse> {
        (**self).put(path, body).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse> {
        (**self).delete(path).await
    }
}

//! The five `/extensions` operations.

use oncall_client::{ApiResponse, Config, Error, HttpClient, Result, Transport};
use serde::Deserialize;

use crate::types::{Extension, ListExtensionsOptions, ListExtensionsResponse};

/// Singular responses arrive wrapped in an object keyed by the resource's
/// singular name; the list envelope is not wrapped this way.
#[derive(Debug, Deserialize)]
struct ExtensionEnvelope {
    extension: Option<Extension>,
}

/// Client for the `/extensions` endpoints.
///
/// Holds no mutable state; one instance may be shared freely across tasks and
/// all operations take `&self`. Errors propagate unchanged from the transport —
/// there are no retries and no partial results.
#[derive(Debug, Clone)]
pub struct ExtensionsClient<T> {
    transport: T,
}

impl ExtensionsClient<HttpClient> {
    /// Builds a client over the default reqwest-backed transport.
    pub fn from_config(config: Config) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl<T: Transport> ExtensionsClient<T> {
    /// Wraps an existing transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Lists extensions matching `options`.
    ///
    /// Returns a single page; pass the envelope's `offset`/`more` back through
    /// `options` to fetch further pages.
    pub async fn list(&self, options: &ListExtensionsOptions) -> Result<ListExtensionsResponse> {
        let query = oncall_client::query::encode_pairs(options.query_pairs());
        let response = self.transport.get(&format!("/extensions{query}")).await?;
        response.json()
    }

    /// Creates an extension.
    ///
    /// The returned value carries the server-assigned id.
    pub async fn create(&self, extension: &Extension) -> Result<Extension> {
        let body = serde_json::to_value(extension)?;
        let response = self.transport.post("/extensions", body).await?;
        single_from_response(response)
    }

    /// Fetches one extension by id.
    pub async fn get(&self, id: &str) -> Result<Extension> {
        let response = self.transport.get(&format!("/extensions/{id}")).await?;
        single_from_response(response)
    }

    /// Updates the extension with the given id from `extension`.
    pub async fn update(&self, id: &str, extension: &Extension) -> Result<Extension> {
        let body = serde_json::to_value(extension)?;
        let response = self
            .transport
            .put(&format!("/extensions/{id}"), body)
            .await?;
        single_from_response(response)
    }

    /// Deletes the extension with the given id.
    ///
    /// Any success response counts; the body is ignored.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete(&format!("/extensions/{id}")).await?;
        Ok(())
    }
}

/// Unwraps the `{"extension": {...}}` envelope of a singular response.
///
/// A success response without the root field is a protocol violation by the
/// server, reported as [`Error::MissingRootField`] — distinct from a decode
/// failure.
fn single_from_response(response: ApiResponse) -> Result<Extension> {
    let envelope: ExtensionEnvelope = response.json()?;
    envelope
        .extension
        .ok_or(Error::MissingRootField { field: "extension" })
}

//! Wire types for the extensions resource.
//!
//! Shapes mirror the API exactly: optional string fields are omitted from
//! request bodies when empty and default to empty on decode, and the opaque
//! `config` value is passed through without interpretation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Shared reference object
// ---------------------------------------------------------------------------

/// A reference to an API resource by identity.
///
/// Related entities are always represented by reference; an [`Extension`]
/// never owns the objects or schema it points at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiObject {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Resource type tag (e.g. `"extension_schema_reference"`).
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Short human-readable description of the referenced resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    /// API URL of the referenced resource.
    #[serde(rename = "self", default, skip_serializing_if = "String::is_empty")]
    pub self_url: String,

    /// Web UI URL of the referenced resource.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub html_url: String,
}

impl ApiObject {
    /// Creates a reference carrying only an `id` and `type` tag, the minimum
    /// the API needs to resolve it.
    pub fn reference(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Extension
// ---------------------------------------------------------------------------

/// A single extension.
///
/// Constructed by the caller before [`create`](crate::ExtensionsClient::create)
/// or [`update`](crate::ExtensionsClient::update); returned fully populated by
/// the API on reads. The client performs no local validation — the remote API
/// enforces which fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Identity of this extension (id, type, URLs). Empty until the server
    /// assigns it.
    #[serde(flatten)]
    pub reference: ApiObject,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// URL invoked by the extension, for schemas that call out to one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub endpoint_url: String,

    /// The objects this extension is attached to, in API order.
    #[serde(default)]
    pub extension_objects: Vec<ApiObject>,

    /// Reference to the schema (type/category) of this extension.
    #[serde(default)]
    pub extension_schema: ApiObject,

    /// Opaque configuration. The shape varies by extension schema; it is
    /// carried through unchanged in both directions.
    #[serde(default)]
    pub config: Value,
}

// ---------------------------------------------------------------------------
// List options and response envelope
// ---------------------------------------------------------------------------

/// Query options for [`list`](crate::ExtensionsClient::list).
///
/// Unset fields are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListExtensionsOptions {
    /// Maximum number of records per page.
    pub limit: Option<u32>,

    /// Offset of the first record returned.
    pub offset: Option<u32>,

    /// Request an exact `total` count in the response envelope. Off by
    /// default; the server may estimate totals otherwise.
    pub total: bool,

    /// Only extensions attached to the object with this id.
    pub extension_object_id: Option<String>,

    /// Only extensions of the schema with this id.
    pub extension_schema_id: Option<String>,

    /// Free-text filter applied to extension names.
    pub query: Option<String>,
}

impl ListExtensionsOptions {
    /// Produces the `(key, value)` query pairs, omitting unset fields.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if self.total {
            pairs.push(("total", "true".to_string()));
        }
        if let Some(id) = &self.extension_object_id {
            pairs.push(("extension_object_id", id.clone()));
        }
        if let Some(id) = &self.extension_schema_id {
            pairs.push(("extension_schema_id", id.clone()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}

/// Pagination envelope returned by [`list`](crate::ExtensionsClient::list).
///
/// `extensions` preserves API response order; no de-duplication or sorting is
/// performed client-side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListExtensionsResponse {
    /// Page size the server applied.
    #[serde(default)]
    pub limit: u32,

    /// Offset of the first record in this page.
    #[serde(default)]
    pub offset: u32,

    /// `true` when more records exist beyond this page.
    #[serde(default)]
    pub more: bool,

    /// Total matching records, exact only when requested via
    /// [`ListExtensionsOptions::total`].
    #[serde(default)]
    pub total: u32,

    /// The extensions of this page, in API response order.
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

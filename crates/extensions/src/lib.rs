//! Extensions resource client for the OnCall REST API.
//!
//! An extension is a third-party integration attached to an incident
//! workflow — typically a webhook endpoint invoked when incidents change
//! state. This crate covers the five `/extensions` operations: list, create,
//! get, update, and delete.
//!
//! Every operation is one synchronous request/response round trip with no
//! retries, caching, or pagination traversal; transport, authentication, and
//! status handling live in [`oncall_client`].
//!
//! # Quick Start
//!
//! ```no_run
//! use oncall_extensions::{Config, ExtensionsClient, ListExtensionsOptions};
//!
//! #[tokio::main]
//! async fn main() -> oncall_extensions::Result<()> {
//!     let client = ExtensionsClient::from_config(Config::from_env()?)?;
//!
//!     let page = client.list(&ListExtensionsOptions::default()).await?;
//!     for extension in page.extensions {
//!         println!("{}  {}", extension.reference.id, extension.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod types;

pub use client::ExtensionsClient;
pub use types::{ApiObject, Extension, ListExtensionsOptions, ListExtensionsResponse};

// Re-export the transport surface so callers depend on one crate.
pub use oncall_client::{ApiResponse, Config, Error, HttpClient, Result, Transport};

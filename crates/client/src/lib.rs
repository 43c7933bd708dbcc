//! OnCall API transport layer.
//!
//! The generic HTTP collaborator that resource crates (e.g. `oncall-extensions`)
//! issue their calls through. Defines the [`Transport`] port and provides the
//! reqwest-backed [`HttpClient`] adapter.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** URL joining, authentication header injection, status
//! checking, body buffering, and JSON decoding all live here. Resource crates
//! see only [`Transport`] and [`ApiResponse`]; they never inspect status codes
//! or headers themselves.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | Client configuration (`Config`) |
//! | [`error`] | The shared [`Error`] type for every API operation |
//! | [`transport`] | The [`Transport`] port and buffered [`ApiResponse`] |
//! | [`http`] | The reqwest-backed [`HttpClient`] adapter |
//! | [`query`] | Query-string encoding for list options |

pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod transport;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::Config;
pub use error::{Error, Result};
pub use http::HttpClient;
pub use transport::{ApiResponse, Transport};

/// Re-export of the status-code type used throughout the API surface.
pub use reqwest::StatusCode;

//! # restwrap
//!
//! A small HTTP client convenience layer: wraps a retrying transport with
//! JSON marshaling, pluggable authentication, endpoint/query-string
//! construction, and uniform error formatting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restwrap::{endpoint, with_auth, Authenticator, HttpClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let auth = Authenticator::new(std::env::var("API_SECRET").unwrap());
//!     let client = HttpClient::new([with_auth(auth.bearer_auth())]);
//!
//!     let ep = endpoint!("https://api.example.com", "/users/{}", 42)?
//!         .query("expand", "orders");
//!
//!     let resp = client.get(&ep.to_string()).await?;
//!     let user: serde_json::Value = resp.json()?;
//!     println!("{user}");
//!
//!     Ok(())
//! }
//! ```
//!
//! The client is immutable after construction and safe to share across
//! concurrent requests. Retries live entirely inside the transport: the
//! default [`RetryingRequester`] retries 5xx responses and network-level
//! errors with bounded exponential backoff, and any [`Requester`]
//! implementation can be injected in its place.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Authentication functions
pub mod auth;

/// Endpoint and query-string construction
pub mod endpoint;

/// HTTP client and retrying transport
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use auth::{AuthFn, Authenticator};
pub use endpoint::{Endpoint, QueryParam};
pub use error::{Error, Result};
pub use http::{
    default_retry, no_retry, with_auth, with_key, with_requester, ClientOption, HttpClient,
    HttpResponse, Requester, RetryConfig, RetryFn, RetryingRequester,
};

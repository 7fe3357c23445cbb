//! HTTP client module
//!
//! The [`HttpClient`] funnels verb-specific entry points through one request
//! routine: marshal the payload, attach auth, dispatch through a retrying
//! [`Requester`], and classify the response as success or error.

mod client;
mod requester;

pub use client::{
    with_auth, with_key, with_requester, ClientConfig, ClientOption, HttpClient, HttpResponse,
};
pub use requester::{
    default_retry, no_retry, Requester, RetryConfig, RetryFn, RetryingRequester,
    DEFAULT_RETRY_MAX, DEFAULT_RETRY_WAIT_MAX, DEFAULT_RETRY_WAIT_MIN, DEFAULT_TIMEOUT,
};

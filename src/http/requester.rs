//! Retrying transport
//!
//! The [`Requester`] trait is the seam between the client and the wire: one
//! async round-trip, implemented by the production [`RetryingRequester`] and
//! by test doubles.

use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Request, Response};
use std::time::Duration;
use tracing::{debug, warn};

/// Default maximum number of retries
pub const DEFAULT_RETRY_MAX: u32 = 3;
/// Default minimum backoff between attempts
pub const DEFAULT_RETRY_WAIT_MIN: Duration = Duration::from_secs(2);
/// Default maximum backoff between attempts
pub const DEFAULT_RETRY_WAIT_MAX: Duration = Duration::from_secs(10);
/// Default overall request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The abstract capability that performs one HTTP round-trip, potentially
/// with internal retries.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Perform the request, returning the response or the transport error
    async fn execute(&self, req: Request) -> Result<Response>;
}

/// Retry predicate, evaluated once per attempt against the outcome: either a
/// response or a transport error. Returns whether the attempt should be
/// retried.
pub type RetryFn = fn(Option<&Response>, Option<&reqwest::Error>) -> bool;

/// Default retry predicate: retry on 5xx responses and on network-level
/// errors (connect failures and timeouts); everything else is final.
pub fn default_retry(resp: Option<&Response>, err: Option<&reqwest::Error>) -> bool {
    if let Some(err) = err {
        return err.is_connect() || err.is_timeout();
    }
    resp.is_some_and(|r| r.status().is_server_error())
}

/// Retry predicate that never retries
pub fn no_retry(_resp: Option<&Response>, _err: Option<&reqwest::Error>) -> bool {
    false
}

/// Configuration for the retrying transport
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Minimum backoff between attempts
    pub retry_wait_min: Duration,
    /// Maximum backoff between attempts
    pub retry_wait_max: Duration,
    /// Overall timeout per attempt
    pub timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_RETRY_MAX,
            retry_wait_min: DEFAULT_RETRY_WAIT_MIN,
            retry_wait_max: DEFAULT_RETRY_WAIT_MAX,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RetryConfig {
    /// Set max retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the backoff window
    #[must_use]
    pub fn backoff(mut self, min: Duration, max: Duration) -> Self {
        self.retry_wait_min = min;
        self.retry_wait_max = max;
        self
    }

    /// Set the overall timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Production transport: a reqwest client plus bounded exponential backoff
/// driven by a pluggable retry predicate.
pub struct RetryingRequester {
    client: Client,
    config: RetryConfig,
    check_retry: RetryFn,
}

impl RetryingRequester {
    /// Create a transport with the given retry configuration and the default
    /// retry predicate
    pub fn new(config: RetryConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            check_retry: default_retry,
        }
    }

    /// Replace the retry predicate
    #[must_use]
    pub fn check_retry(mut self, check: RetryFn) -> Self {
        self.check_retry = check;
        self
    }

    /// Backoff delay for a given attempt: doubles from the minimum, clamped
    /// to the maximum
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        let delay = self.config.retry_wait_min.saturating_mul(factor);
        std::cmp::min(delay, self.config.retry_wait_max)
    }
}

impl Default for RetryingRequester {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

#[async_trait]
impl Requester for RetryingRequester {
    async fn execute(&self, req: Request) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();

        let mut attempt = 0u32;
        loop {
            let attempt_req = match req.try_clone() {
                Some(clone) => clone,
                // A non-replayable body gets exactly one attempt
                None => return self.client.execute(req).await.map_err(Error::Transport),
            };

            let outcome = self.client.execute(attempt_req).await;
            let retry = match &outcome {
                Ok(resp) => (self.check_retry)(Some(resp), None),
                Err(err) => (self.check_retry)(None, Some(err)),
            };

            if retry && attempt < self.config.max_retries {
                let delay = self.backoff(attempt);
                match &outcome {
                    Ok(resp) => warn!(
                        "Request {} {} returned {}, attempt {}/{}, retrying in {:?}",
                        method,
                        url,
                        resp.status().as_u16(),
                        attempt + 1,
                        self.config.max_retries + 1,
                        delay
                    ),
                    Err(err) => warn!(
                        "Request {} {} failed ({}), attempt {}/{}, retrying in {:?}",
                        method,
                        url,
                        err,
                        attempt + 1,
                        self.config.max_retries + 1,
                        delay
                    ),
                }
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            if outcome.is_ok() {
                debug!("Request succeeded: {} {}", method, url);
            }
            return outcome.map_err(Error::Transport);
        }
    }
}

impl std::fmt::Debug for RetryingRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetryingRequester")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

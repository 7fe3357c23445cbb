//! Authenticator implementation
//!
//! Produces request-mutating closures for the supported auth schemes.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use std::sync::Arc;

/// A request-mutating function that injects credentials into an outgoing
/// request. Invoked once per request, after the body and headers are built
/// and before dispatch.
pub type AuthFn = Arc<dyn Fn(&mut Request) -> Result<()> + Send + Sync>;

/// Authenticator holds the shared secret and builds [`AuthFn`] closures.
///
/// Credential material is validated at invocation time, not at construction:
/// an authenticator built with an empty secret fails every request it is
/// applied to.
#[derive(Debug, Clone)]
pub struct Authenticator {
    secret: String,
}

impl Authenticator {
    /// Create a new authenticator with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Build an auth function that sets `Authorization: Bearer <secret>`.
    ///
    /// Fails with [`Error::Auth`] if the held secret is empty.
    pub fn bearer_auth(&self) -> AuthFn {
        let secret = self.secret.clone();
        Arc::new(move |req: &mut Request| {
            if secret.is_empty() {
                return Err(Error::auth("secret is empty"));
            }
            let value = HeaderValue::from_str(&format!("Bearer {secret}"))
                .map_err(|e| Error::auth(format!("invalid bearer token: {e}")))?;
            req.headers_mut().insert(AUTHORIZATION, value);
            Ok(())
        })
    }

    /// Build an auth function that sets standard HTTP basic-auth credentials
    /// with `key` as username and the held secret as password.
    ///
    /// Fails with [`Error::Auth`] if either the key or the secret is empty.
    pub fn basic_auth(&self, key: impl Into<String>) -> AuthFn {
        let key = key.into();
        let secret = self.secret.clone();
        Arc::new(move |req: &mut Request| {
            if key.is_empty() || secret.is_empty() {
                return Err(Error::auth("key or secret is empty"));
            }
            let encoded = STANDARD.encode(format!("{key}:{secret}"));
            let value = HeaderValue::from_str(&format!("Basic {encoded}"))
                .map_err(|e| Error::auth(format!("invalid basic credentials: {e}")))?;
            req.headers_mut().insert(AUTHORIZATION, value);
            Ok(())
        })
    }
}

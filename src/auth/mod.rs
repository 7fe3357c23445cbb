//! Authentication module
//!
//! Supports Bearer and Basic auth. The `Authenticator` holds the shared
//! secret and produces [`AuthFn`] closures that inject credentials into an
//! outgoing request.

mod authenticator;

pub use authenticator::{AuthFn, Authenticator};

#[cfg(test)]
mod tests;

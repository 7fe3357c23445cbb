//! Tests for the auth module

use super::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Method, Request, Url};

fn make_request() -> Request {
    Request::new(Method::GET, Url::parse("https://example.com/api").unwrap())
}

#[test]
fn test_bearer_auth_sets_header() {
    let auth = Authenticator::new("test-token").bearer_auth();

    let mut req = make_request();
    auth(&mut req).unwrap();

    assert_eq!(
        req.headers().get("Authorization").unwrap(),
        "Bearer test-token"
    );
    assert_eq!(req.headers().get_all("Authorization").iter().count(), 1);
}

#[test]
fn test_bearer_auth_empty_secret_fails() {
    let auth = Authenticator::new("").bearer_auth();

    // Fails on every invocation, not just the first
    for _ in 0..2 {
        let mut req = make_request();
        let err = auth(&mut req).unwrap_err();
        assert!(err.to_string().contains("secret is empty"));
        assert!(req.headers().get("Authorization").is_none());
    }
}

#[test]
fn test_basic_auth_sets_header() {
    let auth = Authenticator::new("s3cr3t").basic_auth("user");

    let mut req = make_request();
    auth(&mut req).unwrap();

    let expected = format!("Basic {}", STANDARD.encode("user:s3cr3t"));
    assert_eq!(req.headers().get("Authorization").unwrap(), &expected);
}

#[test]
fn test_basic_auth_empty_key_fails() {
    let auth = Authenticator::new("s3cr3t").basic_auth("");

    let mut req = make_request();
    let err = auth(&mut req).unwrap_err();
    assert!(err.to_string().contains("key or secret is empty"));
}

#[test]
fn test_basic_auth_empty_secret_fails() {
    let auth = Authenticator::new("").basic_auth("user");

    let mut req = make_request();
    let err = auth(&mut req).unwrap_err();
    assert!(err.to_string().contains("key or secret is empty"));
}

#[test]
fn test_bearer_auth_replaces_existing_header() {
    let auth = Authenticator::new("fresh").bearer_auth();

    let mut req = make_request();
    auth(&mut req).unwrap();
    auth(&mut req).unwrap();

    // Applying twice still yields a single header value
    assert_eq!(req.headers().get_all("Authorization").iter().count(), 1);
    assert_eq!(req.headers().get("Authorization").unwrap(), "Bearer fresh");
}

//! Tests for endpoint construction and query rendering

use super::*;
use crate::endpoint;
use pretty_assertions::assert_eq;

#[test]
fn test_make_endpoint() {
    let ep = endpoint!("http://example.com", "/path/{}/{}", "value1", 123).unwrap();

    assert_eq!(ep.url().as_str(), "http://example.com/path/value1/123");
    assert_eq!(ep.to_string(), "http://example.com/path/value1/123");
}

#[test]
fn test_make_endpoint_without_format_args() {
    let ep = endpoint!("http://example.com", "/status").unwrap();
    assert_eq!(ep.to_string(), "http://example.com/status");
}

#[test]
fn test_make_endpoint_empty_path() {
    // The url crate normalizes a pathless URL to "/"
    let ep = endpoint!("http://example.com", "").unwrap();
    assert_eq!(ep.to_string(), "http://example.com/");
}

#[test]
fn test_make_endpoint_malformed_host_is_an_error() {
    let result = Endpoint::new("not a url", "/path");
    assert!(matches!(result, Err(crate::Error::InvalidUrl(_))));
}

#[test]
fn test_query_string_empty_until_params_added() {
    let ep = endpoint!("http://example.com", "/search").unwrap();
    assert!(ep.url().query().is_none());
    assert!(!ep.to_string().contains('?'));
}

#[test]
fn test_add_query_param() {
    let mut ep = endpoint!("http://example.com", "/search").unwrap();
    ep.add_query_param(QueryParam::new("q", "rust"));
    ep.add_query_param(QueryParam::new("page", 2));

    assert_eq!(ep.to_string(), "http://example.com/search?page=2&q=rust");
}

#[test]
fn test_empty_value_dropped() {
    let mut ep = endpoint!("http://example.com", "/search").unwrap();
    ep.add_query_param(QueryParam::new("q", "rust"));
    ep.add_query_param(QueryParam::new("filter", ""));

    assert_eq!(ep.to_string(), "http://example.com/search?q=rust");
}

#[test]
fn test_same_key_accumulates() {
    let ep = endpoint!("http://example.com", "/items")
        .unwrap()
        .query("tag", "a")
        .query("tag", "b");

    assert_eq!(ep.to_string(), "http://example.com/items?tag=a&tag=b");
}

#[test]
fn test_values_percent_encoded() {
    let ep = endpoint!("http://example.com", "/search")
        .unwrap()
        .query("q", "a&b=c");

    assert_eq!(ep.to_string(), "http://example.com/search?q=a%26b%3Dc");
}

#[test]
fn test_render_is_idempotent() {
    let ep = endpoint!("http://example.com", "/search")
        .unwrap()
        .query("b", "2")
        .query("a", "1");

    let first = ep.to_string();
    let second = ep.to_string();
    assert_eq!(first, second);
    assert_eq!(first, "http://example.com/search?a=1&b=2");
}

#[test]
fn test_render_reflects_later_mutation() {
    let mut ep = endpoint!("http://example.com", "/search").unwrap();
    assert_eq!(ep.to_string(), "http://example.com/search");

    ep.add_query_param(QueryParam::new("q", "late"));
    assert_eq!(ep.to_string(), "http://example.com/search?q=late");
}

#[test]
fn test_query_param_validity() {
    assert!(QueryParam::new("k", "v").is_valid());
    assert!(QueryParam::new("k", 0).is_valid());
    assert!(!QueryParam::new("k", "").is_valid());
}

#[test]
fn test_query_param_pair() {
    let p = QueryParam::new("limit", 50);
    assert_eq!(p.pair(), ("limit", "50"));
}

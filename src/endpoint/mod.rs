//! Endpoint construction
//!
//! An [`Endpoint`] is a parsed base URL plus an ordered set of optional query
//! parameters. Parameters are validated when added (empty values are dropped)
//! and the query string is encoded only at render time, so repeated renders
//! are idempotent and always reflect the current parameter set.

use crate::error::Result;
use std::fmt;
use url::Url;

/// A URL composed of a fixed base, a formatted path, and optional query
/// parameters.
#[derive(Debug, Clone)]
pub struct Endpoint {
    url: Url,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// Create an endpoint from a host and a pre-formatted path.
    ///
    /// The concatenation of `host` and `path` must parse as an absolute URL;
    /// a malformed pair is a construction error, not a silent zero value.
    pub fn new(host: impl AsRef<str>, path: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(&format!("{}{}", host.as_ref(), path.as_ref()))?;
        Ok(Self {
            url,
            query: Vec::new(),
        })
    }

    /// Add a query parameter, dropping it silently if invalid (empty value).
    ///
    /// Repeated additions with the same key accumulate rather than overwrite.
    pub fn add_query_param(&mut self, param: QueryParam) {
        if !param.is_valid() {
            return;
        }
        self.query.push((param.key, param.value));
    }

    /// Builder-style variant of [`add_query_param`](Self::add_query_param)
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.add_query_param(QueryParam::new(key, value));
        self
    }

    /// The parsed base URL, without the query set applied
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut url = self.url.clone();
        if self.query.is_empty() {
            url.set_query(None);
        } else {
            // Sorted by key for a deterministic rendering; insertion order is
            // preserved among values sharing a key.
            let mut sorted: Vec<&(String, String)> = self.query.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));

            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in sorted {
                pairs.append_pair(key, value);
            }
            drop(pairs);
        }
        write!(f, "{url}")
    }
}

/// A validated key/value pair eligible for inclusion in a query string.
///
/// The value is captured via its `Display` formatting; a parameter is invalid
/// iff the formatted value is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    key: String,
    value: String,
}

impl QueryParam {
    /// Wrap any displayable value as a query parameter
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// A parameter is valid iff its formatted value is non-empty
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    /// The key/value pair
    pub fn pair(&self) -> (&str, &str) {
        (&self.key, &self.value)
    }
}

/// Build an [`Endpoint`] from a host and a `format!`-style path template.
///
/// ```
/// use restwrap::endpoint;
///
/// let ep = endpoint!("http://x.test", "/users/{}/orders/{}", "alice", 7).unwrap();
/// assert_eq!(ep.to_string(), "http://x.test/users/alice/orders/7");
/// ```
#[macro_export]
macro_rules! endpoint {
    ($host:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::endpoint::Endpoint::new($host, format!($fmt $(, $arg)*))
    };
}

#[cfg(test)]
mod tests;

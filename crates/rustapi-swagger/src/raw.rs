//! Trusted raw JavaScript

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// JavaScript text injected into the Swagger UI page without escaping.
///
/// Values of this type are written verbatim into the rendered `<script>`
/// block. Nothing is quoted or sanitized: whoever constructs a `RawJs` is
/// responsible for its content being safe executable code.
///
/// # Example
///
/// ```rust
/// use rustapi_swagger::RawJs;
///
/// let plugin = RawJs::new("MyCustomPlugin");
/// assert_eq!(plugin.as_str(), "MyCustomPlugin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawJs(String);

impl RawJs {
    /// Wrap a piece of trusted JavaScript
    pub fn new(js: impl Into<String>) -> Self {
        Self(js.into())
    }

    /// Borrow the script text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no script was supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the script text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RawJs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawJs {
    fn from(js: String) -> Self {
        Self(js)
    }
}

impl From<&str> for RawJs {
    fn from(js: &str) -> Self {
        Self(js.to_string())
    }
}

impl AsRef<str> for RawJs {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RawJs {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_raw_js_is_not_escaped() {
        let js = RawJs::new("console.log(\"<b>\")");
        assert_eq!(js.to_string(), "console.log(\"<b>\")");
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(RawJs::from("filter"), RawJs::from("true"));
        assert_eq!(map.get("filter").map(RawJs::as_str), Some("true"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&RawJs::new("a()")).unwrap();
        assert_eq!(json, "\"a()\"");
    }
}

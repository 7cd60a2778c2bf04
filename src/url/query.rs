//! Ordered query string parameters
//!
//! Parameters unrelated to filtering are preserved across writes.

use super::error::CodecError;
use std::fmt;
use std::str::FromStr;

/// Ordered `application/x-www-form-urlencoded` key/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Build from key/value pairs, keeping their order
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Parse a query string; a leading `?` is ignored
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Query` if the query string cannot be decoded.
    pub fn parse(query: &str) -> Result<Self, CodecError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(Self { pairs })
    }

    /// First value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, replacing the first occurrence in place and dropping any
    /// later duplicates; appends when missing
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(pos) = self.pairs.iter().position(|(k, _)| k == key) {
            self.pairs[pos].1 = value;
            let mut index = 0;
            self.pairs.retain(|(k, _)| {
                let keep = index <= pos || k != key;
                index += 1;
                keep
            });
        } else {
            self.pairs.push((key.to_string(), value));
        }
    }

    /// Remove every occurrence of `key`
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Iterate over the pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether there are no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as a query string, without a leading `?`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.pairs).expect("pair serialization should not fail")
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl FromStr for QueryParams {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_question_mark() {
        let params = QueryParams::parse("?a=1&b=two").unwrap();
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("two"));
        assert_eq!(params.get("c"), None);
    }

    #[test]
    fn test_parse_unencoded_json() {
        let params = QueryParams::parse(r#"filters={"a":{"value":"x"}}&pageNum=2"#).unwrap();
        assert_eq!(params.get("filters"), Some(r#"{"a":{"value":"x"}}"#));
        assert_eq!(params.get("pageNum"), Some("2"));
    }

    #[test]
    fn test_set_keeps_position_and_other_params() {
        let mut params = QueryParams::parse("tab=1&pageNum=3&q=x&pageNum=4").unwrap();
        params.set("pageNum", "1");
        params.set("pageSize", "50");
        assert_eq!(params.to_query_string(), "tab=1&pageNum=1&q=x&pageSize=50");
    }

    #[test]
    fn test_remove() {
        let mut params = QueryParams::parse("a=1&b=2&a=3").unwrap();
        params.remove("a");
        assert_eq!(params.to_query_string(), "b=2");
        params.remove("b");
        assert!(params.is_empty());
    }

    #[test]
    fn test_encoding_roundtrip() {
        let mut params = QueryParams::new();
        params.set("filters", r#"{"name":{"value":"a b&c"}}"#);
        let encoded = params.to_query_string();
        assert!(!encoded.contains('&'));
        let decoded: QueryParams = encoded.parse().unwrap();
        assert_eq!(decoded.get("filters"), Some(r#"{"name":{"value":"a b&c"}}"#));
    }
}

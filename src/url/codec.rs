//! Filter set codec
//!
//! The canonical form is a JSON object keyed by `optionId`, insertion order
//! following the store:
//!
//! ```text
//! {"status":{"value":"running","label":"Status","displayValue":"Running"}}
//! ```
//!
//! Decoding also accepts two older layouts, tried strictly in this order and
//! never mixed:
//!
//! 1. canonical object (every non-null entry is an object with a `value` key)
//! 2. flat map `{"status": "running"}`
//! 3. bare array of applied filter objects

use super::error::CodecError;
use super::pagination::{DEFAULT_PAGE_SIZE, Pagination};
use super::query::QueryParams;
use crate::catalog::Catalog;
use crate::filters::{AppliedFilter, FilterValue};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default query parameter holding the filters
pub const DEFAULT_KEY: &str = "filters";

/// Layout a filters parameter was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `{optionId: {value, label, displayValue}}`
    Canonical,
    /// `{optionId: value}`
    FlatMap,
    /// `[{optionId, label, value, displayValue}]`
    BareArray,
}

/// Result of reading filters from the location
#[derive(Debug)]
pub struct Decoded {
    /// Decoded filters, or the initial filters on fallback
    pub filters: Vec<AppliedFilter>,
    /// Why the fallback was used, when decoding failed
    pub error: Option<CodecError>,
}

/// Entry of the bare-array layout
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapedFilter {
    option_id: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    display_value: String,
}

/// Serializer/deserializer for the filter set and pagination cursor
#[derive(Debug, Clone)]
pub struct UrlCodec {
    key: String,
    catalog: Arc<Catalog>,
    default_page_size: u32,
}

impl UrlCodec {
    /// Create a codec using the default `filters` key
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            catalog,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Use a different query parameter for the filters
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Page size used when the location has none
    #[must_use]
    pub const fn with_default_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Query parameter holding the filters
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Catalog used to type decoded values
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Serialize filters to the canonical JSON text
    ///
    /// Returns `None` when there is nothing to store.
    #[must_use]
    pub fn serialize(&self, filters: &[AppliedFilter]) -> Option<String> {
        let mut map = Map::new();
        for filter in filters.iter().filter(|f| !f.value.is_null()) {
            map.insert(
                filter.option_id.clone(),
                json!({
                    "value": filter.value.to_json(),
                    "label": filter.label,
                    "displayValue": filter.display_value,
                }),
            );
        }
        if map.is_empty() {
            None
        } else {
            Some(Value::Object(map).to_string())
        }
    }

    /// Decode a filters parameter
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the text is not JSON or matches none of the
    /// accepted layouts.
    pub fn decode(&self, raw: &str) -> Result<Vec<AppliedFilter>, CodecError> {
        self.decode_with_format(raw).map(|(_, filters)| filters)
    }

    /// Decode a filters parameter, reporting which layout matched
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the text is not JSON or matches none of the
    /// accepted layouts.
    pub fn decode_with_format(&self, raw: &str) -> Result<(Format, Vec<AppliedFilter>), CodecError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) if is_canonical(&map) => {
                Ok((Format::Canonical, self.decode_canonical(map)))
            }
            Value::Object(map) => Ok((Format::FlatMap, self.decode_flat(map))),
            Value::Array(items) => Ok((Format::BareArray, self.decode_array(items)?)),
            other => Err(CodecError::UnexpectedShape(format!(
                "expected an object or array, found {}",
                json_type(&other)
            ))),
        }
    }

    /// Read filters from query parameters
    ///
    /// A missing or empty parameter yields `initial`. A parameter that fails
    /// to decode also yields `initial`, with the error logged and returned.
    #[must_use]
    pub fn read_filters(&self, params: &QueryParams, initial: &[AppliedFilter]) -> Decoded {
        let Some(raw) = params.get(&self.key).filter(|raw| !raw.is_empty()) else {
            return Decoded {
                filters: initial.to_vec(),
                error: None,
            };
        };
        match self.decode_with_format(raw) {
            Ok((format, filters)) => {
                debug!(?format, count = filters.len(), "decoded filters from location");
                Decoded {
                    filters,
                    error: None,
                }
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to parse filters from location");
                Decoded {
                    filters: initial.to_vec(),
                    error: Some(err),
                }
            }
        }
    }

    /// Write filters into query parameters, removing the key when empty
    pub fn write_filters(&self, params: &mut QueryParams, filters: &[AppliedFilter]) {
        match self.serialize(filters) {
            Some(text) => params.set(&self.key, text),
            None => params.remove(&self.key),
        }
    }

    /// Read the pagination cursor
    #[must_use]
    pub fn read_pagination(&self, params: &QueryParams) -> Pagination {
        Pagination::read(params, self.default_page_size)
    }

    /// Write the pagination cursor
    pub fn write_pagination(&self, params: &mut QueryParams, pagination: Pagination) {
        pagination.write(params);
    }

    fn value_for(&self, option_id: &str, raw: Value) -> Option<FilterValue> {
        let kind = self.catalog.get(option_id).map(|def| def.kind);
        FilterValue::from_json(kind, raw)
    }

    fn decode_canonical(&self, map: Map<String, Value>) -> Vec<AppliedFilter> {
        map.into_iter()
            .filter_map(|(option_id, entry)| {
                let Value::Object(mut entry) = entry else {
                    return None;
                };
                let value = self.value_for(&option_id, entry.remove("value")?)?;
                let label = non_empty_string(entry.remove("label")).unwrap_or_else(|| option_id.clone());
                let display_value = non_empty_string(entry.remove("displayValue"))
                    .unwrap_or_else(|| value.display_text());
                Some(AppliedFilter::new(option_id, label, value, display_value))
            })
            .collect()
    }

    fn decode_flat(&self, map: Map<String, Value>) -> Vec<AppliedFilter> {
        map.into_iter()
            .filter_map(|(option_id, raw)| {
                let value = self.value_for(&option_id, raw)?;
                let display_value = value.display_text();
                Some(AppliedFilter::new(option_id.clone(), option_id, value, display_value))
            })
            .collect()
    }

    fn decode_array(&self, items: Vec<Value>) -> Result<Vec<AppliedFilter>, CodecError> {
        let shaped: Vec<ShapedFilter> = serde_json::from_value(Value::Array(items))
            .map_err(|e| CodecError::UnexpectedShape(format!("array entries must be filters: {e}")))?;
        Ok(shaped
            .into_iter()
            .filter_map(|entry| {
                let value = self.value_for(&entry.option_id, entry.value)?;
                let label = if entry.label.is_empty() {
                    entry.option_id.clone()
                } else {
                    entry.label
                };
                let display_value = if entry.display_value.is_empty() {
                    value.display_text()
                } else {
                    entry.display_value
                };
                Some(AppliedFilter::new(entry.option_id, label, value, display_value))
            })
            .collect())
    }
}

/// Flat `optionId → value` projection for data fetching
///
/// Lists are joined by `","`; null values are omitted.
#[must_use]
pub fn filter_params(filters: &[AppliedFilter]) -> Map<String, Value> {
    filters
        .iter()
        .filter(|f| !f.value.is_null())
        .map(|f| (f.option_id.clone(), f.value.to_param()))
        .collect()
}

fn is_canonical(map: &Map<String, Value>) -> bool {
    map.values().all(|entry| match entry {
        Value::Null => true,
        Value::Object(fields) => fields.contains_key("value"),
        _ => false,
    })
}

fn non_empty_string(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

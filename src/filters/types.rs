//! Filter value and applied filter types
//!
//! - `FilterValue`: closed variant with one constructor per filter kind
//! - `AppliedFilter`: one committed, uniquely keyed criterion

use crate::catalog::{FilterKind, Scalar};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Value of a filter, either in progress (draft) or committed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    /// Free text
    Text(String),
    /// One choice value
    Choice(Scalar),
    /// Ordered choice values
    MultiChoice(Vec<Scalar>),
    /// A single instant
    Date(DateTime<Utc>),
    /// Start and end instants
    DateRange(DateTime<Utc>, DateTime<Utc>),
    /// Opaque value from a custom control, or data the catalog cannot type
    Custom(Value),
    /// No value
    #[default]
    Absent,
}

impl FilterValue {
    /// Whether the value is `Absent`
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the value is `Absent` or a JSON `null`
    ///
    /// Null values are never stored or written to the location.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Absent | Self::Custom(Value::Null))
    }

    /// Whether the value carries nothing worth committing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent | Self::Custom(Value::Null) => true,
            Self::Text(s) => s.is_empty(),
            Self::MultiChoice(values) => values.is_empty(),
            Self::Choice(_) | Self::Date(_) | Self::DateRange(..) | Self::Custom(_) => false,
        }
    }

    /// Whether the value belongs to a definition of `kind`
    #[must_use]
    pub const fn fits(&self, kind: FilterKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), FilterKind::Text)
                | (Self::Choice(_), FilterKind::SingleChoice)
                | (Self::MultiChoice(_), FilterKind::MultiChoice)
                | (Self::Date(_), FilterKind::Date)
                | (Self::DateRange(..), FilterKind::DateRange)
                | (Self::Custom(_), FilterKind::Custom)
        )
    }

    /// JSON form used in the location
    ///
    /// Dates are RFC 3339 UTC with millisecond precision.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Choice(v) => v.to_json(),
            Self::MultiChoice(values) => Value::Array(values.iter().map(Scalar::to_json).collect()),
            Self::Date(d) => Value::String(format_instant(d)),
            Self::DateRange(start, end) => Value::Array(vec![
                Value::String(format_instant(start)),
                Value::String(format_instant(end)),
            ]),
            Self::Custom(v) => v.clone(),
            Self::Absent => Value::Null,
        }
    }

    /// Rebuild a value from its JSON form
    ///
    /// `kind` is the kind of the matching catalog definition, if any. A
    /// `null` input yields `None`. Input that does not match the kind, or that
    /// has no definition, is kept as an opaque `Custom` value.
    #[must_use]
    pub fn from_json(kind: Option<FilterKind>, raw: Value) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        let typed = match kind {
            Some(FilterKind::Text) => match &raw {
                Value::String(s) => Some(Self::Text(s.clone())),
                _ => None,
            },
            Some(FilterKind::SingleChoice) => Scalar::from_json(&raw).map(Self::Choice),
            Some(FilterKind::MultiChoice) => match &raw {
                Value::Array(items) => items
                    .iter()
                    .map(Scalar::from_json)
                    .collect::<Option<Vec<_>>>()
                    .map(Self::MultiChoice),
                _ => None,
            },
            Some(FilterKind::Date) => raw.as_str().and_then(parse_instant).map(Self::Date),
            Some(FilterKind::DateRange) => match raw.as_array().map(Vec::as_slice) {
                Some([start, end]) => start
                    .as_str()
                    .and_then(parse_instant)
                    .zip(end.as_str().and_then(parse_instant))
                    .map(|(s, e)| Self::DateRange(s, e)),
                _ => None,
            },
            Some(FilterKind::Custom) | None => None,
        };
        Some(typed.unwrap_or(Self::Custom(raw)))
    }

    /// Plain text form, used when no display value is available
    ///
    /// Lists are joined by `","` without spaces.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Choice(v) => v.to_string(),
            Self::MultiChoice(values) => values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
            Self::Date(d) => format_instant(d),
            Self::DateRange(start, end) => {
                format!("{},{}", format_instant(start), format_instant(end))
            }
            Self::Custom(Value::String(s)) => s.clone(),
            Self::Custom(Value::Null) | Self::Absent => String::new(),
            Self::Custom(v) => v.to_string(),
        }
    }

    /// Flattened projection for data fetching
    ///
    /// Lists become one comma separated string, everything else keeps its
    /// JSON form.
    #[must_use]
    pub fn to_param(&self) -> Value {
        match self {
            Self::MultiChoice(_) | Self::DateRange(..) => Value::String(self.display_text()),
            Self::Custom(Value::Array(items)) => Value::String(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            other => other.to_json(),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// A committed filter criterion
///
/// Within a store there is at most one `AppliedFilter` per `option_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilter {
    /// Id of the catalog definition this filter belongs to
    pub option_id: String,

    /// Definition label at commit time
    pub label: String,

    /// Committed value (never `Absent` or null)
    pub value: FilterValue,

    /// Text shown for the value
    pub display_value: String,
}

impl AppliedFilter {
    /// Create a new applied filter
    #[must_use]
    pub fn new(
        option_id: impl Into<String>,
        label: impl Into<String>,
        value: FilterValue,
        display_value: impl Into<String>,
    ) -> Self {
        Self {
            option_id: option_id.into(),
            label: label.into(),
            value,
            display_value: display_value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_is_empty() {
        assert!(FilterValue::Absent.is_empty());
        assert!(FilterValue::Text(String::new()).is_empty());
        assert!(FilterValue::MultiChoice(vec![]).is_empty());
        assert!(FilterValue::Custom(Value::Null).is_empty());
        assert!(!FilterValue::Text("x".into()).is_empty());
        assert!(!FilterValue::Custom(json!(0)).is_empty());
    }

    #[test]
    fn test_is_null() {
        assert!(FilterValue::Absent.is_null());
        assert!(FilterValue::Custom(Value::Null).is_null());
        assert!(!FilterValue::Custom(json!(0)).is_null());
        assert!(!FilterValue::Text(String::new()).is_null());
    }

    #[test]
    fn test_fits() {
        assert!(FilterValue::Text("a".into()).fits(FilterKind::Text));
        assert!(!FilterValue::Text("a".into()).fits(FilterKind::Date));
        assert!(FilterValue::Choice("a".into()).fits(FilterKind::SingleChoice));
        assert!(!FilterValue::Choice("a".into()).fits(FilterKind::MultiChoice));
        assert!(!FilterValue::Absent.fits(FilterKind::Custom));
    }

    #[test]
    fn test_date_json_form() {
        let value = FilterValue::Date(day(2024, 1, 5));
        assert_eq!(value.to_json(), json!("2024-01-05T00:00:00.000Z"));

        let back = FilterValue::from_json(Some(FilterKind::Date), value.to_json()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_date_range_json_form() {
        let value = FilterValue::DateRange(day(2024, 1, 1), day(2024, 1, 31));
        let back = FilterValue::from_json(Some(FilterKind::DateRange), value.to_json()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_from_json_null_is_none() {
        assert!(FilterValue::from_json(Some(FilterKind::Text), Value::Null).is_none());
        assert!(FilterValue::from_json(None, Value::Null).is_none());
    }

    #[test]
    fn test_from_json_mismatch_is_opaque() {
        let value = FilterValue::from_json(Some(FilterKind::Date), json!("yesterday")).unwrap();
        assert_eq!(value, FilterValue::Custom(json!("yesterday")));

        let unknown = FilterValue::from_json(None, json!([1, 2])).unwrap();
        assert_eq!(unknown, FilterValue::Custom(json!([1, 2])));
    }

    #[test]
    fn test_from_json_multi_choice() {
        let value = FilterValue::from_json(Some(FilterKind::MultiChoice), json!(["a", 2])).unwrap();
        assert_eq!(
            value,
            FilterValue::MultiChoice(vec![Scalar::from("a"), Scalar::from(2)])
        );
    }

    #[test]
    fn test_display_text_and_param() {
        let multi = FilterValue::MultiChoice(vec!["a".into(), "b".into()]);
        assert_eq!(multi.display_text(), "a,b");
        assert_eq!(multi.to_param(), json!("a,b"));

        let choice = FilterValue::Choice(Scalar::from(7));
        assert_eq!(choice.display_text(), "7");
        assert_eq!(choice.to_param(), json!(7));

        assert_eq!(FilterValue::Custom(json!({"a": 1})).display_text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_applied_filter_serializes_camel_case() {
        let filter = AppliedFilter::new("status", "Status", FilterValue::Choice("running".into()), "Running");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            json!({
                "optionId": "status",
                "label": "Status",
                "value": "running",
                "displayValue": "Running",
            })
        );
    }
}

//! Catalog data structures
//!
//! - `Scalar`: a choice value (string or number)
//! - `FilterKind`: which control a definition uses
//! - `ChoiceOption`: one selectable value with its display label
//! - `FilterDefinition`: one filterable dimension

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::sync::Arc;

/// A single choice value
///
/// Serialized untagged, so `"running"` and `3` are both valid scalars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Scalar {
    /// Numeric value
    Number(Number),
    /// String value
    Text(String),
}

impl Scalar {
    /// Convert a JSON value into a scalar, if it is a string or number
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.clone())),
            _ => None,
        }
    }

    /// JSON form of the scalar
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Number(n) => Value::Number(n.clone()),
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// Kind of control a filter definition uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Free text, committed explicitly
    #[serde(alias = "input")]
    Text,
    /// Exactly one of the definition's choices
    #[serde(alias = "select")]
    SingleChoice,
    /// Any non-empty subset of the definition's choices
    MultiChoice,
    /// A single instant
    Date,
    /// A start and end instant
    #[serde(alias = "dateRange")]
    DateRange,
    /// Opaque value produced by a consumer-supplied control
    Custom,
}

impl FilterKind {
    /// Whether the kind selects from a list of choices
    #[must_use]
    pub const fn has_choices(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultiChoice)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::SingleChoice => "single-choice",
            Self::MultiChoice => "multi-choice",
            Self::Date => "date",
            Self::DateRange => "date-range",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// One selectable value of a choice definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value stored in the applied filter
    pub value: Scalar,
    /// Label shown to the user and used as the display value
    pub label: String,
}

impl ChoiceOption {
    /// Create a new choice
    #[must_use]
    pub fn new(value: impl Into<Scalar>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Display hook for custom definitions
///
/// Turns the opaque draft value into the text shown on the applied filter.
#[derive(Clone)]
pub struct DisplayHook(Arc<dyn Fn(&Value) -> String + Send + Sync>);

impl DisplayHook {
    /// Wrap a display function
    pub fn new(f: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Render a value
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for DisplayHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayHook(..)")
    }
}

/// One filterable dimension of the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefinition {
    /// Unique id, used as the applied filter's `optionId`
    pub id: String,

    /// Display name
    pub label: String,

    /// Control kind
    pub kind: FilterKind,

    /// Ordered choices (single and multi choice only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceOption>,

    /// Display hook for custom values
    #[serde(skip)]
    pub display: Option<DisplayHook>,
}

impl FilterDefinition {
    /// Create a definition without choices
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            choices: Vec::new(),
            display: None,
        }
    }

    /// Free text definition
    #[must_use]
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::Text)
    }

    /// Single choice definition
    #[must_use]
    pub fn single_choice(
        id: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(id, label, FilterKind::SingleChoice).with_choices(choices)
    }

    /// Multi choice definition
    #[must_use]
    pub fn multi_choice(
        id: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<ChoiceOption>,
    ) -> Self {
        Self::new(id, label, FilterKind::MultiChoice).with_choices(choices)
    }

    /// Date definition
    #[must_use]
    pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::Date)
    }

    /// Date range definition
    #[must_use]
    pub fn date_range(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::DateRange)
    }

    /// Custom definition
    #[must_use]
    pub fn custom(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(id, label, FilterKind::Custom)
    }

    /// Replace the choices
    #[must_use]
    pub fn with_choices(mut self, choices: Vec<ChoiceOption>) -> Self {
        self.choices = choices;
        self
    }

    /// Attach a display hook
    #[must_use]
    pub fn with_display(mut self, hook: DisplayHook) -> Self {
        self.display = Some(hook);
        self
    }

    /// Find the choice carrying `value`
    #[must_use]
    pub fn choice(&self, value: &Scalar) -> Option<&ChoiceOption> {
        self.choices.iter().find(|c| &c.value == value)
    }

    /// Label of the choice carrying `value`
    #[must_use]
    pub fn choice_label(&self, value: &Scalar) -> Option<&str> {
        self.choice(value).map(|c| c.label.as_str())
    }
}

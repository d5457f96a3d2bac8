//! Filter predicates.
//!
//! A [`Predicate`] is one field-level condition: a field name and a
//! [`FilterValue`]. The value's variant decides the [`MatchMode`]. A
//! [`Search`] is the free-text predicate that spans several fields.

use serde::Serialize;

use crate::error::Result;
use crate::traits::Record;
use crate::value::{Number, Timestamp, Value};

/// How a predicate compares its query against a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-insensitive substring match on string fields.
    Substring,
    /// Field falls on the same UTC calendar day as the query.
    SameDay,
    /// Field is a number within inclusive bounds.
    Range,
}

impl MatchMode {
    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::SameDay => "same_day",
            MatchMode::Range => "range",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query value of a predicate.
///
/// [`FilterValue::Empty`], an empty `Text`, and a `Range` with no bounds are
/// *inert*: they match every record, and setting one clears the field's
/// filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// No query.
    #[default]
    Empty,
    /// Substring to look for, compared case-insensitively.
    Text(String),
    /// Calendar day to match.
    Date(Timestamp),
    /// Inclusive numeric bounds, either optional.
    Range {
        min: Option<Number>,
        max: Option<Number>,
    },
}

impl FilterValue {
    /// Builds a same-day filter from user input such as a date picker's
    /// `YYYY-MM-DD`. Blank input yields [`FilterValue::Empty`].
    pub fn date(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(FilterValue::Empty);
        }
        Ok(FilterValue::Date(Timestamp::parse(input)?))
    }

    /// Inclusive range `min..=max`.
    pub fn range(min: impl Into<Number>, max: impl Into<Number>) -> Self {
        FilterValue::Range {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// Lower bound only.
    pub fn at_least(min: impl Into<Number>) -> Self {
        FilterValue::Range {
            min: Some(min.into()),
            max: None,
        }
    }

    /// Upper bound only.
    pub fn at_most(max: impl Into<Number>) -> Self {
        FilterValue::Range {
            min: None,
            max: Some(max.into()),
        }
    }

    /// Returns `true` if this value matches everything.
    pub fn is_inert(&self) -> bool {
        match self {
            FilterValue::Empty => true,
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Date(_) => false,
            FilterValue::Range { min, max } => min.is_none() && max.is_none(),
        }
    }

    /// The match mode implied by this value, or `None` when inert.
    pub fn mode(&self) -> Option<MatchMode> {
        if self.is_inert() {
            return None;
        }
        match self {
            FilterValue::Text(_) => Some(MatchMode::Substring),
            FilterValue::Date(_) => Some(MatchMode::SameDay),
            FilterValue::Range { .. } => Some(MatchMode::Range),
            FilterValue::Empty => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<Timestamp> for FilterValue {
    fn from(t: Timestamp) -> Self {
        FilterValue::Date(t)
    }
}

impl From<chrono::NaiveDate> for FilterValue {
    fn from(date: chrono::NaiveDate) -> Self {
        FilterValue::Date(Timestamp::from_date(date))
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::Empty, Into::into)
    }
}

/// A single field-level filter condition.
///
/// # Example
///
/// ```
/// use boxoffice_view::{FilterValue, MatchMode, Predicate, Value};
///
/// let city = Predicate::new("city", "york");
/// assert_eq!(city.mode(), Some(MatchMode::Substring));
/// assert!(city.matches(&Value::String("New York")));
/// assert!(!city.matches(&Value::String("Morrison")));
///
/// // A record without the field is not excluded.
/// assert!(city.matches(&Value::None));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Predicate {
    /// The field to test.
    pub field: String,
    /// The query value.
    pub value: FilterValue,
    #[serde(skip)]
    needle: String,
}

impl Predicate {
    /// Creates a new predicate.
    pub fn new(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let value = value.into();
        let needle = match &value {
            FilterValue::Text(s) => s.to_lowercase(),
            _ => String::new(),
        };
        Predicate {
            field: field.into(),
            value,
            needle,
        }
    }

    /// The match mode, or `None` when the predicate is inert.
    pub fn mode(&self) -> Option<MatchMode> {
        self.value.mode()
    }

    /// Returns `true` if this predicate matches everything.
    pub fn is_inert(&self) -> bool {
        self.value.is_inert()
    }

    /// Evaluates this predicate against a field value.
    ///
    /// An absent field leaves the predicate inert for that record. A present
    /// value of a type the mode cannot compare does not match.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (_, Value::None) => true,
            (FilterValue::Empty, _) => true,
            (FilterValue::Text(_), Value::String(s)) => contains_folded(s, &self.needle),
            (FilterValue::Date(day), Value::Timestamp(t)) => t.same_day(*day),
            (FilterValue::Range { min, max }, Value::Number(n)) => within(*n, *min, *max),
            _ => false,
        }
    }

    /// Evaluates this predicate against a record.
    pub fn matches_record<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.matches(&record.field(&self.field))
    }
}

fn within(n: Number, min: Option<Number>, max: Option<Number>) -> bool {
    let above = min.map_or(true, |lo| matches!(n.compare(lo), Some(o) if o.is_ge()));
    let below = max.map_or(true, |hi| matches!(n.compare(hi), Some(o) if o.is_le()));
    above && below
}

/// Case-insensitive substring test; `needle` must already be lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

/// Free-text search across several string fields.
///
/// A record matches when ANY of the fields contains the query,
/// case-insensitively. An empty query matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Search {
    fields: Vec<String>,
    query: String,
    needle: String,
}

impl Search {
    /// Creates an empty search over the given fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Search {
            fields: fields.into_iter().map(Into::into).collect(),
            query: String::new(),
            needle: String::new(),
        }
    }

    /// Replaces the query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.to_lowercase();
    }

    /// Clears the query.
    pub fn clear(&mut self) {
        self.query.clear();
        self.needle.clear();
    }

    /// The current query as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The fields the search looks at.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns `true` if the query is empty.
    pub fn is_inert(&self) -> bool {
        self.query.is_empty()
    }

    /// Evaluates the search against a record.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        if self.is_inert() {
            return true;
        }
        self.fields.iter().any(|field| match record.field(field) {
            Value::String(s) => contains_folded(s, &self.needle),
            _ => false,
        })
    }
}

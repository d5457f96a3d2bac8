//! Sort direction, sort specs, and the total ordering used to sort records.
//!
//! Strings compare case-insensitively with diacritics folded to their base
//! letters, so "Électro" lands next to "electro". Numbers compare
//! numerically, timestamps chronologically, booleans `false < true`.
//! An absent field sorts before any present value; values of different kinds
//! order by kind so the comparison stays total.

use std::cmp::Ordering;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::traits::Record;
use crate::value::{Number, Timestamp, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// The opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }

    /// Arrow marker for a column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Dir::Asc => "↑",
            Dir::Desc => "↓",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Dir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// The active sort: one field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    #[serde(default)]
    pub dir: Dir,
}

impl SortSpec {
    /// Creates a new sort spec.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortSpec {
            field: field.into(),
            dir,
        }
    }

    /// Ascending sort on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        SortSpec::new(field, Dir::Asc)
    }

    /// Descending sort on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        SortSpec::new(field, Dir::Desc)
    }

    /// Extracts the sort key of a record.
    pub fn key<R: Record + ?Sized>(&self, record: &R) -> SortKey {
        SortKey::from(&record.field(&self.field))
    }

    /// Compares two keys in this spec's direction.
    pub fn compare_keys(&self, a: &SortKey, b: &SortKey) -> Ordering {
        self.dir.apply(a.cmp(b))
    }

    /// Compares two records in this spec's direction.
    pub fn compare<R: Record + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        self.compare_keys(&self.key(a), &self.key(b))
    }
}

/// Owned, totally ordered sort key extracted from a field value.
#[derive(Debug, Clone)]
pub enum SortKey {
    /// Field absent.
    Absent,
    Bool(bool),
    Number(Number),
    Timestamp(Timestamp),
    /// `folded` is the transliterated, lowercased form; `lower` breaks ties
    /// between strings that fold to the same text.
    Text { folded: String, lower: String },
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Absent => 0,
            SortKey::Bool(_) => 1,
            SortKey::Number(_) => 2,
            SortKey::Timestamp(_) => 3,
            SortKey::Text { .. } => 4,
        }
    }
}

impl From<&Value<'_>> for SortKey {
    fn from(value: &Value<'_>) -> Self {
        match value {
            Value::None => SortKey::Absent,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Number(n) => SortKey::Number(*n),
            Value::Timestamp(t) => SortKey::Timestamp(*t),
            Value::String(s) => SortKey::Text {
                folded: deunicode(s).to_lowercase(),
                lower: s.to_lowercase(),
            },
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Absent, SortKey::Absent) => Ordering::Equal,
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(*b),
            (SortKey::Timestamp(a), SortKey::Timestamp(b)) => a.cmp(b),
            (
                SortKey::Text {
                    folded: fa,
                    lower: la,
                },
                SortKey::Text {
                    folded: fb,
                    lower: lb,
                },
            ) => fa.cmp(fb).then_with(|| la.cmp(lb)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Compares two field values with the ascending sort order.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    SortKey::from(a).cmp(&SortKey::from(b))
}

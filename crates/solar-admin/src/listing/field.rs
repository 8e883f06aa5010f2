use std::cmp::Ordering;
use std::fmt::Debug;

use chrono::{DateTime, Utc};

use super::query::SortDirection;
use crate::labels::DisplayTag;

/// Borrowed value of one record column, typed for comparison and matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Flag(bool),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(&'a str),
    /// Ordinal tag: equality and search use the tag, ordering uses the rank.
    Ranked { tag: &'a str, rank: usize },
}

impl<'a> FieldValue<'a> {
    pub fn tag<T: DisplayTag>(tag: T) -> FieldValue<'static> {
        FieldValue::Text(tag.as_str())
    }

    /// Tag ranked by its position in the declared variant order.
    pub fn ranked<T: DisplayTag>(tag: T) -> FieldValue<'static> {
        let rank = T::ALL
            .iter()
            .position(|candidate| *candidate == tag)
            .unwrap_or(T::ALL.len());
        FieldValue::Ranked {
            tag: tag.as_str(),
            rank,
        }
    }

    pub fn optional_text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Text)
    }

    pub fn optional_timestamp(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Timestamp)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Missing => 0,
            FieldValue::Flag(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Timestamp(_) => 3,
            FieldValue::Text(_) => 4,
            FieldValue::Ranked { .. } => 5,
        }
    }

    /// Total order: text case-folded, numbers numerically, timestamps by instant.
    /// Values of different kinds order by kind, which puts missing values first.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(left), FieldValue::Text(right)) => left
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(right.chars().flat_map(char::to_lowercase)),
            (FieldValue::Number(left), FieldValue::Number(right)) => left.total_cmp(right),
            (FieldValue::Timestamp(left), FieldValue::Timestamp(right)) => left.cmp(right),
            (FieldValue::Flag(left), FieldValue::Flag(right)) => left.cmp(right),
            (FieldValue::Ranked { rank: left, .. }, FieldValue::Ranked { rank: right, .. }) => {
                left.cmp(right)
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Facet equality against the raw filter value.
    pub fn equals_raw(&self, expected: &str) -> bool {
        match self {
            FieldValue::Missing => false,
            FieldValue::Flag(value) => expected
                .trim()
                .parse::<bool>()
                .is_ok_and(|parsed| parsed == *value),
            FieldValue::Number(value) => expected
                .trim()
                .parse::<f64>()
                .is_ok_and(|parsed| parsed == *value),
            FieldValue::Timestamp(value) => DateTime::parse_from_rfc3339(expected.trim())
                .is_ok_and(|parsed| parsed.with_timezone(&Utc) == *value),
            FieldValue::Text(value) | FieldValue::Ranked { tag: value, .. } => *value == expected,
        }
    }

    /// Substring match against an already case-folded needle.
    pub fn contains_folded(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(value) | FieldValue::Ranked { tag: value, .. } => {
                value.to_lowercase().contains(needle)
            }
            FieldValue::Number(value) => value.to_string().contains(needle),
            FieldValue::Missing | FieldValue::Flag(_) | FieldValue::Timestamp(_) => false,
        }
    }
}

/// Column enumeration for a listable record type.
pub trait RecordField: Copy + Eq + Debug + Send + Sync + 'static {
    const ALL: &'static [Self];
    const DEFAULT_SORT: Self;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Ascending;
    /// Columns searched when the caller does not pick any.
    const SEARCHABLE: &'static [Self];

    fn name(self) -> &'static str;

    /// Resolves `requested_amount`, `requestedAmount` and `requested-amount` alike.
    fn from_name(name: &str) -> Option<Self> {
        let wanted = fold_field_name(name);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|field| fold_field_name(field.name()) == wanted)
    }
}

fn fold_field_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|ch| *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Record type that can be run through a [`super::ListQuery`].
pub trait ListRecord {
    type Field: RecordField;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}

//! Free-text row filtering.
//!
//! A row passes when any of its fields whose key is some column's
//! `selectorId` matches the query. The comparison used for a field is looked
//! up by key in a [`ComparatorRegistry`]: dates, times, currency and composite
//! names are compared in their displayed form, everything else as plain text.
//! An empty query lets every row through.

mod comparators;
mod registry;

pub use comparators::{
    CalendarDateComparator, CurrencyComparator, FieldComparator, FieldRef, FullNameComparator,
    TextComparator, TimeOfDayComparator,
};
pub use registry::ComparatorRegistry;

use chrono::{FixedOffset, Offset, Utc};
use mindbridge_types::{ColumnDef, Row};
use std::collections::HashSet;

/// Normalized filter text: trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Case-insensitive substring test against a candidate's displayed text.
    pub fn found_in(&self, candidate: &str) -> bool {
        candidate.trim().to_lowercase().contains(&self.text)
    }
}

#[derive(Debug, Clone)]
pub struct SearchFilter {
    filter_keys: HashSet<String>,
    registry: ComparatorRegistry,
}

impl SearchFilter {
    pub fn new(columns: &[ColumnDef], registry: ComparatorRegistry) -> Self {
        Self {
            filter_keys: collect_filter_keys(columns),
            registry,
        }
    }

    /// Filter with the built-in comparators, times displayed in UTC.
    pub fn with_standard(columns: &[ColumnDef]) -> Self {
        Self::new(columns, ComparatorRegistry::standard(utc()))
    }

    /// Re-derive the filterable keys after the column list changed.
    pub fn set_columns(&mut self, columns: &[ColumnDef]) {
        self.filter_keys = collect_filter_keys(columns);
    }

    pub fn registry(&self) -> &ComparatorRegistry {
        &self.registry
    }

    pub fn is_filter_key(&self, key: &str) -> bool {
        self.filter_keys.contains(key)
    }

    pub fn matches(&self, row: &Row, query: &Query) -> bool {
        if query.is_empty() {
            return true;
        }

        row.iter().any(|(key, value)| {
            self.filter_keys.contains(key)
                && self
                    .registry
                    .get(key)
                    .matches(&FieldRef { key, value, row }, query)
        })
    }

    /// Lazily yields matching rows in their original order.
    pub fn iter<'a>(
        &'a self,
        rows: &'a [Row],
        query: Query,
    ) -> impl Iterator<Item = &'a Row> + 'a {
        rows.iter().filter(move |row| self.matches(row, &query))
    }

    pub fn filter<'a>(&self, rows: &'a [Row], filter_text: &str) -> Vec<&'a Row> {
        let query = Query::new(filter_text);
        rows.iter().filter(|row| self.matches(row, &query)).collect()
    }

    /// Positions in `rows` of the matching rows, ascending.
    pub fn filter_indices(&self, rows: &[Row], filter_text: &str) -> Vec<usize> {
        let query = Query::new(filter_text);
        rows.iter()
            .enumerate()
            .filter(|(_, row)| self.matches(row, &query))
            .map(|(index, _)| index)
            .collect()
    }
}

fn collect_filter_keys(columns: &[ColumnDef]) -> HashSet<String> {
    columns
        .iter()
        .filter_map(ColumnDef::filter_key)
        .map(str::to_string)
        .collect()
}

pub(crate) fn utc() -> FixedOffset {
    Utc.fix()
}

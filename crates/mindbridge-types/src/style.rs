use crate::row::Row;
use crate::value::display_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Style properties applied to a whole row, e.g. `background-color`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowStyle(pub BTreeMap<String, String>);

impl RowStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }
}

#[derive(Clone)]
pub struct PredicateFn(Arc<dyn Fn(&Row) -> bool + Send + Sync>);

impl PredicateFn {
    pub fn new(f: impl Fn(&Row) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
}

impl fmt::Debug for PredicateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PredicateFn(..)")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RowPredicate {
    /// Field text equals `value` (compared as displayed text)
    FieldEquals { field: String, value: Value },

    /// Field text contains `text`, case-insensitive
    FieldContains { field: String, text: String },

    #[serde(skip)]
    Custom(PredicateFn),
}

impl RowPredicate {
    pub fn custom(f: impl Fn(&Row) -> bool + Send + Sync + 'static) -> Self {
        RowPredicate::Custom(PredicateFn::new(f))
    }

    pub fn evaluate(&self, row: &Row) -> bool {
        match self {
            RowPredicate::FieldEquals { field, value } => row
                .get(field)
                .is_some_and(|v| display_text(Some(v)) == display_text(Some(value))),
            RowPredicate::FieldContains { field, text } => row.get(field).is_some_and(|v| {
                display_text(Some(v))
                    .to_lowercase()
                    .contains(&text.trim().to_lowercase())
            }),
            RowPredicate::Custom(f) => (f.0)(row),
        }
    }
}

/// A style applied to rows for which `when` holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalRowStyle {
    pub when: RowPredicate,
    pub style: RowStyle,
}

impl ConditionalRowStyle {
    pub fn new(when: RowPredicate, style: RowStyle) -> Self {
        Self { when, style }
    }
}

/// First style whose predicate matches `row`.
pub fn first_matching_style<'a>(
    styles: &'a [ConditionalRowStyle],
    row: &Row,
) -> Option<&'a RowStyle> {
    styles
        .iter()
        .find(|conditional| conditional.when.evaluate(row))
        .map(|conditional| &conditional.style)
}

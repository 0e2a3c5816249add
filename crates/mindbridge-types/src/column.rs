use crate::row::Row;
use crate::value::cell_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Programmatic display projection for a column.
#[derive(Clone)]
pub struct SelectorFn(Arc<dyn Fn(&Row) -> Value + Send + Sync>);

impl SelectorFn {
    pub fn new(f: impl Fn(&Row) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, row: &Row) -> Value {
        (self.0)(row)
    }
}

impl fmt::Debug for SelectorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectorFn(..)")
    }
}

/// How a column derives its display value from a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Raw value of a single field
    Field(String),

    /// Several fields stringified and joined, e.g. first and last name
    Join {
        fields: Vec<String>,
        #[serde(default = "default_separator")]
        separator: String,
    },

    /// Closure supplied by the host; never serialized
    #[serde(skip)]
    Custom(SelectorFn),
}

fn default_separator() -> String {
    " ".to_string()
}

impl Selector {
    pub fn field(key: impl Into<String>) -> Self {
        Selector::Field(key.into())
    }

    pub fn join<I, S>(fields: I, separator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selector::Join {
            fields: fields.into_iter().map(Into::into).collect(),
            separator: separator.into(),
        }
    }

    pub fn custom(f: impl Fn(&Row) -> Value + Send + Sync + 'static) -> Self {
        Selector::Custom(SelectorFn::new(f))
    }

    pub fn select(&self, row: &Row) -> Value {
        match self {
            Selector::Field(key) => row.get(key).cloned().unwrap_or(Value::Null),
            Selector::Join { fields, separator } => {
                let joined = fields
                    .iter()
                    .map(|key| row.get(key).map(cell_text).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(separator);
                Value::String(joined.trim().to_string())
            }
            Selector::Custom(f) => f.call(row),
        }
    }
}

/// One table column: label, filter key, display projection and visibility.
///
/// `omit` and `selector_id` are independent: a hidden column still takes part
/// in free-text filtering when its `selector_id` names a row field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,

    #[serde(default)]
    pub omit: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Column without a label, e.g. a row action menu. Never hidden.
    pub fn nameless() -> Self {
        Self::default()
    }

    pub fn with_selector_id(mut self, selector_id: impl Into<String>) -> Self {
        self.selector_id = Some(selector_id.into());
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn omitted(mut self, omit: bool) -> Self {
        self.omit = omit;
        self
    }

    /// Label used for visibility toggling; `None` for nameless columns.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn filter_key(&self) -> Option<&str> {
        self.selector_id.as_deref().filter(|key| !key.is_empty())
    }

    /// Display value for `row`. Falls back to the `selector_id` field.
    pub fn value(&self, row: &Row) -> Value {
        match (&self.selector, self.filter_key()) {
            (Some(selector), _) => selector.select(row),
            (None, Some(key)) => row.get(key).cloned().unwrap_or(Value::Null),
            (None, None) => Value::Null,
        }
    }

    pub fn cell(&self, row: &Row) -> String {
        cell_text(&self.value(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_deserialize_dashboard_column() {
        let column: ColumnDef = serde_json::from_value(json!({
            "name": "Client",
            "selectorId": "client_first_name",
            "selector": {"join": {"fields": ["client_first_name", "client_last_name"]}}
        }))
        .unwrap();

        assert_eq!(column.display_name(), Some("Client"));
        assert_eq!(column.filter_key(), Some("client_first_name"));
        assert!(!column.omit);

        let r = row(json!({"client_first_name": "Jane", "client_last_name": "Doe"}));
        assert_eq!(column.cell(&r), "Jane Doe");
    }

    #[test]
    fn test_value_falls_back_to_selector_id() {
        let column = ColumnDef::new("Email").with_selector_id("email");
        let r = row(json!({"email": "jane@example.com"}));
        assert_eq!(column.value(&r), json!("jane@example.com"));
        assert_eq!(ColumnDef::nameless().value(&r), Value::Null);
    }

    #[test]
    fn test_custom_selector() {
        let column = ColumnDef::new("Sessions").with_selector(Selector::custom(|row| {
            json!(row.get("sessions").and_then(Value::as_array).map_or(0, Vec::len))
        }));
        let r = row(json!({"sessions": [1, 2, 3]}));
        assert_eq!(column.cell(&r), "3");
    }

    #[test]
    fn test_empty_name_is_nameless() {
        let column = ColumnDef::new("");
        assert_eq!(column.display_name(), None);
    }
}

use crate::column::ColumnDef;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One record of the displayed dataset. No schema is enforced.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Columns plus rows, as handed to the table by a dashboard page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub columns: Vec<ColumnDef>,

    #[serde(default)]
    pub data: Vec<Row>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl TableData {
    pub fn new(columns: Vec<ColumnDef>, data: Vec<Row>) -> Self {
        Self {
            columns,
            data,
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: TableData = serde_json::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Column names drive visibility toggling, so they must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for name in self.columns.iter().filter_map(ColumnDef::display_name) {
            if !seen.insert(name) {
                return Err(Error::InvalidTable(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }
        Ok(())
    }
}

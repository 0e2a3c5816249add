use crate::error::Result;
use mindbridge_types::{ColumnDef, Row};
use serde_json::{Map, Value};
use std::io::Write;

const DEFAULT_FILE_STEM: &str = "table";

/// Filtered rows and visible named columns, flattened to text for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub file_stem: String,
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl ExportTable {
    /// Nameless columns (row actions) are left out.
    pub fn new(caption: Option<&str>, columns: &[&ColumnDef], rows: &[&Row]) -> Self {
        let named: Vec<(&str, &ColumnDef)> = columns
            .iter()
            .filter_map(|column| column.display_name().map(|name| (name, *column)))
            .collect();

        Self {
            file_stem: file_stem(caption),
            headers: named.iter().map(|(name, _)| name.to_string()).collect(),
            records: rows
                .iter()
                .map(|row| named.iter().map(|(_, column)| column.cell(row)).collect())
                .collect(),
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.headers)?;
        for record in &self.records {
            csv_writer.write_record(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Array of `header -> cell` objects, keys in column order.
    pub fn to_json(&self) -> Value {
        Value::Array(
            self.records
                .iter()
                .map(|record| {
                    let object: Map<String, Value> = self
                        .headers
                        .iter()
                        .cloned()
                        .zip(record.iter().cloned().map(Value::String))
                        .collect();
                    Value::Object(object)
                })
                .collect(),
        )
    }
}

/// Export file name base derived from the table caption.
pub fn file_stem(caption: Option<&str>) -> String {
    let stem = caption
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    let stem: String = stem
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect();

    if stem.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        stem
    }
}

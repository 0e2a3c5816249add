//! Custom assertions over the CLI's JSON output.
//!
//! - Frame row and column checks for `view`
//! - Visibility checks for `columns`

use anyhow::{Context, Result};
use serde_json::Value;

/// Header names of the frame's columns; nameless columns read as "".
pub fn frame_headers(frame: &Value) -> Result<Vec<String>> {
    let columns = frame["columns"]
        .as_array()
        .context("Expected 'columns' array in frame")?;

    Ok(columns
        .iter()
        .map(|c| c["name"].as_str().unwrap_or_default().to_string())
        .collect())
}

/// Cell at `column` of every frame row.
pub fn frame_column(frame: &Value, column: usize) -> Result<Vec<String>> {
    let rows = frame["rows"]
        .as_array()
        .context("Expected 'rows' array in frame")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row["cells"][column]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Row {} has no cell {}", i, column))
        })
        .collect()
}

/// Assert that the frame shows exactly `expected` rows.
pub fn assert_row_count(frame: &Value, expected: usize) -> Result<()> {
    let rows = frame["rows"]
        .as_array()
        .context("Expected 'rows' array in frame")?;

    if rows.len() != expected {
        anyhow::bail!("Expected {} rows, got {}", expected, rows.len());
    }

    Ok(())
}

/// Assert the frame's headers, in order.
pub fn assert_headers(frame: &Value, expected: &[&str]) -> Result<()> {
    let headers = frame_headers(frame)?;
    if headers != expected {
        anyhow::bail!("Expected headers {:?}, got {:?}", expected, headers);
    }
    Ok(())
}

/// Assert that `columns --format json` reports `name` as hidden or shown.
pub fn assert_column_hidden(entries: &Value, name: &str, hidden: bool) -> Result<()> {
    let entries = entries
        .as_array()
        .context("Expected array of column entries")?;

    let entry = entries
        .iter()
        .find(|e| e["name"] == name)
        .with_context(|| format!("No column entry named {}", name))?;

    let omit = entry["omit"]
        .as_bool()
        .with_context(|| format!("Column {} has no 'omit' flag", name))?;

    if omit != hidden {
        anyhow::bail!("Expected column {} hidden={}, got {}", name, hidden, omit);
    }

    Ok(())
}

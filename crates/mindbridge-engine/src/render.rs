//! Projection of the view state into what a grid actually draws.
//!
//! The frame is a snapshot: visible columns, the current page's cells and the
//! paging summary. Drawing it is the host's job.

use crate::pagination::PageInfo;
use mindbridge_types::{ColumnDef, ConditionalRowStyle, Row, RowStyle, first_matching_style};
use serde::Serialize;

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const EMPTY_PLACEHOLDER: &str = "There are no records to display";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameColumn {
    pub name: Option<String>,
    pub selector_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameRow {
    /// Position of the row in the unfiltered dataset
    pub index: usize,
    pub cells: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<RowStyle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    pub caption: Option<String>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub columns: Vec<FrameColumn>,
    pub rows: Vec<FrameRow>,
    pub page: PageInfo,
}

impl RenderFrame {
    pub fn headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_deref().unwrap_or(""))
            .collect()
    }
}

/// Inputs gathered from the three controllers for one frame.
pub struct FrameSource<'a> {
    pub caption: Option<&'a str>,
    pub columns: Vec<&'a ColumnDef>,
    pub rows: Vec<(usize, &'a Row)>,
    pub row_styles: &'a [ConditionalRowStyle],
    pub page: PageInfo,
    pub loading: bool,
}

pub fn render_frame(source: FrameSource<'_>) -> RenderFrame {
    let columns = source
        .columns
        .iter()
        .map(|column| FrameColumn {
            name: column.display_name().map(str::to_string),
            selector_id: column.filter_key().map(str::to_string),
        })
        .collect();

    let rows: Vec<FrameRow> = if source.loading {
        Vec::new()
    } else {
        source
            .rows
            .iter()
            .map(|(index, row)| FrameRow {
                index: *index,
                cells: source.columns.iter().map(|column| column.cell(row)).collect(),
                style: first_matching_style(source.row_styles, row).cloned(),
            })
            .collect()
    };

    let placeholder = if source.loading {
        Some(LOADING_PLACEHOLDER.to_string())
    } else if rows.is_empty() {
        Some(EMPTY_PLACEHOLDER.to_string())
    } else {
        None
    };

    RenderFrame {
        caption: source.caption.map(str::to_string),
        loading: source.loading,
        placeholder,
        columns,
        rows,
        page: source.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;
    use mindbridge_types::{ItemsPerPage, RowPredicate};
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_loading_suppresses_rows() {
        let columns = [ColumnDef::new("Email").with_selector_id("email")];
        let data = [row(json!({"email": "a@example.com"}))];

        let frame = render_frame(FrameSource {
            caption: Some("Clients"),
            columns: columns.iter().collect(),
            rows: vec![(0, &data[0])],
            row_styles: &[],
            page: Pagination::new(ItemsPerPage::default()).info(1, true),
            loading: true,
        });

        assert!(frame.rows.is_empty());
        assert_eq!(frame.placeholder.as_deref(), Some(LOADING_PLACEHOLDER));
        assert_eq!(frame.headers(), vec!["Email"]);
        assert!(!frame.page.controls_visible);
    }

    #[test]
    fn test_cells_and_styles() {
        let columns = [
            ColumnDef::new("Email").with_selector_id("email"),
            ColumnDef::nameless(),
        ];
        let data = [
            row(json!({"email": "a@example.com", "status": "Cancelled"})),
            row(json!({"email": "b@example.com", "status": "Booked"})),
        ];
        let styles = [ConditionalRowStyle::new(
            RowPredicate::FieldEquals {
                field: "status".to_string(),
                value: json!("Cancelled"),
            },
            RowStyle::new().with("color", "grey"),
        )];

        let frame = render_frame(FrameSource {
            caption: None,
            columns: columns.iter().collect(),
            rows: data.iter().enumerate().collect(),
            row_styles: &styles,
            page: Pagination::new(ItemsPerPage::default()).info(2, false),
            loading: false,
        });

        assert_eq!(frame.placeholder, None);
        assert_eq!(frame.rows[0].cells, vec!["a@example.com", ""]);
        assert_eq!(
            frame.rows[0].style.as_ref().and_then(|s| s.get("color")),
            Some("grey")
        );
        assert_eq!(frame.rows[1].style, None);
        assert_eq!(frame.headers(), vec!["Email", ""]);
    }
}

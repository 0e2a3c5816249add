// Engine module - table view logic (filtering, paging, column visibility)
// This layer sits between the raw table document (types) and whatever host renders it

pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod render;
pub mod state;
pub mod view;
pub mod visibility;

pub use error::{Error, Result};
pub use export::ExportTable;
pub use filter::{ComparatorRegistry, FieldComparator, FieldRef, Query, SearchFilter};
pub use pagination::{PageInfo, Pagination};
pub use render::{FrameColumn, FrameRow, RenderFrame};
pub use state::TableViewState;
pub use view::TableView;
pub use visibility::{ColumnVisibility, VisibilityEntry};

use mindbridge_types::{ColumnDef, ItemsPerPage, Row};

// Façade API - stateless entry points for hosts that keep their own state

/// Rows of `rows` matching `filter_text`, in original order
pub fn filter_rows<'a>(
    rows: &'a [Row],
    columns: &[ColumnDef],
    filter_text: &str,
) -> Vec<&'a Row> {
    SearchFilter::with_standard(columns).filter(rows, filter_text)
}

/// Slice of `rows` shown on `page` (zero-based)
pub fn paginate<T>(rows: &[T], items_per_page: ItemsPerPage, page: usize) -> &[T] {
    Pagination::new(items_per_page).with_page(page).slice(rows)
}

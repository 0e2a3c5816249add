use crate::filter::Query;
use crate::pagination::Pagination;
use crate::visibility::ColumnVisibility;
use mindbridge_types::{ColumnDef, ItemsPerPage};
use serde::Serialize;

/// Everything a table instance remembers between UI events.
///
/// Each reducer consumes the state and returns the next one, so any host
/// binding can drive it the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableViewState {
    pub filter_text: String,
    pub pagination: Pagination,
    pub visibility: ColumnVisibility,
}

impl TableViewState {
    pub fn new(columns: &[ColumnDef], items_per_page: ItemsPerPage) -> Self {
        Self {
            filter_text: String::new(),
            pagination: Pagination::new(items_per_page),
            visibility: ColumnVisibility::from_columns(columns),
        }
    }

    pub fn query(&self) -> Query {
        Query::new(&self.filter_text)
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// New filter text always sends the view back to the first page.
    #[must_use]
    pub fn apply_filter(self, filter_text: impl Into<String>) -> Self {
        Self {
            filter_text: filter_text.into(),
            pagination: self.pagination.first(),
            ..self
        }
    }

    #[must_use]
    pub fn set_page(self, page: usize) -> Self {
        Self {
            pagination: self.pagination.with_page(page),
            ..self
        }
    }

    #[must_use]
    pub fn set_items_per_page(self, items_per_page: ItemsPerPage) -> Self {
        Self {
            pagination: self
                .pagination
                .with_items_per_page(items_per_page)
                .first(),
            ..self
        }
    }

    #[must_use]
    pub fn toggle_column(mut self, name: &str) -> Self {
        self.visibility.toggle(name);
        self
    }

    #[must_use]
    pub fn reset_visibility(mut self) -> Self {
        self.visibility.reset_all();
        self
    }
}

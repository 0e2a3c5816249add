use crate::export::ExportTable;
use crate::filter::{ComparatorRegistry, SearchFilter, utc};
use crate::pagination::PageInfo;
use crate::render::{FrameSource, RenderFrame, render_frame};
use crate::state::TableViewState;
use mindbridge_types::{ColumnDef, ConditionalRowStyle, ItemsPerPage, Row, TableData};
use std::cell::OnceCell;

/// One mounted table: the dataset, its filter and the per-instance view state.
///
/// Filtered row positions are computed on first access after any change and
/// cached until the next filter, column or dataset change.
#[derive(Debug)]
pub struct TableView {
    table: TableData,
    filter: SearchFilter,
    state: TableViewState,
    row_styles: Vec<ConditionalRowStyle>,
    loading: bool,
    filtered: OnceCell<Vec<usize>>,
}

impl TableView {
    pub fn new(table: TableData) -> Self {
        Self::with_registry(table, ComparatorRegistry::standard(utc()))
    }

    pub fn with_registry(table: TableData, registry: ComparatorRegistry) -> Self {
        let filter = SearchFilter::new(&table.columns, registry);
        let state = TableViewState::new(&table.columns, ItemsPerPage::default());
        Self {
            table,
            filter,
            state,
            row_styles: Vec::new(),
            loading: false,
            filtered: OnceCell::new(),
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: ItemsPerPage) -> Self {
        self.set_items_per_page(items_per_page);
        self
    }

    pub fn with_row_styles(mut self, row_styles: Vec<ConditionalRowStyle>) -> Self {
        self.row_styles = row_styles;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.table.caption = Some(caption.into());
        self
    }

    pub fn table(&self) -> &TableData {
        &self.table
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn update(&mut self, reducer: impl FnOnce(TableViewState) -> TableViewState) {
        let state = std::mem::take(&mut self.state);
        self.state = reducer(state);
    }

    fn invalidate(&mut self) {
        self.filtered = OnceCell::new();
    }

    /// Search box keystroke. Recomputes lazily and returns to the first page.
    pub fn on_filter(&mut self, filter_text: &str) {
        self.update(|state| state.apply_filter(filter_text));
        self.invalidate();
    }

    /// Moves to `page`, clamped to the pages the filtered set actually has.
    pub fn set_current_page(&mut self, page: usize) {
        let total = self.filtered_len();
        let last = self.state.pagination.total_pages(total).saturating_sub(1);
        if page > last {
            log::warn!(
                "page {} out of range ({} pages); showing page {}",
                page,
                last + 1,
                last
            );
        }
        self.update(|state| state.set_page(page.min(last)));
    }

    pub fn next_page(&mut self) {
        let total = self.filtered_len();
        self.state.pagination = self.state.pagination.next(total);
    }

    pub fn previous_page(&mut self) {
        self.state.pagination = self.state.pagination.previous();
    }

    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.update(|state| state.set_items_per_page(items_per_page));
    }

    /// Returns false when no named column is called `name`.
    pub fn toggle_column(&mut self, name: &str) -> bool {
        if !self.state.visibility.contains(name) {
            log::warn!("no column named '{}' to toggle", name);
            return false;
        }
        self.update(|state| state.toggle_column(name));
        true
    }

    pub fn set_column_hidden(&mut self, name: &str, hidden: bool) -> bool {
        let found = self.state.visibility.set_hidden(name, hidden);
        if !found {
            log::warn!("no column named '{}' to hide", name);
        }
        found
    }

    pub fn show_all_columns(&mut self) {
        self.update(TableViewState::reset_visibility);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// A fresh dataset arrived: rebuild everything derived from it.
    pub fn replace_data(&mut self, table: TableData) {
        self.filter.set_columns(&table.columns);
        self.state.visibility = self.state.visibility.rebuild(&table.columns);
        self.table = table;
        self.invalidate();

        let total = self.filtered_len();
        self.state.pagination = self.state.pagination.clamp(total);
    }

    fn filtered_indices(&self) -> &[usize] {
        self.filtered.get_or_init(|| {
            let indices = self
                .filter
                .filter_indices(&self.table.data, &self.state.filter_text);
            log::debug!(
                "filter {:?} kept {} of {} rows",
                self.state.filter_text,
                indices.len(),
                self.table.data.len()
            );
            indices
        })
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    pub fn filtered_rows(&self) -> Vec<&Row> {
        self.filtered_indices()
            .iter()
            .map(|&index| &self.table.data[index])
            .collect()
    }

    fn current_page_entries(&self) -> Vec<(usize, &Row)> {
        self.state
            .pagination
            .slice(self.filtered_indices())
            .iter()
            .map(|&index| (index, &self.table.data[index]))
            .collect()
    }

    pub fn current_page_rows(&self) -> Vec<&Row> {
        self.current_page_entries()
            .into_iter()
            .map(|(_, row)| row)
            .collect()
    }

    pub fn page_info(&self) -> PageInfo {
        self.state
            .pagination
            .info(self.filtered_len(), self.loading)
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDef> {
        self.state.visibility.visible_columns(&self.table.columns)
    }

    pub fn frame(&self) -> RenderFrame {
        render_frame(FrameSource {
            caption: self.table.caption.as_deref(),
            columns: self.visible_columns(),
            rows: self.current_page_entries(),
            row_styles: &self.row_styles,
            page: self.page_info(),
            loading: self.loading,
        })
    }

    /// All filtered rows (not just the current page) over the visible columns.
    pub fn export(&self) -> ExportTable {
        ExportTable::new(
            self.table.caption.as_deref(),
            &self.visible_columns(),
            &self.filtered_rows(),
        )
    }
}

use mindbridge_types::ItemsPerPage;
use serde::Serialize;
use std::ops::Range;

/// Zero-based page index plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pagination {
    current_page: usize,
    items_per_page: ItemsPerPage,
}

/// Summary of where the current page sits in the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based position of the first row shown; 0 when nothing is shown
    pub first_item: usize,
    pub last_item: usize,
    pub items_per_page: ItemsPerPage,
    pub controls_visible: bool,
}

impl Pagination {
    pub fn new(items_per_page: ItemsPerPage) -> Self {
        Self {
            current_page: 0,
            items_per_page,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: ItemsPerPage) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// `ceil(total / items_per_page)`; a single page when unbounded.
    pub fn total_pages(&self, total_items: usize) -> usize {
        match self.items_per_page.limit() {
            Some(limit) => total_items.div_ceil(limit),
            None => 1,
        }
    }

    /// Index range of the current page. Empty when the page is out of range.
    pub fn page_range(&self, total_items: usize) -> Range<usize> {
        match self.items_per_page.limit() {
            Some(limit) => {
                let start = self.current_page.saturating_mul(limit).min(total_items);
                let end = start.saturating_add(limit).min(total_items);
                start..end
            }
            None if self.current_page == 0 => 0..total_items,
            None => total_items..total_items,
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.page_range(items.len())]
    }

    /// Paging controls are pointless when everything fits on one page.
    pub fn controls_visible(&self, total_items: usize, loading: bool) -> bool {
        if loading {
            return false;
        }
        match self.items_per_page.limit() {
            Some(limit) => limit < total_items,
            None => false,
        }
    }

    fn last_index(&self, total_items: usize) -> usize {
        self.total_pages(total_items).saturating_sub(1)
    }

    /// Pulls the page index back inside `[0, total_pages)`.
    #[must_use]
    pub fn clamp(self, total_items: usize) -> Self {
        let last = self.last_index(total_items);
        self.with_page(self.current_page.min(last))
    }

    #[must_use]
    pub fn next(self, total_items: usize) -> Self {
        let last = self.last_index(total_items);
        self.with_page(self.current_page.saturating_add(1).min(last))
    }

    #[must_use]
    pub fn previous(self) -> Self {
        self.with_page(self.current_page.saturating_sub(1))
    }

    #[must_use]
    pub fn first(self) -> Self {
        self.with_page(0)
    }

    #[must_use]
    pub fn last(self, total_items: usize) -> Self {
        let last = self.last_index(total_items);
        self.with_page(last)
    }

    pub fn info(&self, total_items: usize, loading: bool) -> PageInfo {
        let range = self.page_range(total_items);
        let (first_item, last_item) = if range.is_empty() {
            (0, 0)
        } else {
            (range.start + 1, range.end)
        };

        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages(total_items),
            total_items,
            first_item,
            last_item,
            items_per_page: self.items_per_page,
            controls_visible: self.controls_visible(total_items, loading),
        }
    }
}

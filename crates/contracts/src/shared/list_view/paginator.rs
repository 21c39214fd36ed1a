use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size selector.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Bounds for the "showing X–Y of Z" label (1-based, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

/// 1-based paginator. `page` is always inside `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    page_size: usize,
    page: usize,
}

impl Paginator {
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Self {
        let mut paginator = Self {
            total_items,
            page_size: page_size.max(1),
            page: 1,
        };
        paginator.page = paginator.clamp(page as i64);
        paginator
    }

    /// `max(1, ceil(total_items / page_size))`.
    pub fn total_pages_for(total_items: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 1;
        }
        total_items.div_ceil(page_size).max(1)
    }

    pub fn total_pages(&self) -> usize {
        Self::total_pages_for(self.total_items, self.page_size)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn clamp(&self, page: i64) -> usize {
        page.clamp(1, self.total_pages() as i64) as usize
    }

    /// Jump to `page`, clamped. Returns the resulting page.
    pub fn go_to(&mut self, page: i64) -> usize {
        self.page = self.clamp(page);
        self.page
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.page as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.page as i64 - 1)
    }

    pub fn first(&mut self) -> usize {
        self.go_to(1)
    }

    pub fn last(&mut self) -> usize {
        self.go_to(self.total_pages() as i64)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Recomputes total pages and clamps the current page into range.
    pub fn set_page_size(&mut self, page_size: usize) -> usize {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self.go_to(self.page as i64)
    }

    pub fn set_total_items(&mut self, total_items: usize) -> usize {
        self.total_items = total_items;
        self.go_to(self.page as i64)
    }

    pub fn range(&self) -> ItemRange {
        if self.total_items == 0 {
            return ItemRange {
                start: 0,
                end: 0,
                total: 0,
            };
        }
        ItemRange {
            start: (self.page - 1) * self.page_size + 1,
            end: (self.page * self.page_size).min(self.total_items),
            total: self.total_items,
        }
    }
}

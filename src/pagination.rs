use std::ops::Range;

/// Position within a paged list
///
/// The show list is not paged unless a page size is explicitly requested,
/// so this stays dormant in the default views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based index of the current page
    pub current_page: usize,
    pub total_pages: usize,
    per_page: usize,
    total_items: usize,
}

impl Pagination {
    /// Compute the pagination of `total_items` items
    ///
    /// `requested_page` is 1-based and clamped into the valid range.
    /// A `per_page` of zero is treated as one.
    pub fn new(total_items: usize, per_page: usize, requested_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total_items.div_ceil(per_page).max(1);
        let current_page = requested_page.clamp(1, total_pages);

        Self {
            current_page,
            total_pages,
            per_page,
            total_items,
        }
    }

    /// Index range of the items on the current page
    pub fn range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.total_items);
        start.min(end)..end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether there is more than one page to navigate between
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }
}

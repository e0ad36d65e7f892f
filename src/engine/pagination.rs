//! Fixed-size, 1-indexed pagination.
//!
//! [`paginate`] is a plain slice over its input, so it never copies records. An
//! out-of-range page is not an error: it simply yields an empty slice.

/// Page size of the product table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns `items[(page-1)*page_size .. page*page_size]`, clamped to the input.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(count / page_size)`, which is `0` for an empty input.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// The current-page cursor of one product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A page size of zero is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Moves to page `n`. Returns `false` (and stays put) unless `1 <= n <= total_pages`.
    pub fn change_page(&mut self, n: usize, total_pages: usize) -> bool {
        if n < 1 || n > total_pages {
            return false;
        }
        self.page = n;
        true
    }

    pub fn first(&mut self, total_pages: usize) -> bool {
        self.change_page(1, total_pages)
    }

    pub fn previous(&mut self, total_pages: usize) -> bool {
        self.change_page(self.page.saturating_sub(1), total_pages)
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        self.change_page(self.page + 1, total_pages)
    }

    pub fn last(&mut self, total_pages: usize) -> bool {
        self.change_page(total_pages, total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total_pages: usize) -> bool {
        self.page < total_pages
    }

    /// Pulls the cursor back inside `1..=max(total_pages, 1)` after the list shrank.
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page_size, self.page)
    }
}

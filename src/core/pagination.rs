/// Default number of profiles per page in list views
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page arithmetic for a result set of known size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total_items: usize,
    pub page_size: usize,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// `page` below 1 is treated as 1 and a zero page size as 1.
    /// Pages past the end are kept as requested and select nothing.
    pub fn new(total_items: usize, page: u32, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);

        Self {
            total_items,
            page_size,
            current_page: page.max(1),
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        }
    }

    /// Index range of the current page within the full result set
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page as usize - 1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }

    pub fn is_out_of_range(&self) -> bool {
        self.current_page > self.total_pages
    }
}

use serde::{Deserialize, Serialize};

/// One page of an ordered result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number that was requested
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page >= 1 && self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.page <= self.total_pages
    }
}

/// Slice `items` into pages of `page_size` and return page `page` (1-indexed).
///
/// Page 0, a page past the end, or a zero page size yield no items.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_pages = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };

    let slice = if page == 0 || page > total_pages {
        &[][..]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        page,
        total_pages,
        total_items: items.len(),
    }
}

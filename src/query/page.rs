//! Page extraction.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Zero-based page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Index of the first element on this page.
    pub fn skip(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Elements `[page_number * page_size, min(that + page_size, len))` of `items`.
///
/// A page past the end, or a page size of zero, yields an empty page.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Vec<T> {
    PageRequest::new(page_number, page_size).slice(items).to_vec()
}

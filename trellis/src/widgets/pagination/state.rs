//! Numeric pagination state.

use thiserror::Error;

use super::config::DEFAULT_PAGE_SIZE;
use super::item::{PageItem, build_page_items};

/// Errors raised for invalid pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A page must hold at least one item.
    #[error("Page size must be at least 1")]
    ZeroPageSize,
}

/// Number of pages needed for `total` items, never less than one.
///
/// Callers guarantee `page_size > 0`; [`PaginationState`] enforces it.
fn last_index(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// Total item count, page size and 1-based current page.
///
/// The page size is always non-zero. The page index is not clamped here;
/// see [`PaginationState::validate_page_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationState {
    total: usize,
    page_size: usize,
    page_index: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            total: 0,
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 1,
        }
    }
}

impl PaginationState {
    /// Create a state, rejecting a zero page size.
    pub fn new(total: usize, page_size: usize, page_index: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        Ok(Self {
            total,
            page_size,
            page_index,
        })
    }

    /// Total number of items.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Copy with a different total.
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    /// Copy with a different page size.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Copy with a different page index.
    pub fn with_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    /// Number of pages; an empty collection still has one (empty) page.
    pub fn last_index(&self) -> usize {
        last_index(self.total, self.page_size)
    }

    /// Clamp a requested page into `[1, last_index]`.
    pub fn validate_page_index(&self, requested: i64) -> usize {
        let last = self.last_index();
        if requested < 1 {
            1
        } else {
            usize::try_from(requested).map_or(last, |index| index.min(last))
        }
    }

    /// Inclusive 1-based range of items shown on the current page.
    ///
    /// `(0, 0)` when there are no items.
    pub fn ranges(&self) -> (usize, usize) {
        if self.total == 0 {
            return (0, 0);
        }
        let start = self
            .page_index
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        let end = self.page_index.saturating_mul(self.page_size).min(self.total);
        (start, end)
    }

    /// Page controls for the current state.
    pub fn page_items(&self) -> Vec<PageItem> {
        build_page_items(self.page_index, self.last_index())
    }
}

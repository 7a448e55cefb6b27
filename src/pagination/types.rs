//! Pagination types
//!
//! Defines the page and aggregate values passed through the paginator.

use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};

/// One fetch result: a batch of items plus an optional continuation cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in this page, in the order the remote returned them
    pub items: Vec<T>,
    /// Cursor for the next page. Opaque; `None` means no more pages.
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Create a page. An empty cursor is treated as absent.
    pub fn new(items: Vec<T>, next: Option<String>) -> Self {
        Self {
            items,
            next: next.none_if_empty(),
        }
    }

    /// Cursor for the next page, if any
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Check if this is the final page
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available at this cursor
    Continue { cursor: String },
    /// No more pages
    Done,
}

impl NextPage {
    /// Decide the next step from a page's cursor
    pub fn from_cursor(cursor: Option<&str>) -> Self {
        match cursor {
            Some(c) if !c.is_empty() => Self::Continue {
                cursor: c.to_string(),
            },
            _ => Self::Done,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Cursor for the next request
    pub cursor: Option<String>,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create state positioned at a starting cursor
    pub fn new(cursor: Option<String>) -> Self {
        Self {
            cursor: cursor.none_if_empty(),
            ..Default::default()
        }
    }

    /// Record a fetched page and advance to its cursor
    pub fn record_page(&mut self, next: &NextPage) {
        self.pages_fetched += 1;
        match next {
            NextPage::Continue { cursor } => self.cursor = Some(cursor.clone()),
            NextPage::Done => self.mark_done(),
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
        self.cursor = None;
    }
}

/// Items accumulated across pages, in fetch order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate<T> {
    /// All items, page by page
    pub items: Vec<T>,
    /// Number of pages fetched
    pub pages_fetched: u32,
    /// Cursor returned by the last page. `Some` only when the page ceiling
    /// stopped the aggregation while the remote still had data.
    pub next_cursor: Option<String>,
}

impl<T> Default for Aggregate<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pages_fetched: 0,
            next_cursor: None,
        }
    }
}

impl<T> Aggregate<T> {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page
    pub fn push_page(&mut self, page: Page<T>) {
        self.pages_fetched += 1;
        self.next_cursor = page.next.none_if_empty();
        self.items.extend(page.items);
    }

    /// More data was available when the page ceiling was reached
    pub fn is_truncated(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// The remote reported no further pages
    pub fn is_exhausted(&self) -> bool {
        self.next_cursor.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for Aggregate<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

//! Pagination module
//!
//! Cursor-based pagination over a single-page fetch function.
//!
//! # Overview
//!
//! The remote returns a batch of items and an opaque `next` cursor. The
//! [`CursorPaginator`] calls the fetch function with the current cursor,
//! accumulates items into an [`Aggregate`], and stops when a page comes back
//! without a cursor or when `max_pages` pages have been fetched. Fetches are
//! strictly sequential with a fixed pause between them.

mod paginator;
mod types;

pub use paginator::CursorPaginator;
pub use types::{Aggregate, NextPage, Page, PaginationState};

#[cfg(test)]
mod tests;

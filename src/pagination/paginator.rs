//! Cursor paginator
//!
//! Drives a single-page fetch function, following the cursor each page
//! returns until the remote runs out of pages or the page ceiling is hit.

use super::types::{Aggregate, NextPage, Page, PaginationState};
use crate::error::Result;
use futures::stream::{self, Stream, StreamExt};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Sequential cursor paginator with a fixed pause between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPaginator {
    max_pages: u32,
    delay: Duration,
}

impl CursorPaginator {
    /// Pause between pages unless configured otherwise
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Create a paginator that fetches at most `max_pages` pages (at least 1)
    pub fn new(max_pages: u32) -> Self {
        Self {
            max_pages: max_pages.max(1),
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Set the pause between consecutive page fetches
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stream pages one at a time.
    ///
    /// `fetch` receives the cursor for the page to load (`start` for the
    /// first). The stream ends after a page without a cursor, after
    /// `max_pages` pages, or right after yielding the first error.
    pub fn pages<T, F, Fut>(
        &self,
        start: Option<String>,
        fetch: F,
    ) -> impl Stream<Item = Result<Page<T>>>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let max_pages = self.max_pages;
        let delay = self.delay;

        stream::unfold(
            Some((PaginationState::new(start), fetch)),
            move |current| async move {
                let (mut state, mut fetch) = current?;
                if state.done || state.pages_fetched >= max_pages {
                    return None;
                }

                if state.pages_fetched > 0 && !delay.is_zero() {
                    debug!(delay_ms = delay.as_millis() as u64, "Sleeping to avoid rate limiting");
                    tokio::time::sleep(delay).await;
                }

                debug!(page = state.pages_fetched + 1, "Fetching page");
                match fetch(state.cursor.clone()).await {
                    Ok(page) => {
                        let next = NextPage::from_cursor(page.next_cursor());
                        debug!(items = page.len(), "Fetched page");
                        if next.is_done() {
                            debug!("No more pages to fetch");
                        }
                        state.record_page(&next);
                        Some((Ok(page), Some((state, fetch))))
                    }
                    Err(e) => Some((Err(e), None)),
                }
            },
        )
    }

    /// Fetch every page and concatenate the items in fetch order.
    ///
    /// A failed fetch aborts the whole aggregation; items from earlier
    /// pages are dropped.
    pub async fn collect<T, F, Fut>(&self, start: Option<String>, fetch: F) -> Result<Aggregate<T>>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let pages = self.pages(start, fetch);
        futures::pin_mut!(pages);

        let mut aggregate = Aggregate::new();
        while let Some(page) = pages.next().await {
            aggregate.push_page(page?);
        }
        Ok(aggregate)
    }
}

impl Default for CursorPaginator {
    fn default() -> Self {
        Self::new(crate::params::DEFAULT_MAX_PAGES)
    }
}

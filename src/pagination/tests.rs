//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use futures::future;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn paginator(max_pages: u32) -> CursorPaginator {
    CursorPaginator::new(max_pages).with_delay(Duration::ZERO)
}

/// Build a page of `count` numbered items starting at `first`
fn numbered(first: u32, count: u32, next: Option<&str>) -> Page<u32> {
    Page::new((first..first + count).collect(), next.map(String::from))
}

// ============================================================================
// Page / NextPage / State Tests
// ============================================================================

#[test]
fn test_page_empty_cursor_is_last() {
    let page = Page::new(vec![1, 2], Some(String::new()));
    assert!(page.is_last());
    assert_eq!(page.next_cursor(), None);
    assert_eq!(page.len(), 2);
}

#[test]
fn test_next_page_from_cursor() {
    assert_eq!(
        NextPage::from_cursor(Some("abc")),
        NextPage::Continue {
            cursor: "abc".to_string()
        }
    );
    assert!(NextPage::from_cursor(Some("")).is_done());
    assert!(NextPage::from_cursor(None).is_done());
}

#[test]
fn test_pagination_state_record_page() {
    let mut state = PaginationState::new(Some("start".to_string()));
    assert_eq!(state.cursor.as_deref(), Some("start"));

    state.record_page(&NextPage::from_cursor(Some("c2")));
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.cursor.as_deref(), Some("c2"));
    assert!(!state.done);

    state.record_page(&NextPage::Done);
    assert_eq!(state.pages_fetched, 2);
    assert!(state.done);
    assert!(state.cursor.is_none());
}

#[test]
fn test_paginator_clamps_zero_max_pages() {
    assert_eq!(CursorPaginator::new(0).max_pages(), 1);
    assert_eq!(CursorPaginator::new(4).delay(), CursorPaginator::DEFAULT_DELAY);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[tokio::test]
async fn test_single_page_without_cursor() {
    let mut calls = 0;
    let result = paginator(10)
        .collect(None, |_| {
            calls += 1;
            future::ready(Ok(numbered(0, 3, None)))
        })
        .await
        .unwrap();

    assert_eq!(calls, 1);
    assert_eq!(result.items, vec![0, 1, 2]);
    assert_eq!(result.pages_fetched, 1);
    assert!(result.is_exhausted());
    assert!(!result.is_truncated());
}

#[tokio::test]
async fn test_follows_cursor_until_exhausted() {
    let mut seen = Vec::new();
    let result = paginator(10)
        .collect(Some("c0".to_string()), |cursor: Option<String>| {
            seen.push(cursor.clone());
            let page = match cursor.as_deref() {
                Some("c0") => numbered(0, 2, Some("c1")),
                Some("c1") => numbered(2, 2, Some("c2")),
                Some("c2") => numbered(4, 1, None),
                other => panic!("unexpected cursor {other:?}"),
            };
            future::ready(Ok(page))
        })
        .await
        .unwrap();

    assert_eq!(
        seen,
        vec![
            Some("c0".to_string()),
            Some("c1".to_string()),
            Some("c2".to_string())
        ]
    );
    assert_eq!(result.items, vec![0, 1, 2, 3, 4]);
    assert_eq!(result.pages_fetched, 3);
    assert!(result.is_exhausted());
}

#[tokio::test]
async fn test_respects_max_pages() {
    let mut calls = 0u32;
    let result = paginator(2)
        .collect(None, |_| {
            calls += 1;
            let cursor = format!("c{calls}");
            future::ready(Ok(numbered(calls * 10, 2, Some(cursor.as_str()))))
        })
        .await
        .unwrap();

    assert_eq!(calls, 2);
    assert_eq!(result.items, vec![10, 11, 20, 21]);
    assert_eq!(result.pages_fetched, 2);
    assert!(result.is_truncated());
    assert_eq!(result.next_cursor.as_deref(), Some("c2"));
}

#[tokio::test]
async fn test_max_pages_reached_on_final_page_is_exhausted() {
    let mut calls = 0u32;
    let result = paginator(2)
        .collect(None, |_| {
            calls += 1;
            let next = (calls == 1).then_some("more");
            future::ready(Ok(numbered(calls, 1, next)))
        })
        .await
        .unwrap();

    assert_eq!(calls, 2);
    assert!(result.is_exhausted());
}

#[tokio::test]
async fn test_error_on_second_page_discards_items() {
    let mut calls = 0;
    let result: Result<Aggregate<u32>> = paginator(5)
        .collect(None, |_| {
            calls += 1;
            if calls == 1 {
                future::ready(Ok(numbered(0, 3, Some("c1"))))
            } else {
                future::ready(Err(Error::http_status(500, "boom")))
            }
        })
        .await;

    assert_eq!(calls, 2);
    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_error_on_first_page() {
    let result: Result<Aggregate<u32>> = paginator(5)
        .collect(None, |_| future::ready(Err(Error::http_status(401, "bad key"))))
        .await;
    assert!(tokio_test::assert_err!(result).is_remote());
}

#[tokio::test]
async fn test_empty_page_with_cursor_continues() {
    let mut calls = 0u32;
    let result = paginator(3)
        .collect(None, |_| {
            calls += 1;
            let page = match calls {
                1 => Page::new(Vec::new(), Some("c1".to_string())),
                _ => numbered(7, 1, None),
            };
            future::ready(Ok(page))
        })
        .await
        .unwrap();

    assert_eq!(result.items, vec![7]);
    assert_eq!(result.pages_fetched, 2);
}

#[tokio::test]
async fn test_delay_between_pages_only() {
    let delay = Duration::from_millis(30);
    let mut calls = 0u32;
    let started = Instant::now();
    let result = CursorPaginator::new(3)
        .with_delay(delay)
        .collect(None, |_| {
            calls += 1;
            future::ready(Ok(numbered(calls, 1, Some("more"))))
        })
        .await
        .unwrap();

    assert_eq!(result.pages_fetched, 3);
    // Two pauses: before page 2 and before page 3.
    assert!(started.elapsed() >= delay * 2);
}

// ============================================================================
// Stream Tests
// ============================================================================

#[tokio::test]
async fn test_pages_stream_yields_each_page() {
    let mut calls = 0u32;
    let pages: Vec<Page<u32>> = paginator(10)
        .pages(None, |_| {
            calls += 1;
            let next = (calls < 3).then(|| format!("c{calls}"));
            future::ready(Ok(numbered(calls, 1, next.as_deref())))
        })
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0].next_cursor(), Some("c1"));
    assert!(pages[2].is_last());
}

#[tokio::test]
async fn test_pages_stream_stops_after_error() {
    use futures::StreamExt;

    let mut calls = 0u32;
    let results: Vec<Result<Page<u32>>> = paginator(10)
        .pages(None, |_| {
            calls += 1;
            future::ready(Err(Error::http_status(503, "unavailable")))
        })
        .collect()
        .await;

    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
    assert_eq!(calls, 1);
}

//! Request parameter validation
//!
//! Parameters are built through builders that accept raw user input and
//! validate everything in `build()`. A built params value is always valid:
//! the only change allowed afterwards is advancing the pagination cursor.
//!
//! # Limits
//!
//! | Resource    | `limit`  | `max_pages` |
//! |-------------|----------|-------------|
//! | collections | 1..=100  | >= 1        |
//! | events      | 1..=50   | >= 1        |

mod collections;
mod events;

pub use collections::{CollectionsParams, CollectionsParamsBuilder};
pub use events::{EventsParams, EventsParamsBuilder};

use crate::error::{Error, Result};

/// Default page size for both resources
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest page size the collections endpoint accepts
pub const COLLECTIONS_MAX_LIMIT: u32 = 100;

/// Largest page size the events endpoint accepts
pub const EVENTS_MAX_LIMIT: u32 = 50;

/// Default ceiling on pages fetched by one aggregation
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Check `1 <= limit <= max`
fn check_limit(limit: u32, max: u32) -> Result<u32> {
    if (1..=max).contains(&limit) {
        Ok(limit)
    } else {
        Err(Error::validation(
            "limit",
            format!("must be between 1 and {max}, got {limit}"),
        ))
    }
}

fn check_max_pages(max_pages: u32) -> Result<u32> {
    if max_pages >= 1 {
        Ok(max_pages)
    } else {
        Err(Error::validation(
            "max_pages",
            format!("must be at least 1, got {max_pages}"),
        ))
    }
}

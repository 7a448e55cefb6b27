//! # opensea-client
//!
//! Typed, paginated client for the OpenSea collections and collection events
//! endpoints.
//!
//! ## Features
//!
//! - **Validated parameters**: chains, event types, page sizes and page
//!   ceilings are checked before any request is sent
//! - **Cursor pagination**: follow the `next` cursor across pages with a
//!   fixed pause between requests
//! - **Explicit errors**: configuration, validation and remote failures are
//!   distinct [`Error`] variants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opensea_client::{CollectionsParams, OpenSeaClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads OPENSEA_API_KEY (and optionally OPENSEA_BASE_URL)
//!     let client = OpenSeaClient::from_env()?;
//!
//!     let params = CollectionsParams::builder()
//!         .chain("polygon")
//!         .limit(100)
//!         .max_pages(3)
//!         .build()?;
//!
//!     let collections = client.get_all_collections(&params).await?;
//!     println!("{} collections", collections.len());
//!     if collections.is_truncated() {
//!         println!("more available after {:?}", collections.next_cursor);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌─────────────────┐
//! │   params     │───▶│  OpenSeaClient │───▶│ CursorPaginator │
//! │ (validation) │    │ (single page)  │◀───│  (aggregation)  │
//! └──────────────┘    └───────┬────────┘    └─────────────────┘
//!                             │
//!                       ┌─────┴─────┐
//!                       │   http    │
//!                       └───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request parameter validation
pub mod params;

/// HTTP client
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// OpenSea API client
pub mod client;

/// Logging setup
pub mod logging;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::OpenSeaClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{Aggregate, CursorPaginator, Page};
pub use params::{CollectionsParams, EventsParams};
pub use types::{Chain, EventType, JsonValue, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

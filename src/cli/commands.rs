//! CLI commands and argument parsing

use crate::params::{DEFAULT_LIMIT, DEFAULT_MAX_PAGES};
use crate::types::Timestamp;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch collections and collection events from the OpenSea API
#[derive(Parser, Debug)]
#[command(name = "opensea-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Write JSON results to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Also write logs to a timestamped file in this directory
    #[arg(long, global = true, env = "OPENSEA_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List collections
    Collections {
        /// Blockchain to filter by
        #[arg(long, default_value = "ethereum")]
        chain: String,

        /// Collections per page (1-100)
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Include hidden collections
        #[arg(long)]
        include_hidden: bool,

        /// Sort order (e.g. created_date)
        #[arg(long)]
        order_by: Option<String>,

        /// Start from this cursor
        #[arg(long)]
        cursor: Option<String>,

        /// Maximum number of pages to fetch
        #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: u32,

        /// Fetch a single page and print it with its cursor
        #[arg(long)]
        single_page: bool,
    },

    /// List events for a collection
    Events {
        /// Collection slug (e.g. doodles-official)
        slug: String,

        /// Event type filter, repeatable (default: sale)
        #[arg(long = "event-type", value_name = "TYPE")]
        event_types: Vec<String>,

        /// Only events after this time (unix seconds or RFC 3339)
        #[arg(long)]
        after: Option<Timestamp>,

        /// Only events before this time (unix seconds or RFC 3339)
        #[arg(long)]
        before: Option<Timestamp>,

        /// Events per page (1-50)
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Start from this cursor
        #[arg(long)]
        cursor: Option<String>,

        /// Maximum number of pages to fetch
        #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: u32,

        /// Fetch a single page and print it with its cursor
        #[arg(long)]
        single_page: bool,
    },
}

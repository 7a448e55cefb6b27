//! Common types used throughout the OpenSea client
//!
//! This module contains the enumerated request values accepted by the API,
//! timestamp handling and small utility traits.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Ordered list of query parameters. Keys may repeat (e.g. `event_type`).
pub type QueryPairs = Vec<(String, String)>;

// ============================================================================
// Chain
// ============================================================================

/// Blockchain a collection lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    #[default]
    Ethereum,
    Polygon,
    Klaytn,
    Solana,
    Arbitrum,
    Optimism,
    Avalanche,
}

impl Chain {
    /// Every chain the API accepts
    pub const ALL: [Chain; 7] = [
        Chain::Ethereum,
        Chain::Polygon,
        Chain::Klaytn,
        Chain::Solana,
        Chain::Arbitrum,
        Chain::Optimism,
        Chain::Avalanche,
    ];

    /// Wire name of the chain
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::Polygon => "polygon",
            Chain::Klaytn => "klaytn",
            Chain::Solana => "solana",
            Chain::Arbitrum => "arbitrum",
            Chain::Optimism => "optimism",
            Chain::Avalanche => "avalanche",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = Error;

    /// Case-insensitive, with no whitespace trimming. The result is always
    /// the lowercase wire name.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Chain::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                Error::validation(
                    "chain",
                    format!("invalid chain '{s}', must be one of: {}", join(&Chain::ALL)),
                )
            })
    }
}

// ============================================================================
// Event Type
// ============================================================================

/// Kind of collection event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Sale,
    Transfer,
    Mint,
    Burn,
    Approve,
    BidEntered,
    BidWithdrawn,
    OfferEntered,
    OfferWithdrawn,
    Cancel,
}

impl EventType {
    /// Every event type the API accepts
    pub const ALL: [EventType; 10] = [
        EventType::Sale,
        EventType::Transfer,
        EventType::Mint,
        EventType::Burn,
        EventType::Approve,
        EventType::BidEntered,
        EventType::BidWithdrawn,
        EventType::OfferEntered,
        EventType::OfferWithdrawn,
        EventType::Cancel,
    ];

    /// Wire name of the event type
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Sale => "sale",
            EventType::Transfer => "transfer",
            EventType::Mint => "mint",
            EventType::Burn => "burn",
            EventType::Approve => "approve",
            EventType::BidEntered => "bid_entered",
            EventType::BidWithdrawn => "bid_withdrawn",
            EventType::OfferEntered => "offer_entered",
            EventType::OfferWithdrawn => "offer_withdrawn",
            EventType::Cancel => "cancel",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::validation(
                    "event_type",
                    format!(
                        "invalid event type '{s}', must be one of: {}",
                        join(&EventType::ALL)
                    ),
                )
            })
    }
}

// ============================================================================
// Timestamp
// ============================================================================

/// Time bound for event queries, sent to the API as unix seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Unix timestamp (seconds)
    Unix(i64),
    /// UTC datetime
    DateTime(DateTime<Utc>),
}

impl Timestamp {
    /// Unix seconds for this timestamp
    pub fn unix_seconds(&self) -> i64 {
        match self {
            Timestamp::Unix(secs) => *secs,
            Timestamp::DateTime(dt) => dt.timestamp(),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Unix(secs)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::DateTime(dt)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    /// Accepts unix seconds or an RFC 3339 datetime
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(secs) = s.parse::<i64>() {
            return Ok(Timestamp::Unix(secs));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Timestamp::DateTime(dt.with_timezone(&Utc)))
            .map_err(|e| {
                Error::validation(
                    "timestamp",
                    format!("'{s}' is neither unix seconds nor RFC 3339: {e}"),
                )
            })
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//! Parameters for the collection events endpoint

use super::{check_limit, check_max_pages, DEFAULT_LIMIT, DEFAULT_MAX_PAGES, EVENTS_MAX_LIMIT};
use crate::error::{Error, Result};
use crate::types::{EventType, OptionStringExt, QueryPairs, Timestamp};

/// Validated parameters for `GET /events/collection/{slug}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsParams {
    collection_slug: String,
    event_types: Vec<EventType>,
    after: Option<Timestamp>,
    before: Option<Timestamp>,
    limit: u32,
    cursor: Option<String>,
    max_pages: u32,
}

impl EventsParams {
    /// Create a builder for events of the given collection
    pub fn builder(collection_slug: impl Into<String>) -> EventsParamsBuilder {
        EventsParamsBuilder::new(collection_slug)
    }

    pub fn collection_slug(&self) -> &str {
        &self.collection_slug
    }

    pub fn event_types(&self) -> &[EventType] {
        &self.event_types
    }

    pub fn after(&self) -> Option<Timestamp> {
        self.after
    }

    pub fn before(&self) -> Option<Timestamp> {
        self.before
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    /// Same parameters, positioned at another page
    #[must_use]
    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor.none_if_empty();
        self
    }

    /// Path segments of the events resource, relative to the API base URL.
    /// The slug is a single segment and is never split on `/`.
    pub fn path_segments(&self) -> [&str; 3] {
        ["events", "collection", &self.collection_slug]
    }

    /// Query string sent to the API. `event_type` repeats once per entry
    /// and time bounds are sent as unix seconds.
    pub fn to_query(&self) -> QueryPairs {
        let mut query: QueryPairs = self
            .event_types
            .iter()
            .map(|t| ("event_type".to_string(), t.to_string()))
            .collect();
        query.push(("limit".to_string(), self.limit.to_string()));
        if let Some(after) = self.after {
            query.push(("after".to_string(), after.unix_seconds().to_string()));
        }
        if let Some(before) = self.before {
            query.push(("before".to_string(), before.unix_seconds().to_string()));
        }
        if let Some(cursor) = &self.cursor {
            query.push(("next".to_string(), cursor.clone()));
        }
        query
    }
}

/// Builder for [`EventsParams`]; validation happens in [`build`](Self::build)
#[derive(Debug, Clone)]
pub struct EventsParamsBuilder {
    collection_slug: String,
    event_types: Option<Vec<String>>,
    after: Option<Timestamp>,
    before: Option<Timestamp>,
    limit: Option<u32>,
    cursor: Option<String>,
    max_pages: Option<u32>,
}

impl EventsParamsBuilder {
    /// Create a builder for events of the given collection
    pub fn new(collection_slug: impl Into<String>) -> Self {
        Self {
            collection_slug: collection_slug.into(),
            event_types: None,
            after: None,
            before: None,
            limit: None,
            cursor: None,
            max_pages: None,
        }
    }

    /// Replace the event type filter. Defaults to `["sale"]`.
    pub fn event_types<I, S>(mut self, event_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_types = Some(event_types.into_iter().map(Into::into).collect());
        self
    }

    /// Only events after this time
    pub fn after(mut self, after: impl Into<Timestamp>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Only events before this time
    pub fn before(mut self, before: impl Into<Timestamp>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start from a cursor returned by an earlier call
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the page ceiling for aggregation
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Validate and build the params
    pub fn build(self) -> Result<EventsParams> {
        if self.collection_slug.trim().is_empty() {
            return Err(Error::validation(
                "collection_slug",
                "must not be empty",
            ));
        }
        if matches!(self.collection_slug.as_str(), "." | "..") {
            return Err(Error::validation(
                "collection_slug",
                format!("'{}' is not a collection slug", self.collection_slug),
            ));
        }

        let event_types = match self.event_types {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<EventType>())
                .collect::<Result<Vec<_>>>()?,
            None => vec![EventType::Sale],
        };

        let limit = check_limit(self.limit.unwrap_or(DEFAULT_LIMIT), EVENTS_MAX_LIMIT)?;
        let max_pages = check_max_pages(self.max_pages.unwrap_or(DEFAULT_MAX_PAGES))?;

        Ok(EventsParams {
            collection_slug: self.collection_slug,
            event_types,
            after: self.after,
            before: self.before,
            limit,
            cursor: self.cursor.none_if_empty(),
            max_pages,
        })
    }
}

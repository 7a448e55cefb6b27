//! Parameters for the collections endpoint

use super::{check_limit, check_max_pages, COLLECTIONS_MAX_LIMIT, DEFAULT_LIMIT, DEFAULT_MAX_PAGES};
use crate::error::Result;
use crate::types::{Chain, OptionStringExt, QueryPairs};

/// Validated parameters for `GET /collections`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionsParams {
    chain: Chain,
    limit: u32,
    include_hidden: bool,
    cursor: Option<String>,
    order_by: Option<String>,
    max_pages: u32,
}

impl Default for CollectionsParams {
    fn default() -> Self {
        Self {
            chain: Chain::default(),
            limit: DEFAULT_LIMIT,
            include_hidden: false,
            cursor: None,
            order_by: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl CollectionsParams {
    /// Create a new params builder
    pub fn builder() -> CollectionsParamsBuilder {
        CollectionsParamsBuilder::default()
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
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

    /// Query string sent to the API. The cursor travels as `next`.
    pub fn to_query(&self) -> QueryPairs {
        let mut query = vec![
            ("chain".to_string(), self.chain.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("include_hidden".to_string(), self.include_hidden.to_string()),
        ];
        if let Some(cursor) = &self.cursor {
            query.push(("next".to_string(), cursor.clone()));
        }
        if let Some(order_by) = &self.order_by {
            query.push(("order_by".to_string(), order_by.clone()));
        }
        query
    }
}

/// Builder for [`CollectionsParams`]; validation happens in [`build`](Self::build)
#[derive(Debug, Clone, Default)]
pub struct CollectionsParamsBuilder {
    chain: Option<String>,
    limit: Option<u32>,
    include_hidden: bool,
    cursor: Option<String>,
    order_by: Option<String>,
    max_pages: Option<u32>,
}

impl CollectionsParamsBuilder {
    /// Set the chain by name (case-insensitive)
    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Include hidden collections
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Start from a cursor returned by an earlier call
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the sort order (e.g. `created_date`)
    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    /// Set the page ceiling for aggregation
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Validate and build the params
    pub fn build(self) -> Result<CollectionsParams> {
        let chain = match self.chain {
            Some(name) => name.parse()?,
            None => Chain::default(),
        };
        let limit = check_limit(self.limit.unwrap_or(DEFAULT_LIMIT), COLLECTIONS_MAX_LIMIT)?;
        let max_pages = check_max_pages(self.max_pages.unwrap_or(DEFAULT_MAX_PAGES))?;

        Ok(CollectionsParams {
            chain,
            limit,
            include_hidden: self.include_hidden,
            cursor: self.cursor.none_if_empty(),
            order_by: self.order_by.none_if_empty(),
            max_pages,
        })
    }
}

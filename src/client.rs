//! OpenSea API client
//!
//! [`OpenSeaClient`] is constructed explicitly from a [`ClientConfig`] and
//! owned by the caller. Each resource has a single-page call and an
//! aggregating call that follows the `next` cursor.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{Aggregate, CursorPaginator, Page};
use crate::params::{CollectionsParams, EventsParams};
use crate::types::JsonValue;
use serde::Deserialize;
use tracing::{debug, error, info};

/// Path of the collections resource
const COLLECTIONS_PATH: &str = "collections";

/// Response body of `GET /collections`
#[derive(Debug, Deserialize)]
struct CollectionsResponse {
    #[serde(default)]
    collections: Vec<JsonValue>,
    #[serde(default)]
    next: Option<String>,
}

/// Response body of `GET /events/collection/{slug}`
#[derive(Debug, Deserialize)]
struct EventsResponse {
    #[serde(default)]
    asset_events: Vec<JsonValue>,
    #[serde(default)]
    next: Option<String>,
}

/// Client for the collections and collection events endpoints
#[derive(Debug, Clone)]
pub struct OpenSeaClient {
    http: HttpClient,
    page_delay: std::time::Duration,
}

impl OpenSeaClient {
    /// Create a client from validated configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_config = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .header("accept", "application/json")
            .header("x-api-key", config.api_key.clone())
            .build();

        let http = HttpClient::with_config(http_config)?;
        debug!("OpenSeaClient initialized for {}", config.base_url);

        Ok(Self {
            http,
            page_delay: config.page_delay,
        })
    }

    /// Create a client from environment variables (see [`ClientConfig::from_env`])
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Paginator configured for this client
    fn paginator(&self, max_pages: u32) -> CursorPaginator {
        CursorPaginator::new(max_pages).with_delay(self.page_delay)
    }

    /// Fetch one page of collections
    pub async fn get_collections(&self, params: &CollectionsParams) -> Result<Page<JsonValue>> {
        let query = params.to_query();
        info!("Fetching collections with params: {:?}", query);

        let response: CollectionsResponse = self
            .http
            .get_json_with_config(COLLECTIONS_PATH, RequestConfig::new().query_pairs(query))
            .await
            .inspect_err(|e| error!("Error fetching collections: {}", e))?;

        debug!(
            "Successfully fetched collections. Found {} collections",
            response.collections.len()
        );
        Ok(Page::new(response.collections, response.next))
    }

    /// Fetch collections across pages, following the cursor up to
    /// `params.max_pages()` pages
    pub async fn get_all_collections(
        &self,
        params: &CollectionsParams,
    ) -> Result<Aggregate<JsonValue>> {
        info!(
            "Starting pagination to fetch all collections (max {} pages)",
            params.max_pages()
        );

        let start = params.cursor().map(String::from);
        let aggregate = self
            .paginator(params.max_pages())
            .collect(start, |cursor| {
                let page_params = params.clone().with_cursor(cursor);
                async move { self.get_collections(&page_params).await }
            })
            .await?;

        info!(
            "Fetched a total of {} collections from {} pages",
            aggregate.len(),
            aggregate.pages_fetched
        );
        Ok(aggregate)
    }

    /// Fetch one page of events for a collection
    pub async fn get_collection_events(&self, params: &EventsParams) -> Result<Page<JsonValue>> {
        let query = params.to_query();
        info!(
            "Fetching events for collection '{}' with params: {:?}",
            params.collection_slug(),
            query
        );

        let url = self.http.segments_url(params.path_segments())?;
        let response: EventsResponse = self
            .http
            .get_json_with_config(&url, RequestConfig::new().query_pairs(query))
            .await
            .inspect_err(|e| error!("Error fetching events: {}", e))?;

        debug!(
            "Successfully fetched events. Found {} events",
            response.asset_events.len()
        );
        Ok(Page::new(response.asset_events, response.next))
    }

    /// Fetch a collection's events across pages, following the cursor up to
    /// `params.max_pages()` pages
    pub async fn get_all_collection_events(
        &self,
        params: &EventsParams,
    ) -> Result<Aggregate<JsonValue>> {
        info!(
            "Starting pagination to fetch all events for collection '{}' (max {} pages)",
            params.collection_slug(),
            params.max_pages()
        );

        let start = params.cursor().map(String::from);
        let aggregate = self
            .paginator(params.max_pages())
            .collect(start, |cursor| {
                let page_params = params.clone().with_cursor(cursor);
                async move { self.get_collection_events(&page_params).await }
            })
            .await?;

        info!(
            "Fetched a total of {} events from {} pages",
            aggregate.len(),
            aggregate.pages_fetched
        );
        Ok(aggregate)
    }
}

//! `CineworldClient` - Cineworld quickbook API client implementation.

use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::error::{CineworldError, Result};

use super::api::LocalCineworldApi;
use super::params::{CinemaFilter, DateFilter, FilmFilter, PerformanceQuery, QueryMap};
use super::types::{
    CategoriesResponse, Category, Cinema, CinemasResponse, DatesResponse, Distributor,
    DistributorsResponse, Event, EventsResponse, Film, FilmsResponse, Performance,
    PerformancesResponse,
};

/// Default base URL for the quickbook API.
const DEFAULT_BASE_URL: &str = "http://www.cineworld.com/api/";

/// Cineworld quickbook API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CineworldClient {
    /// HTTP client (reqwest; gzip/deflate enabled unless one was injected).
    http_client: Client,
    /// Base URL.
    base_url: Url,
    /// API key sent with every request.
    api_key: String,
}

/// Builder for `CineworldClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct CineworldClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    http_client: Option<Client>,
}

impl CineworldClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            http_client: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key. May also be set after construction via
    /// [`CineworldClient::set_api_key`].
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Supplies an externally configured transport handle. When omitted,
    /// [`build`](Self::build) creates a client with gzip and deflate
    /// decompression enabled.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - the base URL fails to parse;
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<CineworldClient> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().gzip(true).deflate(true).build()?,
        };

        Ok(CineworldClient {
            http_client,
            base_url,
            api_key: self.api_key.unwrap_or_default(),
        })
    }
}

impl CineworldClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> CineworldClientBuilder {
        CineworldClientBuilder::new()
    }

    /// Current API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replaces the API key used for subsequent requests.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// Checks the API key and seeds the query map with the `key` parameter.
    ///
    /// Every operation calls this first, before argument validation and
    /// before any I/O.
    fn base_query(&self) -> Result<QueryMap> {
        if self.api_key.is_empty() {
            return Err(CineworldError::InvalidCredentials);
        }
        Ok(QueryMap::new(&self.api_key))
    }

    /// Builds the full request URL for an endpoint path and assembled query.
    fn request_url(&self, path: &str, query: QueryMap) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.set_query(Some(&query.into_query_string()));
        Ok(url)
    }

    /// Issues one GET and decodes the JSON body. No retries, no timeouts;
    /// both are transport concerns.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: QueryMap,
    ) -> Result<T> {
        let url = self.request_url(path, query)?;
        tracing::debug!(%url, "quickbook API request");

        let response = self.http_client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl LocalCineworldApi for CineworldClient {
    #[instrument(skip_all)]
    async fn cinemas(&self, filter: &CinemaFilter) -> Result<Vec<Cinema>> {
        let mut query = self.base_query()?;
        filter.filters().apply(&mut query);

        let response: CinemasResponse = self.get_json("quickbook/cinemas", query).await?;
        Ok(response.into_items())
    }

    #[instrument(skip_all)]
    async fn films(&self, filter: &FilmFilter) -> Result<Vec<Film>> {
        let mut query = self.base_query()?;
        filter.filters().apply(&mut query);

        let response: FilmsResponse = self.get_json("quickbook/films", query).await?;
        Ok(response.into_items())
    }

    #[instrument(skip_all)]
    async fn dates(&self, filter: &DateFilter) -> Result<Vec<String>> {
        let mut query = self.base_query()?;
        filter.filters().apply(&mut query);

        let response: DatesResponse = self.get_json("quickbook/dates", query).await?;
        Ok(response.into_items())
    }

    #[instrument(skip_all)]
    async fn performances(&self, performance_query: &PerformanceQuery) -> Result<Vec<Performance>> {
        let mut query = self.base_query()?;
        performance_query.validate()?;
        performance_query.filters().apply(&mut query);

        // campaign bypasses the shared assembly and goes out verbatim
        if let Some(campaign) = performance_query.campaign.as_deref()
            && !campaign.is_empty()
        {
            query.insert_raw("campaign", String::from(campaign));
        }

        let response: PerformancesResponse = self.get_json("quickbook/performances", query).await?;
        Ok(response.into_items())
    }

    #[instrument(skip_all)]
    async fn categories(&self) -> Result<Vec<Category>> {
        let query = self.base_query()?;

        let response: CategoriesResponse = self.get_json("quickbook/categories", query).await?;
        Ok(response.into_items())
    }

    #[instrument(skip_all)]
    async fn events(&self) -> Result<Vec<Event>> {
        let query = self.base_query()?;

        let response: EventsResponse = self.get_json("quickbook/events", query).await?;
        Ok(response.into_items())
    }

    #[instrument(skip_all)]
    async fn distributors(&self) -> Result<Vec<Distributor>> {
        let query = self.base_query()?;

        // the live API serves this endpoint outside the quickbook namespace
        let response: DistributorsResponse = self.get_json("distributors", query).await?;
        Ok(response.into_items())
    }
}

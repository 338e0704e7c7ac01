use chrono::NaiveDate;
use reqwest::blocking::{Client, Request};
use reqwest::header::HeaderValue;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch_xml;
use super::http_client::create_http_client;
use super::params::{QueryParams, event_classes_params};
use super::urls::{build_endpoint_url, entry_fees_endpoint};
use crate::config::Config;
use crate::constants::{API_KEY_HEADER, endpoints};
use crate::error::AppError;
use crate::eventor::models::{
    ApiResponse, CompetitorCountFilter, DateBound, EntriesFilter, EventsFilter, MembershipsQuery,
    Table,
};
use crate::eventor::processors::disciplines_table;

/// Synchronous client for the Eventor API.
///
/// Each instance owns its configuration and connection pool. Every request carries the
/// configured key in the `ApiKey` header.
#[derive(Debug, Clone)]
pub struct EventorClient {
    config: Config,
    client: Client,
}

impl EventorClient {
    /// Creates a client for the given configuration.
    ///
    /// Fails when the API key cannot be sent as a header value or the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        api_key_header(&config.api_key)?;
        let client = create_http_client(&config)?;
        debug!(
            "Created Eventor client for {} (timeout: {:?})",
            config.normalized_base_url(),
            config.http_timeout_seconds
        );
        Ok(EventorClient { config, client })
    }

    /// Client for the default Eventor address.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, AppError> {
        EventorClient::new(Config::with_api_key(api_key))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds, without sending, the GET request for `endpoint` with the key header and
    /// the given query parameters.
    pub fn build_filtered_request(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<Request, AppError> {
        let url = build_endpoint_url(self.config.normalized_base_url(), endpoint);
        let request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key_header(&self.config.api_key)?)
            .query(params.pairs())
            .build()?;
        Ok(request)
    }

    /// Issues one GET against `endpoint` and parses the body.
    #[instrument(skip(self, params))]
    pub fn execute(&self, endpoint: &str, params: &QueryParams) -> Result<ApiResponse, AppError> {
        let request = self.build_filtered_request(endpoint, params)?;
        fetch_xml(&self.client, request)
    }

    pub fn get_events(&self, filter: &EventsFilter) -> Result<ApiResponse, AppError> {
        self.execute(endpoints::EVENTS, &QueryParams::from(filter))
    }

    pub fn get_organisations(&self) -> Result<ApiResponse, AppError> {
        self.execute(endpoints::ORGANISATIONS, &QueryParams::new())
    }

    pub fn get_event_classes(
        &self,
        event_id: u64,
        include_entry_fees: bool,
    ) -> Result<ApiResponse, AppError> {
        self.execute(
            endpoints::EVENT_CLASSES,
            &event_classes_params(event_id, include_entry_fees),
        )
    }

    pub fn get_entry_fees(&self, event_id: u64) -> Result<ApiResponse, AppError> {
        self.execute(&entry_fees_endpoint(event_id), &QueryParams::new())
    }

    pub fn get_entries(&self, filter: &EntriesFilter) -> Result<ApiResponse, AppError> {
        self.execute(endpoints::ENTRIES, &QueryParams::from(filter))
    }

    pub fn get_competitor_count(
        &self,
        filter: &CompetitorCountFilter,
    ) -> Result<ApiResponse, AppError> {
        self.execute(endpoints::COMPETITOR_COUNT, &QueryParams::from(filter))
    }

    pub fn get_memberships(&self, query: &MembershipsQuery) -> Result<ApiResponse, AppError> {
        self.execute(endpoints::MEMBERSHIPS, &QueryParams::from(query))
    }

    /// Fetches the events in the range and returns their distinct disciplines.
    pub fn get_disciplines(
        &self,
        from_date: Option<DateBound>,
        to_date: Option<DateBound>,
    ) -> Result<Table, AppError> {
        let filter = EventsFilter {
            from_date,
            to_date,
            ..EventsFilter::default()
        };
        let response = self.get_events(&filter)?;
        let table = disciplines_table(&response);
        info!("Found {} distinct disciplines", table.len());
        Ok(table)
    }

    /// Disciplines for events between two calendar days, inclusive.
    pub fn get_disciplines_between(
        &self,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Result<Table, AppError> {
        self.get_disciplines(Some(from_date.into()), Some(to_date.into()))
    }
}

fn api_key_header(api_key: &str) -> Result<HeaderValue, AppError> {
    let mut value = HeaderValue::from_str(api_key).map_err(|_| {
        AppError::config_error("API key contains characters that cannot be sent in a header")
    })?;
    value.set_sensitive(true);
    Ok(value)
}

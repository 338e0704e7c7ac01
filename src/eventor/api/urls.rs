//! URL building utilities for API endpoints

use crate::constants::endpoints;

/// Joins the base address and an endpoint path with exactly one slash.
///
/// # Example
/// ```
/// use eventor_client::eventor::api::build_endpoint_url;
///
/// let url = build_endpoint_url("https://eventor.example.com/api/", "events");
/// assert_eq!(url, "https://eventor.example.com/api/events");
/// ```
pub fn build_endpoint_url(api_base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        api_base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Endpoint path for the entry fees of one event.
///
/// # Example
/// ```
/// use eventor_client::eventor::api::entry_fees_endpoint;
///
/// assert_eq!(entry_fees_endpoint(1001), "entryfees/events/1001");
/// ```
pub fn entry_fees_endpoint(event_id: u64) -> String {
    format!("{}/{event_id}", endpoints::ENTRY_FEES_FOR_EVENT)
}

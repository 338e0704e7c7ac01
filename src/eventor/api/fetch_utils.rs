//! Blocking fetch with status classification and lenient XML parsing

use reqwest::blocking::{Client, Request};
use tracing::{debug, error, info, instrument};

use crate::error::AppError;
use crate::eventor::models::ApiResponse;
use crate::eventor::xml::Element;

/// Sends a prepared request and parses the body as XML.
///
/// Transport failures and non-2xx statuses are returned as errors and never retried.
/// A body that is not well-formed XML is logged in full and reported as
/// [`ApiResponse::NoData`].
#[instrument(skip_all, fields(url = %request.url()))]
pub(super) fn fetch_xml(client: &Client, request: Request) -> Result<ApiResponse, AppError> {
    let url = request.url().to_string();
    info!("Fetching data from URL: {url}");

    let response = match client.execute(request) {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(&url)
            } else if e.is_connect() {
                AppError::network_connection(&url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(AppError::from_status(status_code, reason, &url));
    }

    let response_text = match response.text() {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };
    debug!("Response length: {} bytes", response_text.len());

    Ok(parse_response_body(&url, &response_text))
}

/// Parses a response body, degrading to `NoData` when it is not well-formed XML.
pub(super) fn parse_response_body(url: &str, body: &str) -> ApiResponse {
    match Element::parse(body) {
        Ok(root) => ApiResponse::Document(root),
        Err(e) => {
            error!("XML parse error: {} (URL: {})", e, url);
            error!("Response text: {body}");
            ApiResponse::NoData
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_body_document() {
        let response = parse_response_body(
            "http://localhost/events",
            "<EventList><Event><EventId>1</EventId></Event></EventList>",
        );
        let root = response.root().unwrap();
        assert_eq!(root.tag, "EventList");
        assert_eq!(root.find_text(".//EventId"), Some("1"));
    }

    #[test]
    fn test_parse_response_body_malformed_is_no_data() {
        assert!(parse_response_body("http://localhost/events", "<EventList><Event>").is_no_data());
        assert!(parse_response_body("http://localhost/events", "not xml at all").is_no_data());
        assert!(parse_response_body("http://localhost/events", "").is_no_data());
    }

    #[test]
    fn test_parse_response_body_empty_root_is_document() {
        let response = parse_response_body("http://localhost/events", "<EventList/>");
        assert!(!response.is_no_data());
        assert!(response.root().unwrap().children.is_empty());
    }
}

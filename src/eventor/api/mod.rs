// Request side of the Eventor client

mod core;
mod fetch_utils;
pub mod http_client;
pub mod params;
pub mod urls;

pub use self::core::EventorClient;
pub use http_client::create_http_client;
pub use params::{QueryParams, event_classes_params};
pub use urls::{build_endpoint_url, entry_fees_endpoint};

//! Eventor API Client Library
//!
//! This library fetches sports-event registry data (events, organisations, entries,
//! memberships and fees) from the Eventor HTTP/XML API and flattens each response
//! into a table of records.
//!
//! # Examples
//!
//! ```rust,no_run
//! use eventor_client::eventor::models::{DateBound, EventsFilter};
//! use eventor_client::eventor::processors::events_table;
//! use eventor_client::{AppError, EventorClient};
//!
//! fn main() -> Result<(), AppError> {
//!     let client = EventorClient::with_api_key("my-api-key")?;
//!
//!     let filter = EventsFilter {
//!         from_date: Some("2024-03-01".parse::<DateBound>()?),
//!         to_date: Some("2024-03-31".parse::<DateBound>()?),
//!         ..EventsFilter::default()
//!     };
//!     let response = client.get_events(&filter)?;
//!     let table = events_table(&response);
//!
//!     for name in table.column("Name") {
//!         println!("{}", name.unwrap_or("-"));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod eventor;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use eventor::api::{EventorClient, QueryParams};
pub use eventor::models::{ApiResponse, Record, Table};
pub use eventor::xml::{Element, print_pretty, print_structure};

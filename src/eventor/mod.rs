//! Eventor API access: requests, parsed trees and flat tables.

pub mod api;
pub mod models;
pub mod processors;
pub mod xml;

pub use api::EventorClient;
pub use models::{ApiResponse, Record, Table};
pub use xml::Element;

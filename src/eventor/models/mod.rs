pub mod filters;
pub mod table;

pub use filters::{
    CompetitorCountFilter, DateBound, EntriesFilter, EventClassification, EventsFilter,
    MembershipsQuery,
};
pub use table::{Record, Table};

use crate::eventor::xml::Element;

/// Outcome of a successful HTTP round-trip.
///
/// `NoData` means the server answered but the body was not well-formed XML.
/// It is distinct from a parsed document that simply contains no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Document(Element),
    NoData,
}

impl ApiResponse {
    /// Root element of the parsed document, if there is one.
    pub fn root(&self) -> Option<&Element> {
        match self {
            ApiResponse::Document(root) => Some(root),
            ApiResponse::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ApiResponse::NoData)
    }
}

impl From<Element> for ApiResponse {
    fn from(root: Element) -> Self {
        ApiResponse::Document(root)
    }
}

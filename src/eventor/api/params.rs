//! Query-string construction for Eventor requests.

use crate::eventor::models::{
    CompetitorCountFilter, DateBound, EntriesFilter, EventsFilter, MembershipsQuery,
};
use std::fmt::Display;

/// Ordered query parameters, already in their wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        QueryParams::default()
    }

    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Lower bound of a date range; plain dates become `D 00:00:00`.
    pub fn push_from_date(&mut self, key: &str, bound: Option<&DateBound>) -> &mut Self {
        if let Some(bound) = bound {
            self.push(key, bound.as_from());
        }
        self
    }

    /// Upper bound of a date range; plain dates become `D 23:59:59`.
    pub fn push_to_date(&mut self, key: &str, bound: Option<&DateBound>) -> &mut Self {
        if let Some(bound) = bound {
            self.push(key, bound.as_to());
        }
        self
    }

    /// Comma-joined list in input order. Empty lists are left out.
    pub fn push_list<T: Display>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            self.push(key, joined);
        }
        self
    }

    /// Literal `true` / `false`.
    pub fn push_flag(&mut self, key: &str, value: bool) -> &mut Self {
        self.push(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<&EventsFilter> for QueryParams {
    fn from(filter: &EventsFilter) -> Self {
        let mut params = QueryParams::new();
        params
            .push_from_date("fromDate", filter.from_date.as_ref())
            .push_to_date("toDate", filter.to_date.as_ref())
            .push_list("classificationIds", &filter.classifications);
        params
    }
}

impl From<&EntriesFilter> for QueryParams {
    fn from(filter: &EntriesFilter) -> Self {
        let mut params = QueryParams::new();
        params
            .push_list("organisationIds", &filter.organisation_ids)
            .push_list("eventIds", &filter.event_ids)
            .push_list("eventClassIds", &filter.event_class_ids)
            .push_from_date("fromEventDate", filter.from_event_date.as_ref())
            .push_to_date("toEventDate", filter.to_event_date.as_ref())
            .push_from_date("fromEntryDate", filter.from_entry_date.as_ref())
            .push_to_date("toEntryDate", filter.to_entry_date.as_ref())
            .push_from_date("fromModifyDate", filter.from_modify_date.as_ref())
            .push_to_date("toModifyDate", filter.to_modify_date.as_ref())
            .push_flag("includeEntryFees", filter.include_entry_fees)
            .push_flag("includePersonElement", filter.include_person_element)
            .push_flag("includeOrganisationElement", filter.include_organisation_element)
            .push_flag("includeEventElement", filter.include_event_element);
        params
    }
}

impl From<&CompetitorCountFilter> for QueryParams {
    fn from(filter: &CompetitorCountFilter) -> Self {
        let mut params = QueryParams::new();
        params
            .push_list("organisationIds", &filter.organisation_ids)
            .push_list("eventIds", &filter.event_ids)
            .push_list("personIds", &filter.person_ids);
        params
    }
}

impl From<&MembershipsQuery> for QueryParams {
    fn from(query: &MembershipsQuery) -> Self {
        let mut params = QueryParams::new();
        params
            .push("organisationId", query.organisation_id)
            .push("year", query.year)
            .push_flag("includeChildOrganisations", query.include_child_organisations)
            .push_flag("includeContactDetails", query.include_contact_details);
        params
    }
}

/// Parameters for the `eventclasses` endpoint.
pub fn event_classes_params(event_id: u64, include_entry_fees: bool) -> QueryParams {
    let mut params = QueryParams::new();
    params
        .push("eventId", event_id)
        .push_flag("includeEntryFees", include_entry_fees);
    params
}

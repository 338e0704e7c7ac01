//! Typed request filters for the endpoints that accept query parameters.

use crate::constants::{DAY_END, DAY_START};
use crate::error::AppError;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One end of a date range.
///
/// A bare calendar date is widened to the start or end of that day depending
/// on which end of the range it is used for. An exact timestamp is sent as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Day(NaiveDate),
    Exact(NaiveDateTime),
}

impl DateBound {
    /// Query value when used as the lower bound of a range.
    pub fn as_from(&self) -> String {
        match self {
            DateBound::Day(date) => format!("{} {DAY_START}", date.format(DATE_FORMAT)),
            DateBound::Exact(moment) => moment.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Query value when used as the upper bound of a range.
    pub fn as_to(&self) -> String {
        match self {
            DateBound::Day(date) => format!("{} {DAY_END}", date.format(DATE_FORMAT)),
            DateBound::Exact(moment) => moment.format(DATE_TIME_FORMAT).to_string(),
        }
    }
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::Day(date)
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(moment: NaiveDateTime) -> Self {
        DateBound::Exact(moment)
    }
}

impl FromStr for DateBound {
    type Err = AppError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(DateBound::Day(date));
        }
        NaiveDateTime::parse_from_str(&trimmed.replacen('T', " ", 1), DATE_TIME_FORMAT)
            .map(DateBound::Exact)
            .map_err(|_| {
                AppError::datetime_parse_error(format!(
                    "'{s}' is not a date (YYYY-MM-DD) or timestamp (YYYY-MM-DD HH:MM:SS)"
                ))
            })
    }
}

/// Event level used by the `classificationIds` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EventClassification {
    Championship = 1,
    National = 2,
    State = 3,
    Local = 4,
    Club = 5,
    International = 6,
}

impl EventClassification {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Championship),
            2 => Some(Self::National),
            3 => Some(Self::State),
            4 => Some(Self::Local),
            5 => Some(Self::Club),
            6 => Some(Self::International),
            _ => None,
        }
    }
}

impl fmt::Display for EventClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Filter for the `events` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsFilter {
    pub from_date: Option<DateBound>,
    pub to_date: Option<DateBound>,
    pub classifications: Vec<EventClassification>,
}

/// Filter for the `entries` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntriesFilter {
    pub organisation_ids: Vec<u64>,
    pub event_ids: Vec<u64>,
    pub event_class_ids: Vec<u64>,
    pub from_event_date: Option<DateBound>,
    pub to_event_date: Option<DateBound>,
    pub from_entry_date: Option<DateBound>,
    pub to_entry_date: Option<DateBound>,
    pub from_modify_date: Option<DateBound>,
    pub to_modify_date: Option<DateBound>,
    pub include_entry_fees: bool,
    pub include_person_element: bool,
    pub include_organisation_element: bool,
    pub include_event_element: bool,
}

/// Filter for the `competitorcount` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompetitorCountFilter {
    pub organisation_ids: Vec<u64>,
    pub event_ids: Vec<u64>,
    pub person_ids: Vec<u64>,
}

/// Parameters for the `memberships` endpoint. The organisation must be the caller's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipsQuery {
    pub organisation_id: u64,
    pub year: i32,
    /// Not applicable for clubs.
    pub include_child_organisations: bool,
    pub include_contact_details: bool,
}

impl MembershipsQuery {
    pub fn new(organisation_id: u64, year: i32) -> Self {
        MembershipsQuery {
            organisation_id,
            year,
            include_child_organisations: false,
            include_contact_details: false,
        }
    }
}

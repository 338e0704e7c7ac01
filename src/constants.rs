//! Application-wide constants and configuration values
//!
//! This module centralizes the service address, header names and endpoint paths
//! so request building and tests agree on them.

/// Default base address of the Eventor API
pub const DEFAULT_API_BASE_URL: &str = "https://eventor.orienteering.asn.au/api";

/// Header carrying the static API credential
pub const API_KEY_HEADER: &str = "ApiKey";

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "eventor_client";

/// Default log file name
pub const LOG_FILE_NAME: &str = "eventor_client.log";

/// Time appended to a plain calendar date used as a lower bound
pub const DAY_START: &str = "00:00:00";

/// Time appended to a plain calendar date used as an upper bound
pub const DAY_END: &str = "23:59:59";

/// Separator for multi-valued columns such as discipline ids
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Endpoint path segments, relative to the base address
pub mod endpoints {
    pub const EVENTS: &str = "events";
    pub const ORGANISATIONS: &str = "organisations";
    pub const EVENT_CLASSES: &str = "eventclasses";
    pub const ENTRY_FEES_FOR_EVENT: &str = "entryfees/events";
    pub const ENTRIES: &str = "entries";
    pub const COMPETITOR_COUNT: &str = "competitorcount";
    pub const MEMBERSHIPS: &str = "memberships";
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_KEY: &str = "EVENTOR_API_KEY";
    pub const API_URL: &str = "EVENTOR_API_URL";
    pub const LOG_FILE: &str = "EVENTOR_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "EVENTOR_HTTP_TIMEOUT";
}

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

use crate::eventor::models::{DateBound, EventClassification};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches the local configuration.
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.new_api_key.is_some() || args.new_api_url.is_some()
}

/// Eventor API client
///
/// Fetches events, organisations, entries and memberships from Eventor and prints
/// them as flat tables. Dates are YYYY-MM-DD (widened to the whole day) or
/// "YYYY-MM-DD HH:MM:SS".
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Table output format.
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Json,
        global = true,
        help_heading = "Output"
    )]
    pub format: OutputFormat,

    /// Print the parsed response tree instead of extracting a table.
    #[arg(long, global = true, conflicts_with = "xml", help_heading = "Output")]
    pub raw: bool,

    /// Print the parsed response as indented XML instead of extracting a table.
    #[arg(long, global = true, help_heading = "Output")]
    pub xml: bool,

    /// API key for this invocation. Overrides the config file and EVENTOR_API_KEY.
    #[arg(long = "api-key", global = true, help_heading = "Configuration")]
    pub api_key: Option<String>,

    /// Store the API key in the config file.
    #[arg(long = "set-api-key", value_name = "API_KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Store the API base URL in the config file.
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Events in a date range.
    Events {
        #[arg(long = "from")]
        from_date: Option<DateBound>,
        #[arg(long = "to")]
        to_date: Option<DateBound>,
        /// Comma-separated event classifications.
        #[arg(long = "classification", value_enum, value_delimiter = ',')]
        classifications: Vec<EventClassification>,
    },
    /// All organisations.
    Organisations,
    /// Classes of one event.
    EventClasses {
        event_id: u64,
        /// Leave entry fee references out of the response.
        #[arg(long = "no-entry-fees")]
        no_entry_fees: bool,
    },
    /// Entry fees of one event.
    EntryFees { event_id: u64 },
    /// Entries matching the given filters.
    Entries {
        #[arg(long = "organisation-ids", value_delimiter = ',')]
        organisation_ids: Vec<u64>,
        #[arg(long = "event-ids", value_delimiter = ',')]
        event_ids: Vec<u64>,
        #[arg(long = "event-class-ids", value_delimiter = ',')]
        event_class_ids: Vec<u64>,
        #[arg(long = "from-event-date")]
        from_event_date: Option<DateBound>,
        #[arg(long = "to-event-date")]
        to_event_date: Option<DateBound>,
        #[arg(long = "from-entry-date")]
        from_entry_date: Option<DateBound>,
        #[arg(long = "to-entry-date")]
        to_entry_date: Option<DateBound>,
        #[arg(long = "from-modify-date")]
        from_modify_date: Option<DateBound>,
        #[arg(long = "to-modify-date")]
        to_modify_date: Option<DateBound>,
        #[arg(long = "include-entry-fees")]
        include_entry_fees: bool,
        #[arg(long = "include-person")]
        include_person_element: bool,
        #[arg(long = "include-organisation")]
        include_organisation_element: bool,
        #[arg(long = "include-event")]
        include_event_element: bool,
    },
    /// Competitor counts per organisation, event or person.
    CompetitorCount {
        #[arg(long = "organisation-ids", value_delimiter = ',')]
        organisation_ids: Vec<u64>,
        #[arg(long = "event-ids", value_delimiter = ',')]
        event_ids: Vec<u64>,
        #[arg(long = "person-ids", value_delimiter = ',')]
        person_ids: Vec<u64>,
    },
    /// Memberships of your own organisation for a year.
    Memberships {
        organisation_id: u64,
        /// Defaults to the current year.
        #[arg(long)]
        year: Option<i32>,
        #[arg(long = "include-child-organisations")]
        include_child_organisations: bool,
        #[arg(long = "include-contact-details")]
        include_contact_details: bool,
    },
    /// Distinct disciplines of the events in a date range.
    Disciplines {
        #[arg(long = "from")]
        from_date: Option<DateBound>,
        #[arg(long = "to")]
        to_date: Option<DateBound>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of objects.
    #[default]
    Json,
    /// Tab-separated values with a header row.
    Tsv,
}

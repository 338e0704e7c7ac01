use crate::cli::{Args, Command, OutputFormat};
use crate::config::Config;
use crate::error::AppError;
use crate::eventor::EventorClient;
use crate::eventor::models::{
    ApiResponse, CompetitorCountFilter, EntriesFilter, EventsFilter, MembershipsQuery, Table,
};
use crate::eventor::processors::{
    competitor_count_table, disciplines_table, entries_table, entry_fees_table,
    event_classes_table, events_table, memberships_table, organisations_table,
};
use crate::eventor::xml::{print_pretty, print_structure};
use chrono::{Datelike, Local};
use std::io::Write;
use tracing::{debug, info};

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Handles configuration update commands (--set-api-key, --set-api-url).
///
/// Starts from the stored configuration when there is one and saves the result.
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = Config::load_from_path(&config_path).unwrap_or_default();

    if let Some(api_key) = &args.new_api_key {
        config.api_key = api_key.clone();
    }

    if let Some(api_url) = &args.new_api_url {
        config.api_base_url = api_url.clone();
    }

    config.validate()?;
    config.save()?;
    println!("Config updated successfully!");

    Ok(())
}

/// Loads the configuration for an API call, letting `--api-key` take precedence.
pub fn resolve_config(args: &Args) -> Result<Config, AppError> {
    let mut config = match (Config::load(), &args.api_key) {
        (Ok(config), _) => config,
        (Err(e), Some(_)) => {
            debug!("Using command line API key without stored config: {e}");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
        (Err(e), None) => return Err(e),
    };

    if let Some(api_key) = &args.api_key {
        config.api_key = api_key.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Runs one API subcommand and writes its output.
///
/// With `--raw` or `--xml` the parsed response is printed as a tree, otherwise the
/// matching table is extracted and rendered in the chosen format.
pub fn handle_api_command<W: Write>(
    args: &Args,
    command: &Command,
    client: &EventorClient,
    out: &mut W,
) -> Result<(), AppError> {
    if args.raw || args.xml {
        let response = fetch_response(client, command)?;
        if args.raw {
            print_structure(out, response.root())?;
        } else {
            print_pretty(out, response.root())?;
        }
        return Ok(());
    }

    let table = match command {
        Command::Disciplines { from_date, to_date } => {
            client.get_disciplines(*from_date, *to_date)?
        }
        _ => {
            let response = fetch_response(client, command)?;
            if response.is_no_data() {
                info!("Response could not be parsed; printing an empty table");
            }
            extract(command, &response)
        }
    };

    info!("Extracted {} records", table.len());
    write_table(out, &table, args.format)
}

/// Issues the request behind a subcommand.
pub fn fetch_response(client: &EventorClient, command: &Command) -> Result<ApiResponse, AppError> {
    match command {
        Command::Events {
            from_date,
            to_date,
            classifications,
        } => client.get_events(&EventsFilter {
            from_date: *from_date,
            to_date: *to_date,
            classifications: classifications.clone(),
        }),
        Command::Organisations => client.get_organisations(),
        Command::EventClasses {
            event_id,
            no_entry_fees,
        } => client.get_event_classes(*event_id, !no_entry_fees),
        Command::EntryFees { event_id } => client.get_entry_fees(*event_id),
        Command::Entries {
            organisation_ids,
            event_ids,
            event_class_ids,
            from_event_date,
            to_event_date,
            from_entry_date,
            to_entry_date,
            from_modify_date,
            to_modify_date,
            include_entry_fees,
            include_person_element,
            include_organisation_element,
            include_event_element,
        } => client.get_entries(&EntriesFilter {
            organisation_ids: organisation_ids.clone(),
            event_ids: event_ids.clone(),
            event_class_ids: event_class_ids.clone(),
            from_event_date: *from_event_date,
            to_event_date: *to_event_date,
            from_entry_date: *from_entry_date,
            to_entry_date: *to_entry_date,
            from_modify_date: *from_modify_date,
            to_modify_date: *to_modify_date,
            include_entry_fees: *include_entry_fees,
            include_person_element: *include_person_element,
            include_organisation_element: *include_organisation_element,
            include_event_element: *include_event_element,
        }),
        Command::CompetitorCount {
            organisation_ids,
            event_ids,
            person_ids,
        } => client.get_competitor_count(&CompetitorCountFilter {
            organisation_ids: organisation_ids.clone(),
            event_ids: event_ids.clone(),
            person_ids: person_ids.clone(),
        }),
        Command::Memberships {
            organisation_id,
            year,
            include_child_organisations,
            include_contact_details,
        } => client.get_memberships(&MembershipsQuery {
            organisation_id: *organisation_id,
            year: year.unwrap_or_else(|| Local::now().year()),
            include_child_organisations: *include_child_organisations,
            include_contact_details: *include_contact_details,
        }),
        Command::Disciplines { from_date, to_date } => client.get_events(&EventsFilter {
            from_date: *from_date,
            to_date: *to_date,
            ..EventsFilter::default()
        }),
    }
}

/// Projects a response with the extractor matching the subcommand.
pub fn extract(command: &Command, response: &ApiResponse) -> Table {
    match command {
        Command::Events { .. } => events_table(response),
        Command::Organisations => organisations_table(response),
        Command::EventClasses { .. } => event_classes_table(response),
        Command::EntryFees { .. } => entry_fees_table(response),
        Command::Entries { .. } => entries_table(response),
        Command::CompetitorCount { .. } => competitor_count_table(response),
        Command::Memberships { .. } => memberships_table(response),
        Command::Disciplines { .. } => disciplines_table(response),
    }
}

/// Renders a table as pretty JSON or TSV.
pub fn write_table<W: Write>(
    out: &mut W,
    table: &Table,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)?;
        }
        OutputFormat::Tsv => table.write_tsv(out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventor::processors::{
        COMPETITOR_COUNT, DISCIPLINE_COLUMNS, ENTRIES, ENTRY_FEES, EVENTS, EVENT_CLASSES,
        MEMBERSHIPS, ORGANISATIONS,
    };
    use crate::eventor::xml::Element;
    use clap::Parser;

    fn organisations_response() -> ApiResponse {
        ApiResponse::Document(
            Element::parse(
                "<OrganisationList><Organisation><OrganisationId>7</OrganisationId><Name>Acme</Name></Organisation></OrganisationList>",
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_extract_uses_matching_shape() {
        let table = extract(&Command::Organisations, &organisations_response());
        assert_eq!(table.len(), 1);
        assert_eq!(table.column("Name"), vec![Some("Acme")]);
    }

    fn parse_command(argv: &[&str]) -> Command {
        let argv = std::iter::once("eventor_client").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).unwrap();
        args.command.unwrap()
    }

    #[test]
    fn test_extract_no_data_for_every_command() {
        let cases = [
            (parse_command(&["events"]), EVENTS.columns()),
            (parse_command(&["organisations"]), ORGANISATIONS.columns()),
            (parse_command(&["event-classes", "1001"]), EVENT_CLASSES.columns()),
            (parse_command(&["entry-fees", "1001"]), ENTRY_FEES.columns()),
            (parse_command(&["entries"]), ENTRIES.columns()),
            (parse_command(&["competitor-count"]), COMPETITOR_COUNT.columns()),
            (parse_command(&["memberships", "7"]), MEMBERSHIPS.columns()),
            (parse_command(&["disciplines"]), DISCIPLINE_COLUMNS.to_vec()),
        ];
        for (command, columns) in &cases {
            let table = extract(command, &ApiResponse::NoData);
            assert!(table.is_empty(), "{command:?} produced rows");
            assert_eq!(table.columns(), columns.as_slice(), "{command:?}");
        }
    }

    #[test]
    fn test_write_table_json() {
        let table = extract(&Command::Organisations, &organisations_response());
        let mut out = Vec::new();
        write_table(&mut out, &table, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["Name"], "Acme");
        assert!(value[0]["OrganisationTypeId"].is_null());
    }

    #[test]
    fn test_write_table_tsv_header() {
        let table = extract(&Command::Organisations, &ApiResponse::NoData);
        let mut out = Vec::new();
        write_table(&mut out, &table, OutputFormat::Tsv).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with(table.columns()[0]));
    }
}

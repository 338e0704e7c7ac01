// src/main.rs
use clap::{CommandFactory, Parser};
use eventor_client::cli::{Args, is_config_operation};
use eventor_client::commands::{
    handle_api_command, handle_config_update_command, handle_list_config_command, resolve_config,
};
use eventor_client::logging::setup_logging;
use eventor_client::{AppError, EventorClient};
use std::io::{BufWriter, Write, stdout};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        if args.list_config {
            return handle_list_config_command();
        }
        return handle_config_update_command(&args);
    }

    let Some(command) = args.command.as_ref() else {
        Args::command().print_help()?;
        return Ok(());
    };

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let config = resolve_config(&args)?;
    let client = EventorClient::new(config)?;

    let mut out = BufWriter::new(stdout().lock());
    let result = handle_api_command(&args, command, &client, &mut out);
    out.flush()?;

    if let Err(e) = &result {
        tracing::error!("Command failed: {e}");
    }
    result
}

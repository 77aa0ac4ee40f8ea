//! circle-lab CLI
//!
//! Usage: circle-lab <COMMAND>
//!
//! Commands:
//!   describe  Create a container and describe it
//!   write     Apply values to a container's hidden value
//!   circle    Build a circle and draw it
//!   config    Show the effective configuration

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use commands::{command_name, dispatch, Session};
use ui::error::{error_code, error_help, format_error};
use ui::json::emit_event;
use ui::json::events::{CompleteEvent, ErrorEvent};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let name = command_name(&cli.command);

    let session = match Session::from_cli(&cli) {
        Ok(session) => session,
        Err(err) => return report_failure(name, cli.json, &anyhow::Error::new(err)),
    };

    if !session.json {
        ui::output::print_config_warnings(&session.log, &session.warnings);
        ui::output::print_skipped_configs(&session.log, &session.skipped);
    }
    match &session.source {
        Some(path) => session.log.debug(format!("config loaded from {}", path.display())),
        None => session.log.debug("using built-in config defaults"),
    }

    match dispatch(cli.command, &session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(name, session.json, &err),
    }
}

fn report_failure(command: &str, json: bool, err: &anyhow::Error) -> ExitCode {
    if json {
        let mut event = ErrorEvent::new(command, error_code(err), err.to_string());
        if let Some(help) = error_help(err) {
            event = event.with_help(help);
        }
        let _ = emit_event(&event);
        let _ = emit_event(&CompleteEvent::failure(command));
    } else {
        eprint!("{}", format_error(err));
    }
    ExitCode::FAILURE
}

mod cli;
mod config;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use goalcast_client::ClientError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Goalcast - savings goal parser

Usage:
  goalcast <command>

Start here:
  goalcast preview 'Save $3000 in 10 months for a new laptop'
  goalcast preview --help
";

const TOP_LEVEL_HELP: &str = "Goalcast - savings goal parser

USAGE: goalcast <command>

Read a goal:
  goalcast preview '<goal>'                   Amount, months and required monthly saving
  goalcast amount '<goal>'                    Target amount only
  goalcast deadline '<goal>'                  Deadline only

Calendar and forecasting:
  goalcast span <start> <end>                 Whole months between two YYYY-MM-DD dates
  goalcast payload '<goal>'                   Form fields sent to the forecasting service

Options on every command:
  --json                                      Print the result envelope as JSON
  --today YYYY-MM-DD                          Count months from this date (preview, deadline)

Environment:
  GOALCAST_TODAY                              Default for --today
  GOALCAST_LOG                                Log filter for stderr, e.g. `debug`

Not sure how to phrase a goal?
  Run `goalcast preview --help` for the accepted amount and deadline forms.
";

fn main() -> ExitCode {
    config::init_tracing();
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return handle_parse_error(&err, &raw_args),
    };
    let mode = output::mode_for_command(&cli.command);

    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!(code = %error.code, "command failed");
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn handle_parse_error(err: &clap::Error, raw_args: &[String]) -> Result<ExitCode, ExitCode> {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        let text = if err.kind() != ErrorKind::DisplayVersion && is_top_level_help_request(raw_args)
        {
            TOP_LEVEL_HELP.to_string()
        } else {
            err.to_string()
        };
        if write_stdout_text(&text).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let command_hint = if matches!(
        err.kind(),
        ErrorKind::MissingRequiredArgument
            | ErrorKind::InvalidValue
            | ErrorKind::ValueValidation
            | ErrorKind::WrongNumberOfValues
            | ErrorKind::UnknownArgument
            | ErrorKind::InvalidSubcommand
    ) {
        command_path_from_args(raw_args)
    } else {
        None
    };
    let clean_message = strip_clap_boilerplate(&err.to_string());
    let parse_error = parse_error_with_command_hint(&clean_message, command_hint);
    let mode = infer_requested_output_mode(raw_args);
    if output::print_failure(&parse_error, mode).is_err() {
        return Err(ExitCode::from(2));
    }
    Err(ExitCode::from(1))
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Drops clap's trailing Usage and "For more information" lines so the
/// recovery steps are the only guidance printed.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// First non-flag argument when it names a subcommand.
fn command_path_from_args(raw_args: &[String]) -> Option<&'static str> {
    let first = raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))?;

    match first.as_str() {
        "preview" => Some("preview"),
        "amount" => Some("amount"),
        "deadline" => Some("deadline"),
        "span" => Some("span"),
        "payload" => Some("payload"),
        _ => None,
    }
}

fn parse_error_with_command_hint(clean_message: &str, command_hint: Option<&str>) -> ClientError {
    let goal_command = command_hint
        .filter(|command| matches!(*command, "preview" | "amount" | "deadline" | "payload"));
    if let Some(command) = goal_command.filter(|_| clean_message.contains("unexpected argument")) {
        return ClientError::invalid_argument_with_recovery(
            "Goal text must be provided as one quoted argument.",
            vec![
                format!(
                    "Quote the whole sentence: `goalcast {command} 'Save $3000 in 10 months'`."
                ),
                "Use single quotes so the shell leaves `$` amounts alone.".to_string(),
            ],
        );
    }

    ClientError::invalid_argument_for_command(clean_message, command_hint)
}

fn exit_code_for_error(error: &ClientError) -> ExitCode {
    if is_internal_error(error) {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn is_internal_error(error: &ClientError) -> bool {
    error.code.starts_with("internal_")
}

use goalcast_client::commands;
use goalcast_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};
use crate::config;

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Preview { goal, today, .. } => {
            let today = config::resolve_today(*today)?;
            commands::preview::run(goal, today)
        }
        Commands::Amount { goal, .. } => commands::amount::run(goal),
        Commands::Deadline { goal, today, .. } => {
            let today = config::resolve_today(*today)?;
            commands::deadline::run(goal, today)
        }
        Commands::Span { start, end, .. } => commands::span::run_dates(start.date(), end.date()),
        Commands::Payload { goal, .. } => commands::payload::run(goal),
    }
}

use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Preview { json, .. }
        | Commands::Amount { json, .. }
        | Commands::Deadline { json, .. }
        | Commands::Span { json, .. }
        | Commands::Payload { json, .. } => {
            if *json {
                OutputMode::Json
            } else {
                OutputMode::Text
            }
        }
    }
}

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const GOAL_HELP_COMMAND: &str = "goalcast preview --help";
pub(crate) const GOAL_HELP_SECTION_TITLE: &str = "Goal Phrasing";

const AMOUNT_HINT: &str = "Include an amount, for example `$1200`, `1.2k` or `800 bucks`.";
const DEADLINE_HINT: &str =
    "Include a timeframe, for example `in 6 months`, `within 90 days` or `by June 2026`.";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_goal_help_data(self, data: Value) -> Self {
        self.with_data(merge_goal_help_data(data))
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `goalcast {cmd} --help` for usage."),
            None => "Run `goalcast --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn empty_goal_text(command: &str) -> Self {
        Self::invalid_argument_with_recovery(
            "Goal text is empty.",
            vec![
                "Describe the goal in one sentence, for example `Save $3000 in 10 months for a new laptop`."
                    .to_string(),
                format!("Run `goalcast {command} --help` for usage."),
            ],
        )
        .with_data(json!({
            "command_hint": command,
        }))
    }

    pub fn invalid_today(raw: &str, source: &str) -> Self {
        Self::invalid_argument_with_recovery(
            &format!("`{source}` must be a real calendar date in YYYY-MM-DD format; got `{raw}`."),
            vec![
                "Pass `--today YYYY-MM-DD` or unset `GOALCAST_TODAY` to use the system clock."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "source": source,
            "received": raw,
        }))
    }

    pub fn goal_unparseable(goal_text: &str, amount_found: bool, deadline_found: bool) -> Self {
        let mut recovery_steps = Vec::new();
        if !amount_found {
            recovery_steps.push(AMOUNT_HINT.to_string());
        }
        if !deadline_found {
            recovery_steps.push(DEADLINE_HINT.to_string());
        }

        Self::new(
            "goal_unparseable",
            "Could not read both a target amount and a deadline from the goal text.",
            recovery_steps,
        )
        .with_goal_help_data(json!({
            "goal_text": goal_text,
            "amount_found": amount_found,
            "deadline_found": deadline_found,
        }))
    }

    pub fn amount_not_found(goal_text: &str) -> Self {
        Self::new(
            "amount_not_found",
            "No target amount was found in the goal text.",
            vec![AMOUNT_HINT.to_string()],
        )
        .with_goal_help_data(json!({
            "goal_text": goal_text,
        }))
    }

    pub fn deadline_not_found(goal_text: &str) -> Self {
        Self::new(
            "deadline_not_found",
            "No deadline was found in the goal text.",
            vec![DEADLINE_HINT.to_string()],
        )
        .with_goal_help_data(json!({
            "goal_text": goal_text,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

fn merge_goal_help_data(mut data: Value) -> Value {
    if !data.is_object() {
        data = json!({});
    }

    if let Some(object) = data.as_object_mut() {
        object.insert(
            "help_command".to_string(),
            Value::String(GOAL_HELP_COMMAND.to_string()),
        );
        object.insert(
            "help_section_title".to_string(),
            Value::String(GOAL_HELP_SECTION_TITLE.to_string()),
        );
    }

    data
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn unparseable_goal_only_hints_missing_parts() {
        let error = ClientError::goal_unparseable("$500", true, false);
        assert_eq!(error.code, "goal_unparseable");
        assert_eq!(error.recovery_steps.len(), 1);
        assert!(error.recovery_steps[0].contains("timeframe"));

        let data = error.data.unwrap_or_default();
        assert_eq!(data["amount_found"], true);
        assert_eq!(data["deadline_found"], false);
        assert_eq!(data["help_command"], "goalcast preview --help");
    }

    #[test]
    fn unparseable_goal_without_anything_lists_both_hints() {
        let error = ClientError::goal_unparseable("hello", false, false);
        assert_eq!(error.recovery_steps.len(), 2);
        assert!(error.recovery_steps[0].contains("amount"));
        assert!(error.recovery_steps[1].contains("timeframe"));
    }

    #[test]
    fn invalid_argument_for_command_carries_hint() {
        let error = ClientError::invalid_argument_for_command("bad date", Some("span"));
        assert_eq!(error.code, "invalid_argument");
        assert_eq!(
            error.recovery_steps,
            vec!["Run `goalcast span --help` for usage.".to_string()]
        );
        let data = error.data.unwrap_or_default();
        assert_eq!(data["command_hint"], "span");
    }

    #[test]
    fn invalid_argument_without_command_points_at_root_help() {
        let error = ClientError::invalid_argument_for_command("unrecognized subcommand", None);
        assert_eq!(
            error.recovery_steps,
            vec!["Run `goalcast --help` for usage.".to_string()]
        );
        assert!(error.data.is_none());
    }
}

use crate::ClientResult;
use crate::commands::common::require_goal_text;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::forecast::{FILE_FIELD, ForecastGoalField, GOAL_FIELD};
use crate::contracts::types::PayloadData;

const COMMAND: &str = "payload";

/// Builds the form fields the forecasting service expects for `goal_text`.
/// The sentence is sent as typed; the service does its own parsing.
pub fn run(goal_text: &str) -> ClientResult<SuccessEnvelope> {
    require_goal_text(goal_text, COMMAND)?;
    let goal_value = ForecastGoalField::new(goal_text).to_form_value()?;

    let data = PayloadData {
        file_field: FILE_FIELD.to_string(),
        goal_field: GOAL_FIELD.to_string(),
        goal_value,
    };
    success(COMMAND, data)
}

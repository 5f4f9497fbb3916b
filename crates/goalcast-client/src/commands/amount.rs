use crate::commands::common::require_goal_text;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AmountData;
use crate::goal::extract_amount_with_notation;
use crate::{ClientError, ClientResult};

const COMMAND: &str = "amount";

pub fn run(goal_text: &str) -> ClientResult<SuccessEnvelope> {
    let text = require_goal_text(goal_text, COMMAND)?;
    let Some(raw) = extract_amount_with_notation(text) else {
        return Err(ClientError::amount_not_found(text));
    };

    let data = AmountData {
        goal_text: text.to_string(),
        amount: raw.value,
        notation: raw.notation.as_str().to_string(),
    };
    success(COMMAND, data)
}

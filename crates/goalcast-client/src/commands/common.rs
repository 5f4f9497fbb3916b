use rust_decimal::{Decimal, RoundingStrategy};

use crate::{ClientError, ClientResult};

const MONEY_SCALE: u32 = 2;

pub(crate) fn require_goal_text<'a>(goal_text: &'a str, command: &str) -> ClientResult<&'a str> {
    let trimmed = goal_text.trim();
    if trimmed.is_empty() {
        return Err(ClientError::empty_goal_text(command));
    }
    Ok(trimmed)
}

pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{require_goal_text, round_money};

    #[test]
    fn money_rounds_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
        assert_eq!(round_money(dec!(300)), dec!(300));
    }

    #[test]
    fn blank_goal_text_is_rejected_with_command_hint() {
        let result = require_goal_text("  ", "amount");
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_argument");
            assert!(
                error
                    .recovery_steps
                    .iter()
                    .any(|step| step.contains("goalcast amount --help"))
            );
        }
        assert_eq!(require_goal_text("  $5 in 2 days ", "amount").ok(), Some("$5 in 2 days"));
    }
}

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::commands::common::{require_goal_text, round_money};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::GoalPreviewData;
use crate::goal::calendar::{add_months_clamped, format_iso_date, last_day_of_month};
use crate::goal::{Deadline, GoalIntent, parse_parts};
use crate::{ClientError, ClientResult};

const COMMAND: &str = "preview";

pub fn run(goal_text: &str, today: NaiveDate) -> ClientResult<SuccessEnvelope> {
    let text = require_goal_text(goal_text, COMMAND)?;
    let Some(parts) = parse_parts(text, today) else {
        return Err(ClientError::empty_goal_text(COMMAND));
    };

    let (Some(amount), Some(deadline), Some(intent)) =
        (parts.amount, parts.deadline, parts.intent())
    else {
        return Err(ClientError::goal_unparseable(
            text,
            parts.amount.is_some(),
            parts.deadline.is_some(),
        ));
    };

    let deadline_date = match deadline {
        Deadline::Absolute(date) => date,
        Deadline::Relative(_) => month_end_after(today, intent.months),
    };

    let data = GoalPreviewData {
        goal_text: text.to_string(),
        today: format_iso_date(&today),
        amount: round_money(intent.amount),
        amount_notation: amount.notation.as_str().to_string(),
        months: intent.months,
        deadline_kind: deadline.kind().to_string(),
        deadline: format_iso_date(&deadline_date),
        required_monthly: required_monthly(&intent),
    };

    success(COMMAND, data)
}

/// Monthly saving needed to reach the intent's amount, to the cent.
pub fn required_monthly(intent: &GoalIntent) -> Decimal {
    round_money(intent.amount / Decimal::from(intent.months))
}

/// Last day of the month reached `months` months after `today`.
fn month_end_after(today: NaiveDate, months: u32) -> NaiveDate {
    let offset = i32::try_from(months).unwrap_or(i32::MAX);
    let shifted = add_months_clamped(today, offset);
    last_day_of_month(shifted.year(), shifted.month()).unwrap_or(shifted)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::{month_end_after, required_monthly, run};
    use crate::goal::GoalIntent;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    #[test]
    fn required_monthly_rounds_to_cents() {
        let intent = GoalIntent {
            amount: dec!(1000),
            months: 3,
        };
        assert_eq!(required_monthly(&intent), dec!(333.33));

        let even = GoalIntent {
            amount: dec!(3000),
            months: 10,
        };
        assert_eq!(required_monthly(&even), dec!(300));
    }

    #[test]
    fn relative_deadline_lands_on_a_month_end() {
        assert_eq!(month_end_after(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(month_end_after(date(2026, 10, 16), 10), date(2027, 8, 31));
    }

    #[test]
    fn preview_reports_amount_months_and_monthly_rate() {
        let response = run("Save $3000 in 10 months for a new laptop", date(2026, 10, 16));
        assert!(response.is_ok());
        if let Ok(envelope) = response {
            assert_eq!(envelope.command, "preview");
            assert_eq!(envelope.data["amount"], 3000.0);
            assert_eq!(envelope.data["months"], 10);
            assert_eq!(envelope.data["required_monthly"], 300.0);
            assert_eq!(envelope.data["deadline_kind"], "relative");
            assert_eq!(envelope.data["deadline"], "2027-08-31");
            assert_eq!(envelope.data["amount_notation"], "currency_symbol");
        }
    }

    #[test]
    fn preview_with_absolute_deadline_keeps_the_named_date() {
        let response = run("$2,500 by 12/31/2026 for moving costs", date(2026, 10, 16));
        assert!(response.is_ok());
        if let Ok(envelope) = response {
            assert_eq!(envelope.data["months"], 3);
            assert_eq!(envelope.data["deadline_kind"], "absolute");
            assert_eq!(envelope.data["deadline"], "2026-12-31");
            let required = envelope.data["required_monthly"].as_f64().unwrap_or_default();
            assert!((required - 833.33).abs() < 1e-9);
        }
    }

    #[test]
    fn preview_without_deadline_is_unparseable() {
        let response = run("$500", date(2026, 10, 16));
        assert!(response.is_err());
        if let Err(error) = response {
            assert_eq!(error.code, "goal_unparseable");
            let data = error.data.unwrap_or_default();
            assert_eq!(data["amount_found"], true);
            assert_eq!(data["deadline_found"], false);
        }
    }

    #[test]
    fn preview_of_blank_text_is_invalid_argument() {
        let response = run("   ", date(2026, 10, 16));
        assert!(response.is_err());
        if let Err(error) = response {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}

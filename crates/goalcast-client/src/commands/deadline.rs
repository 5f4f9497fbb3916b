use chrono::NaiveDate;

use crate::commands::common::require_goal_text;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DeadlineData, DurationData};
use crate::goal::calendar::format_iso_date;
use crate::goal::{Deadline, extract_deadline};
use crate::{ClientError, ClientResult};

const COMMAND: &str = "deadline";

pub fn run(goal_text: &str, today: NaiveDate) -> ClientResult<SuccessEnvelope> {
    let text = require_goal_text(goal_text, COMMAND)?;
    let Some(deadline) = extract_deadline(text, today) else {
        return Err(ClientError::deadline_not_found(text));
    };

    let (date, duration) = match deadline {
        Deadline::Absolute(value) => (Some(format_iso_date(&value)), None),
        Deadline::Relative(value) => (
            None,
            Some(DurationData {
                count: value.count,
                unit: value.unit.as_str().to_string(),
            }),
        ),
    };

    let data = DeadlineData {
        goal_text: text.to_string(),
        today: format_iso_date(&today),
        kind: deadline.kind().to_string(),
        date,
        duration,
        months: deadline.months_from(today),
    };
    success(COMMAND, data)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::run;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default()
    }

    #[test]
    fn absolute_deadline_reports_date_and_months() {
        let response = run("by next March", today());
        assert!(response.is_ok());
        if let Ok(envelope) = response {
            assert_eq!(envelope.data["kind"], "absolute");
            assert_eq!(envelope.data["date"], "2027-03-31");
            assert_eq!(envelope.data["months"], 6);
            assert!(envelope.data.get("duration").is_none());
        }
    }

    #[test]
    fn relative_deadline_reports_duration() {
        let response = run("within 90 days", today());
        assert!(response.is_ok());
        if let Ok(envelope) = response {
            assert_eq!(envelope.data["kind"], "relative");
            assert_eq!(envelope.data["duration"]["count"], 90);
            assert_eq!(envelope.data["duration"]["unit"], "day");
            assert_eq!(envelope.data["months"], 3);
            assert!(envelope.data.get("date").is_none());
        }
    }

    #[test]
    fn missing_deadline_is_an_error() {
        let response = run("Save $500", today());
        assert!(response.is_err());
        if let Err(error) = response {
            assert_eq!(error.code, "deadline_not_found");
        }
    }
}

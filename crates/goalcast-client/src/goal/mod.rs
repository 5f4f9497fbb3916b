//! Reads savings goals written as short sentences, for example
//! "Save $3000 in 10 months for a new laptop", into an amount and a month
//! count.
//!
//! Recognition is pattern based. Each notation is an independent matcher and
//! the first one that matches wins, so ambiguous phrasing always resolves the
//! same way. Nothing here reads the clock: every entry point that needs the
//! current date takes it as an argument.

pub mod amount;
pub mod calendar;
pub mod deadline;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

pub use amount::{AmountNotation, RawAmount, extract_amount, extract_amount_with_notation};
pub use calendar::months_between;
pub use deadline::{Deadline, DurationUnit, RelativeDuration, extract_deadline};

/// A goal that names both how much to save and by when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalIntent {
    pub amount: Decimal,
    pub months: u32,
}

/// Parses `text` relative to `now`. Returns `None` unless both an amount and
/// a deadline of at least one month are present.
pub fn parse(text: &str, now: NaiveDate) -> Option<GoalIntent> {
    parse_parts(text, now).and_then(|parts| parts.intent())
}

/// Extraction results before they are collapsed into a [`GoalIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalParts {
    pub amount: Option<RawAmount>,
    pub deadline: Option<Deadline>,
    pub months: Option<u32>,
}

impl GoalParts {
    pub fn intent(&self) -> Option<GoalIntent> {
        let amount = self.amount?.value;
        let months = self.months.filter(|months| *months > 0)?;
        Some(GoalIntent { amount, months })
    }
}

/// Runs both extractors once. `None` only for blank text.
pub fn parse_parts(text: &str, now: NaiveDate) -> Option<GoalParts> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let amount = extract_amount_with_notation(trimmed);
    let deadline = extract_deadline(trimmed, now);
    let months = deadline.map(|value| value.months_from(now));
    debug!(
        amount_found = amount.is_some(),
        deadline_kind = deadline.map(Deadline::kind),
        months,
        "parsed goal text"
    );

    Some(GoalParts {
        amount,
        deadline,
        months,
    })
}

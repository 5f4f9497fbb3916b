use chrono::NaiveDate;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SpanData;
use crate::goal::calendar::{format_iso_date, parse_iso_date};
use crate::goal::months_between;
use crate::{ClientError, ClientResult};

const COMMAND: &str = "span";

pub fn run(start: &str, end: &str) -> ClientResult<SuccessEnvelope> {
    let start_date = parse_date_strict(start, "start")?;
    let end_date = parse_date_strict(end, "end")?;
    run_dates(start_date, end_date)
}

/// Same as [`run`] for dates the caller has already validated.
pub fn run_dates(start: NaiveDate, end: NaiveDate) -> ClientResult<SuccessEnvelope> {
    let data = SpanData {
        start: format_iso_date(&start),
        end: format_iso_date(&end),
        months: months_between(start, end),
    };
    success(COMMAND, data)
}

fn parse_date_strict(value: &str, field_name: &str) -> ClientResult<NaiveDate> {
    parse_iso_date(value).ok_or_else(|| {
        ClientError::invalid_argument_for_command(
            &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
            Some(COMMAND),
        )
    })
}

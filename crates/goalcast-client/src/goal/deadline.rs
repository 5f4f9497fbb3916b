use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use super::calendar::{last_day_of_month, months_between};

const MONTH_NAMES: &str = "(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)";

lazy_static! {
    static ref ISO_DATE_REGEX: Regex =
        Regex::new(r"(?i)\bby\s+([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[^0-9]|$)")
            .expect("Invalid regex pattern");

    static ref SLASH_DATE_REGEX: Regex =
        Regex::new(r"(?i)\bby\s+([0-9]{1,2})/([0-9]{1,2})/([0-9]{4}|[0-9]{2})\b")
            .expect("Invalid regex pattern");

    /// `by June`, `by June 5, 2026`, `by jun 2027`.
    static ref MONTH_NAME_REGEX: Regex = Regex::new(&format!(
        r"(?i)\bby\s+{MONTH_NAMES}\b(?:\s+([0-9]{{1,2}})(?:st|nd|rd|th)?\b(?:\s*,)?)?(?:\s*([0-9]{{4}})\b)?"
    ))
    .expect("Invalid regex pattern");

    static ref END_OF_MONTH_REGEX: Regex = Regex::new(&format!(
        r"(?i)\bby\s+(?:the\s+)?end\s+of\s+{MONTH_NAMES}\b(?:\s*([0-9]{{4}})\b)?"
    ))
    .expect("Invalid regex pattern");

    static ref NEXT_MONTH_REGEX: Regex =
        Regex::new(&format!(r"(?i)\bby\s+next\s+{MONTH_NAMES}\b"))
            .expect("Invalid regex pattern");

    static ref RELATIVE_REGEX: Regex =
        Regex::new(r"(?i)\b(?:in|within)\s+([0-9]{1,4})\s*(days?|months?|years?)\b")
            .expect("Invalid regex pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Day,
    Month,
    Year,
}

impl DurationUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        let lowered = word.to_ascii_lowercase();
        if lowered.starts_with("day") {
            return Some(Self::Day);
        }
        if lowered.starts_with("month") {
            return Some(Self::Month);
        }
        if lowered.starts_with("year") {
            return Some(Self::Year);
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDuration {
    pub count: u32,
    pub unit: DurationUnit,
}

impl RelativeDuration {
    /// Whole months covered by the duration, never less than one.
    /// Days convert at thirty per month, rounded up.
    pub fn months(self) -> u32 {
        let months = match self.unit {
            DurationUnit::Day => self.count.div_ceil(30),
            DurationUnit::Month => self.count,
            DurationUnit::Year => self.count.saturating_mul(12),
        };
        months.max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    Absolute(NaiveDate),
    Relative(RelativeDuration),
}

impl Deadline {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Absolute(_) => "absolute",
            Self::Relative(_) => "relative",
        }
    }

    /// Month count from `now` until the deadline.
    pub fn months_from(self, now: NaiveDate) -> u32 {
        match self {
            Self::Absolute(date) => months_between(now, date),
            Self::Relative(duration) => duration.months(),
        }
    }
}

type AbsoluteMatcher = fn(&str, NaiveDate) -> Option<NaiveDate>;

/// `by …` notations, tried in order before any relative duration.
const ABSOLUTE_MATCHERS: [(&str, AbsoluteMatcher); 5] = [
    ("iso_date", match_iso_date),
    ("slash_date", match_slash_date),
    ("month_name", match_month_name),
    ("end_of_month", match_end_of_month),
    ("next_month", match_next_month),
];

pub fn extract_deadline(text: &str, now: NaiveDate) -> Option<Deadline> {
    for (pattern, matcher) in ABSOLUTE_MATCHERS {
        if let Some(date) = matcher(text, now) {
            debug!(pattern, date = %date, "matched absolute deadline");
            return Some(Deadline::Absolute(date));
        }
    }

    let duration = match_relative_duration(text)?;
    debug!(
        count = duration.count,
        unit = duration.unit.as_str(),
        "matched relative deadline"
    );
    Some(Deadline::Relative(duration))
}

fn match_iso_date(text: &str, _now: NaiveDate) -> Option<NaiveDate> {
    ISO_DATE_REGEX.captures_iter(text).find_map(|captures| {
        let year = capture_number::<i32>(&captures, 1)?;
        let month = capture_number::<u32>(&captures, 2)?;
        let day = capture_number::<u32>(&captures, 3)?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

fn match_slash_date(text: &str, _now: NaiveDate) -> Option<NaiveDate> {
    SLASH_DATE_REGEX.captures_iter(text).find_map(|captures| {
        let month = capture_number::<u32>(&captures, 1)?;
        let day = capture_number::<u32>(&captures, 2)?;
        let raw_year = captures.get(3)?.as_str();
        let mut year = raw_year.parse::<i32>().ok()?;
        if raw_year.len() == 2 {
            year += 2000;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

fn match_month_name(text: &str, now: NaiveDate) -> Option<NaiveDate> {
    MONTH_NAME_REGEX.captures_iter(text).find_map(|captures| {
        let month = month_number(captures.get(1)?.as_str())?;
        let year = capture_number::<i32>(&captures, 3).unwrap_or(now.year());
        match capture_number::<u32>(&captures, 2) {
            Some(day) => NaiveDate::from_ymd_opt(year, month, day),
            None => last_day_of_month(year, month),
        }
    })
}

fn match_end_of_month(text: &str, now: NaiveDate) -> Option<NaiveDate> {
    END_OF_MONTH_REGEX.captures_iter(text).find_map(|captures| {
        let month = month_number(captures.get(1)?.as_str())?;
        let year = capture_number::<i32>(&captures, 2).unwrap_or(now.year());
        last_day_of_month(year, month)
    })
}

fn match_next_month(text: &str, now: NaiveDate) -> Option<NaiveDate> {
    NEXT_MONTH_REGEX.captures_iter(text).find_map(|captures| {
        let month = month_number(captures.get(1)?.as_str())?;
        let mut year = now.year();
        if month <= now.month() {
            year += 1;
        }
        last_day_of_month(year, month)
    })
}

fn match_relative_duration(text: &str) -> Option<RelativeDuration> {
    RELATIVE_REGEX.captures_iter(text).find_map(|captures| {
        let count = capture_number::<u32>(&captures, 1)?;
        let unit = DurationUnit::from_word(captures.get(2)?.as_str())?;
        Some(RelativeDuration { count, unit })
    })
}

fn capture_number<T: std::str::FromStr>(captures: &Captures<'_>, index: usize) -> Option<T> {
    captures.get(index)?.as_str().parse::<T>().ok()
}

fn month_number(name: &str) -> Option<u32> {
    let lowered = name.to_ascii_lowercase();
    let month = match lowered.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use goalcast_client::goal::calendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDate(pub NaiveDate);

impl IsoDate {
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    calendar::parse_iso_date(value)
        .map(IsoDate)
        .ok_or_else(|| "date must be a real calendar date in YYYY-MM-DD format".to_string())
}

/// Extended help shown after `goalcast preview --help`.
pub const GOAL_PHRASING_AFTER_HELP: &str = "\
How goal text is read:
  Write the goal as one sentence and quote it so the shell keeps it whole.
  Use single quotes when the amount starts with `$`.
  Example: goalcast preview 'Save $3000 in 10 months for a new laptop'

  A goal needs an amount and a deadline. Other words are ignored.

Amount (the first matching form wins):
  1. Dollar sign:      $3,000   $1200.50   $ 450
  2. Currency word:    800 bucks   1200 usd   950 dollars
  3. Magnitude letter: 3k   1.2m   2b   $2.5k

Deadline (a `by ...` date wins over `in ...`):
  by 2026-06-30            ISO date
  by 12/31/2026, by 5/6/27 month/day/year, two-digit years are 20YY
  by June 2026             last day of June 2026
  by June 5, 2026          that exact day
  by end of June [2026]    last day of June (this year when no year)
  by next March            last day of the next March still ahead
  in 6 months              also `within`, with days, months or years
                           days count as months of 30, rounded up

Month count:
  Absolute dates count whole calendar months from today, rounded up when the
  deadline's day of month is on or after today's. The count is never below 1.

Today's date:
  Taken from --today, then the GOALCAST_TODAY environment variable, then the
  system clock.
";

#[derive(Debug, Parser)]
#[command(
    name = "goalcast",
    version,
    about = "savings goal parser",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read a goal sentence into amount, months and required monthly saving
    #[command(after_long_help = GOAL_PHRASING_AFTER_HELP)]
    Preview {
        /// Goal sentence, quoted as one argument
        goal: String,
        /// Date to count months from (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        #[arg(long)]
        json: bool,
    },
    /// Show only the target amount found in a goal sentence
    #[command(after_long_help = GOAL_PHRASING_AFTER_HELP)]
    Amount {
        /// Goal sentence, quoted as one argument
        goal: String,
        #[arg(long)]
        json: bool,
    },
    /// Show only the deadline found in a goal sentence
    #[command(after_long_help = GOAL_PHRASING_AFTER_HELP)]
    Deadline {
        /// Goal sentence, quoted as one argument
        goal: String,
        /// Date to count months from (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<IsoDate>,
        #[arg(long)]
        json: bool,
    },
    /// Count whole calendar months between two dates, rounded up
    Span {
        /// Start date (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        start: IsoDate,
        /// Deadline date (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        end: IsoDate,
        #[arg(long)]
        json: bool,
    },
    /// Print the form fields a forecast request carries for a goal sentence
    Payload {
        /// Goal sentence, quoted as one argument
        goal: String,
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

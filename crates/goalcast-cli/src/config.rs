use chrono::{Local, NaiveDate};
use goalcast_client::goal::calendar::parse_iso_date;
use goalcast_client::{ClientError, ClientResult};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::IsoDate;

pub const TODAY_ENV: &str = "GOALCAST_TODAY";
pub const LOG_ENV: &str = "GOALCAST_LOG";

const FALLBACK_LOG_ENV: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolves the date months are counted from: `--today`, then
/// `GOALCAST_TODAY`, then the local clock.
pub fn resolve_today(flag: Option<IsoDate>) -> ClientResult<NaiveDate> {
    let from_env = std::env::var(TODAY_ENV).ok();
    resolve_today_from(flag.map(IsoDate::date), from_env.as_deref(), || {
        Local::now().date_naive()
    })
}

fn resolve_today_from<F>(
    flag: Option<NaiveDate>,
    from_env: Option<&str>,
    clock: F,
) -> ClientResult<NaiveDate>
where
    F: FnOnce() -> NaiveDate,
{
    if let Some(today) = flag {
        return Ok(today);
    }

    if let Some(raw) = from_env.map(str::trim).filter(|value| !value.is_empty()) {
        return parse_iso_date(raw).ok_or_else(|| ClientError::invalid_today(raw, TODAY_ENV));
    }

    Ok(clock())
}

/// Logs go to stderr so stdout stays parseable in `--json` mode.
pub fn init_tracing() {
    let directives = log_filter_directives(
        std::env::var(LOG_ENV).ok().as_deref(),
        std::env::var(FALLBACK_LOG_ENV).ok().as_deref(),
    );
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn log_filter_directives(primary: Option<&str>, fallback: Option<&str>) -> String {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DEFAULT_LOG_FILTER, TODAY_ENV, log_filter_directives, resolve_today_from};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    fn clock() -> NaiveDate {
        date(2030, 1, 1)
    }

    #[test]
    fn flag_wins_over_env_and_clock() {
        let resolved = resolve_today_from(Some(date(2026, 10, 16)), Some("2025-01-01"), clock);
        assert!(resolved.is_ok());
        if let Ok(today) = resolved {
            assert_eq!(today, date(2026, 10, 16));
        }
    }

    #[test]
    fn env_wins_over_clock() {
        let resolved = resolve_today_from(None, Some(" 2025-01-01 "), clock);
        assert!(resolved.is_ok());
        if let Ok(today) = resolved {
            assert_eq!(today, date(2025, 1, 1));
        }
    }

    #[test]
    fn blank_env_falls_back_to_clock() {
        let resolved = resolve_today_from(None, Some("   "), clock);
        assert!(resolved.is_ok());
        if let Ok(today) = resolved {
            assert_eq!(today, clock());
        }
    }

    #[test]
    fn invalid_env_date_is_an_argument_error() {
        let resolved = resolve_today_from(None, Some("2025-02-30"), clock);
        assert!(resolved.is_err());
        if let Err(error) = resolved {
            assert_eq!(error.code, "invalid_argument");
            assert!(error.message.contains(TODAY_ENV));
            assert!(error.message.contains("2025-02-30"));
        }
    }

    #[test]
    fn log_filter_prefers_primary_then_fallback_then_default() {
        assert_eq!(log_filter_directives(Some("debug"), Some("info")), "debug");
        assert_eq!(log_filter_directives(Some(" "), Some("info")), "info");
        assert_eq!(log_filter_directives(None, None), DEFAULT_LOG_FILTER);
    }
}

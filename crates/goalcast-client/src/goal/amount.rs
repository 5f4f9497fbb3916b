use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, trace};

lazy_static! {
    /// `$3,000`, `$ 1200.50`. The trailing class stands in for a
    /// "no digit follows" lookahead so `$12` never matches inside `$123`.
    static ref CURRENCY_SYMBOL_REGEX: Regex =
        Regex::new(r"\$\s*([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(\.[0-9]{1,2})?(?:[^0-9]|$)")
            .expect("Invalid regex pattern");

    /// `800 bucks`, `1,200.50 USD`.
    static ref CURRENCY_WORD_REGEX: Regex =
        Regex::new(r"(?i)([0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(\.[0-9]{1,2})?\s*(?:usd|dollars|bucks)")
            .expect("Invalid regex pattern");

    /// `3k`, `1.2m`, `2B`. The letter has to end the word.
    static ref MAGNITUDE_SUFFIX_REGEX: Regex =
        Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)([kmb])\b")
            .expect("Invalid regex pattern");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountNotation {
    CurrencySymbol,
    CurrencyWord,
    MagnitudeSuffix,
}

impl AmountNotation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrencySymbol => "currency_symbol",
            Self::CurrencyWord => "currency_word",
            Self::MagnitudeSuffix => "magnitude_suffix",
        }
    }
}

/// An amount in currency units together with the notation it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAmount {
    pub value: Decimal,
    pub notation: AmountNotation,
}

type AmountMatcher = fn(&str) -> Option<RawAmount>;

/// Tried in order; the first notation that matches decides the amount.
const AMOUNT_MATCHERS: [AmountMatcher; 3] = [
    match_currency_symbol,
    match_currency_word,
    match_magnitude_suffix,
];

pub fn extract_amount(text: &str) -> Option<Decimal> {
    extract_amount_with_notation(text).map(|raw| raw.value)
}

pub fn extract_amount_with_notation(text: &str) -> Option<RawAmount> {
    let raw = AMOUNT_MATCHERS.iter().find_map(|matcher| matcher(text))?;
    debug!(
        notation = raw.notation.as_str(),
        amount = %raw.value,
        "matched goal amount"
    );
    if raw.value <= Decimal::ZERO {
        return None;
    }
    Some(raw)
}

/// A dollar amount directly followed by a standalone `k`, `m` or `b` is
/// scaled here, so comma grouping such as `$1,500k` survives the suffix.
fn match_currency_symbol(text: &str) -> Option<RawAmount> {
    for captures in CURRENCY_SYMBOL_REGEX.captures_iter(text) {
        let Some(whole) = captures.get(1) else {
            continue;
        };
        let digits = whole.as_str().replace(',', "");
        let fraction = captures.get(2).map_or("", |value| value.as_str());
        let Some(value) = parse_decimal(&format!("{digits}{fraction}")) else {
            continue;
        };

        let number_end = captures.get(2).map_or(whole.end(), |value| value.end());
        let Some(letter) = standalone_magnitude_letter(&text[number_end..]) else {
            return Some(RawAmount {
                value,
                notation: AmountNotation::CurrencySymbol,
            });
        };
        match scale_by_magnitude(value, letter) {
            Some(scaled) => {
                return Some(RawAmount {
                    value: scaled,
                    notation: AmountNotation::MagnitudeSuffix,
                });
            }
            None => trace!(
                candidate = &text[whole.start()..number_end],
                "magnitude-suffixed dollar amount is outside the decimal range"
            ),
        }
    }
    None
}

fn match_currency_word(text: &str) -> Option<RawAmount> {
    CURRENCY_WORD_REGEX.captures_iter(text).find_map(|captures| {
        let digits = captures.get(1)?.as_str().replace(',', "");
        let fraction = captures.get(2).map_or("", |value| value.as_str());
        Some(RawAmount {
            value: parse_decimal(&format!("{digits}{fraction}"))?,
            notation: AmountNotation::CurrencyWord,
        })
    })
}

fn match_magnitude_suffix(text: &str) -> Option<RawAmount> {
    MAGNITUDE_SUFFIX_REGEX
        .captures_iter(text)
        .find_map(|captures| {
            let base = parse_decimal(captures.get(1)?.as_str())?;
            let letter = captures.get(2)?.as_str().chars().next()?;
            Some(RawAmount {
                value: scale_by_magnitude(base, letter)?,
                notation: AmountNotation::MagnitudeSuffix,
            })
        })
}

fn scale_by_magnitude(base: Decimal, letter: char) -> Option<Decimal> {
    let multiplier = match letter.to_ascii_lowercase() {
        'k' => Decimal::from(1_000u32),
        'm' => Decimal::from(1_000_000u32),
        'b' => Decimal::from(1_000_000_000u32),
        _ => return None,
    };
    base.checked_mul(multiplier)
}

fn standalone_magnitude_letter(rest: &str) -> Option<char> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !matches!(first.to_ascii_lowercase(), 'k' | 'm' | 'b') {
        return None;
    }
    if chars.next().is_some_and(char::is_alphanumeric) {
        return None;
    }
    Some(first)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    match Decimal::from_str(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            trace!(raw, %error, "amount candidate is outside the decimal range");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::{AmountNotation, extract_amount, extract_amount_with_notation};

    #[test]
    fn reads_currency_symbol_amounts() {
        assert_eq!(extract_amount("$3,000"), Some(dec!(3000)));
        assert_eq!(extract_amount("$1200.50"), Some(dec!(1200.5)));
        assert_eq!(extract_amount("Save $ 450 for shoes"), Some(dec!(450)));
        assert_eq!(extract_amount("$1,250,000.5 house"), Some(dec!(1250000.5)));
    }

    #[test]
    fn currency_symbol_never_matches_a_number_prefix() {
        assert_eq!(extract_amount("$123"), Some(dec!(123)));
        assert_eq!(extract_amount("Save $3000 in 10 months"), Some(dec!(3000)));
    }

    #[test]
    fn currency_symbol_drops_a_fraction_longer_than_two_digits() {
        assert_eq!(extract_amount("$12.345"), Some(dec!(12)));
    }

    #[test]
    fn reads_currency_word_amounts() {
        assert_eq!(extract_amount("800 bucks"), Some(dec!(800)));
        assert_eq!(extract_amount("about 1200.25 USD"), Some(dec!(1200.25)));
        assert_eq!(extract_amount("950dollars"), Some(dec!(950)));
    }

    #[test]
    fn reads_magnitude_suffixed_amounts() {
        assert_eq!(extract_amount("3k"), Some(dec!(3000)));
        assert_eq!(extract_amount("1.2m"), Some(dec!(1200000)));
        assert_eq!(extract_amount("a 2B fund"), Some(dec!(2000000000)));
        assert_eq!(extract_amount("Put aside 2.5K"), Some(dec!(2500)));
    }

    #[test]
    fn magnitude_letter_must_end_the_word() {
        assert_eq!(extract_amount("in 10months"), None);
        assert_eq!(extract_amount("in 10 months"), None);
    }

    #[test]
    fn currency_symbol_with_magnitude_letter_is_scaled() {
        let raw = extract_amount_with_notation("$2.5k by December 2026");
        assert!(raw.is_some());
        if let Some(amount) = raw {
            assert_eq!(amount.value, dec!(2500));
            assert_eq!(amount.notation, AmountNotation::MagnitudeSuffix);
        }
    }

    #[test]
    fn grouped_dollar_amount_keeps_its_commas_under_a_magnitude_letter() {
        let raw = extract_amount_with_notation("Save $1,500k for a house by 2030-01-01");
        assert!(raw.is_some());
        if let Some(amount) = raw {
            assert_eq!(amount.value, dec!(1500000));
            assert_eq!(amount.notation, AmountNotation::MagnitudeSuffix);
        }
        assert_eq!(extract_amount("$10,000k"), Some(dec!(10000000)));
        assert_eq!(extract_amount("$1,250.5k"), Some(dec!(1250500)));
    }

    #[test]
    fn dollar_amount_followed_by_a_word_is_not_scaled() {
        assert_eq!(extract_amount("$15 months"), Some(dec!(15)));
        assert_eq!(extract_amount("$3kg of flour"), Some(dec!(3)));
    }

    #[test]
    fn currency_word_reads_grouped_numbers() {
        let raw = extract_amount_with_notation("about 1,200 dollars");
        assert_eq!(raw.map(|amount| amount.value), Some(dec!(1200)));
        assert_eq!(
            raw.map(|amount| amount.notation),
            Some(AmountNotation::CurrencyWord)
        );
        assert_eq!(extract_amount("12,500.75 USD"), Some(dec!(12500.75)));
    }

    #[test]
    fn notations_are_tried_in_priority_order() {
        let symbol = extract_amount_with_notation("5k or $300 or 40 bucks");
        assert_eq!(
            symbol.map(|raw| raw.notation),
            Some(AmountNotation::CurrencySymbol)
        );
        assert_eq!(symbol.map(|raw| raw.value), Some(dec!(300)));

        let word = extract_amount_with_notation("5k or 40 bucks");
        assert_eq!(
            word.map(|raw| raw.notation),
            Some(AmountNotation::CurrencyWord)
        );
        assert_eq!(word.map(|raw| raw.value), Some(dec!(40)));
    }

    #[test]
    fn text_without_amounts_yields_none() {
        assert_eq!(extract_amount(""), None);
        assert_eq!(extract_amount("just some text with no numbers"), None);
        assert_eq!(extract_amount("in 6 months"), None);
        assert_eq!(extract_amount("$ for a trip"), None);
    }

    #[test]
    fn zero_amount_is_absent() {
        assert_eq!(extract_amount("$0 by June"), None);
    }

    #[test]
    fn out_of_range_numbers_are_skipped() {
        assert_eq!(extract_amount("$99999999999999999999999999999999"), None);
        assert_eq!(
            extract_amount("$99999999999999999999999999999999 or 20 bucks"),
            Some(dec!(20))
        );
        assert_eq!(extract_amount("79228162514264337593543950335k"), None);
    }
}

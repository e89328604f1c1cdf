//! Locale-aware display formatting, pt-BR conventions throughout.
//!
//! Currency renders as Brazilian Real ("R$ 1.234,50": thousands `.`, decimal
//! `,`, two places, half-up). Dates render as "05 de março" for highlight
//! captions, "05/03/24" for list rows and "março, 2024" for the month
//! navigator.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month};

use crate::Error;

/// pt-BR month names, indexed by `Month as u8 - 1`.
const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// The pt-BR name of `month`.
pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

/// Render `amount` as a Brazilian Real currency string, e.g. `R$ 1.234,50`.
///
/// Amounts are rounded half-up to two decimal places. Negative amounts
/// render with a leading minus, e.g. `-R$ 300,00`.
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    // Round before formatting; f64::round is half away from zero, which is
    // half-up for the magnitudes we feed it.
    let rounded = (amount * 100.0).round() / 100.0;

    let formatted_string = if rounded < 0.0 {
        negative_fmt.fmt_string(rounded.abs())
    } else if rounded > 0.0 {
        positive_fmt.fmt_string(rounded)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "R$ 0.00".to_owned()
    };

    // numfmt omits trailing zeros, so we must add them back ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    let formatted_string = match formatted_string.rfind('.') {
        None => format!("{formatted_string}.00"),
        Some(point) if formatted_string.len() - point == 2 => format!("{formatted_string}0"),
        Some(_) => formatted_string,
    };

    // numfmt writes en-US separators; swap them for the pt-BR convention.
    formatted_string
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect()
}

/// Parse a pt-BR currency string produced by [format_currency] back into an
/// amount.
///
/// # Errors
/// Returns an [Error::Parse] if `text` is not a pt-BR currency string.
pub fn parse_currency(text: &str) -> Result<f64, Error> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let digits = rest
        .strip_prefix("R$")
        .ok_or_else(|| Error::Parse(format!("not a pt-BR currency string: {text}")))?
        .trim()
        .replace('.', "")
        .replace(',', ".");

    let amount: f64 = digits
        .parse()
        .map_err(|_| Error::Parse(format!("not a pt-BR currency string: {text}")))?;

    Ok(if negative { -amount } else { amount })
}

/// Render `date` as a highlight caption date, e.g. `05 de março`.
pub fn format_day_month(date: Date) -> String {
    format!("{:02} de {}", date.day(), month_name(date.month()))
}

/// Render `date` as a transaction row date, e.g. `05/03/24`.
pub fn format_short_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        date.day(),
        date.month() as u8,
        date.year().rem_euclid(100)
    )
}

/// Render a month navigator label, e.g. `março, 2024`.
pub fn format_month_year(month: Month, year: i32) -> String {
    format!("{}, {year}", month_name(month))
}

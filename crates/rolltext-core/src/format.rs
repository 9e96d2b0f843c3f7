//! Number formatting with caller-supplied separators
//!
//! Nothing here asks the platform for locale data; separators and currency
//! placement arrive in a [`LocaleFormat`].

use serde::{Deserialize, Serialize};

/// Minus sign shown in front of negative currency amounts
pub const MINUS_SIGN: char = '\u{2212}';

/// Fraction digits beyond this are not representable in an `f64` anyway
pub const MAX_DECIMALS: usize = 17;

/// Where the currency symbol goes relative to the digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPlacement {
    #[default]
    Before,
    After,
}

/// Locale conventions injected by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub currency_symbol: String,
    pub currency_placement: CurrencyPlacement,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            currency_symbol: "$".to_string(),
            currency_placement: CurrencyPlacement::Before,
        }
    }
}

/// Insert `separator` between groups of three digits
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Format an integer with grouping, e.g. `-1234567` → `-1,234,567`
pub fn format_integer(value: i64, grouping_separator: char, signed: bool) -> String {
    let grouped = group_digits(&value.unsigned_abs().to_string(), grouping_separator);
    if signed && value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a decimal with a fixed number of fraction digits
///
/// Rounds half away from zero. Large values never switch to exponent
/// notation. `decimals` is capped at [`MAX_DECIMALS`].
pub fn format_decimal(value: f64, decimals: usize, locale: &LocaleFormat, signed: bool) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let rounded = round_to(value, decimals);
    let negative = rounded < 0.0;
    let fixed = format!("{:.*}", decimals, rounded.abs());

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut result = group_digits(integer, locale.grouping_separator);
    if let Some(fraction) = fraction {
        result.push(locale.decimal_separator);
        result.push_str(fraction);
    }

    if signed && negative {
        format!("-{}", result)
    } else {
        result
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let decimals = decimals.min(MAX_DECIMALS);
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// A currency amount split into its static parts and its rolling digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyText {
    /// Shown before everything else for negative amounts
    pub sign: Option<char>,
    /// Currency symbol when placed before the digits
    pub prefix: Option<String>,
    /// Unsigned formatted amount; this is the part that animates
    pub digits: String,
    /// Currency symbol when placed after the digits
    pub suffix: Option<String>,
}

impl CurrencyText {
    /// Everything joined with single spaces around the symbol
    pub fn to_display_string(&self) -> String {
        let mut out = String::new();
        if let Some(sign) = self.sign {
            out.push(sign);
        }
        if let Some(prefix) = &self.prefix {
            out.push_str(prefix);
            out.push(' ');
        }
        out.push_str(&self.digits);
        if let Some(suffix) = &self.suffix {
            out.push(' ');
            out.push_str(suffix);
        }
        out
    }
}

/// Split `amount` into sign, currency symbol and digits
pub fn format_currency(amount: f64, decimals: usize, locale: &LocaleFormat) -> CurrencyText {
    let symbol = locale.currency_symbol.clone();
    let (prefix, suffix) = match locale.currency_placement {
        CurrencyPlacement::Before => (Some(symbol), None),
        CurrencyPlacement::After => (None, Some(symbol)),
    };
    CurrencyText {
        sign: (round_to(amount, decimals) < 0.0).then_some(MINUS_SIGN),
        prefix,
        digits: format_decimal(amount, decimals, locale, false),
        suffix,
    }
}

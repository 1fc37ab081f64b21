use serde::{Deserialize, Serialize};

use crate::ledger::TransactionKind;

/// Amounts are always shown with two decimal places.
pub const DISPLAY_PRECISION: usize = 2;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("NGN")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 language tag; unknown tags use `1,234.56`.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag.split(|ch: char| ch == '-' || ch == '_').next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "de" | "es" | "it" | "pt" | "nl" | "id" | "tr" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" | "pl" | "sv" | "nb" | "fi" | "cs" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "NGN" => "₦".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "GHS" => "GH₵".into(),
        "KES" => "KSh".into(),
        "INR" => "₹".into(),
        _ => format!("{} ", code),
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: usize) -> String {
    let body = format!("{:.*}", precision, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut rendered = format!("{}{}", sign, group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(frac);
    }
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders `amount` as `₦1,234.50` (or `-₦1,234.50` when negative).
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let body = format_number(locale, amount.abs(), DISPLAY_PRECISION);
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

/// Renders an amount with the sign implied by the transaction type: `+₦5,000.00` / `-₦12.00`.
pub fn format_signed(
    amount: f64,
    kind: TransactionKind,
    code: &CurrencyCode,
    locale: &LocaleConfig,
) -> String {
    let body = format_currency_value(amount.abs(), code, locale);
    match kind {
        TransactionKind::Income => format!("+{}", body),
        TransactionKind::Expense => format!("-{}", body),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

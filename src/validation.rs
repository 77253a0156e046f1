//! Field Parsing
//!
//! ZIP codes, prices and postal code reduction.

use regex::Regex;
use std::sync::OnceLock;

static ZIP_RE: OnceLock<Regex> = OnceLock::new();
static FIVE_DIGITS_RE: OnceLock<Regex> = OnceLock::new();

fn zip_re() -> &'static Regex {
    ZIP_RE.get_or_init(|| Regex::new(r"^[0-9]{5}$").expect("ZIP pattern"))
}

fn five_digits_re() -> &'static Regex {
    FIVE_DIGITS_RE.get_or_init(|| Regex::new(r"[0-9]{5}").expect("postal code pattern"))
}

/// True iff the trimmed value is exactly five ASCII digits
pub fn is_valid_zip(value: &str) -> bool {
    zip_re().is_match(value.trim())
}

/// Outcome of reading a price field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedPrice {
    Blank,
    Invalid,
    Value(f64),
}

impl ParsedPrice {
    /// Blank or an explicit zero
    pub fn is_empty_or_zero(&self) -> bool {
        match self {
            ParsedPrice::Blank => true,
            ParsedPrice::Value(v) => *v == 0.0,
            ParsedPrice::Invalid => false,
        }
    }
}

/// Parse a raw price field. Negative and non-finite numbers are invalid.
pub fn parse_price(raw: &str) -> ParsedPrice {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedPrice::Blank;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => ParsedPrice::Value(v),
        _ => ParsedPrice::Invalid,
    }
}

/// First run of five consecutive digits in a postal code ("94103-1234" -> "94103")
pub fn extract_zip(postal_code: &str) -> Option<String> {
    five_digits_re()
        .find(postal_code)
        .map(|m| m.as_str().to_string())
}

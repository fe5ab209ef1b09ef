//! OR number parsing.
//!
//! An OR number is `OR<digits><letters>`, e.g. `OR235B`, possibly buried in
//! surrounding text. The digits locate the survey row; the trailing letters
//! disambiguate pipes cut from the same spool and are allowed to show up as a
//! pipe-number suffix.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::ReferenceError;

const OR_PATTERN: &str = r"(OR)([0-9]+)([a-zA-Z]*)";

fn or_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(OR_PATTERN).expect("OR pattern is a valid regex"))
}

/// Parsed components of an OR number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceCodeBreakdown {
    pub prefix_letters: String,
    /// Digit run as written, leading zeros included.
    pub digits: String,
    /// Row slot of the digit run, `u64::MAX` when it does not fit.
    pub numeric_id: u64,
    /// Trailing letters, empty when absent.
    pub suffix_letters: String,
}

impl ReferenceCodeBreakdown {
    pub fn has_suffix(&self) -> bool {
        !self.suffix_letters.is_empty()
    }
}

/// True when the code carries nothing but whitespace.
pub fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |s| s.trim().is_empty())
}

/// Fix the common `0R` slip (digit zero typed for the letter O).
/// Only the leftmost occurrence is replaced.
pub fn correct_typos(code: &str) -> String {
    code.replacen("0R", "OR", 1)
}

/// Parse an OR number into its components.
pub fn parse_reference_code(raw: &str) -> Result<ReferenceCodeBreakdown, ReferenceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ReferenceError::Blank);
    }

    let corrected = correct_typos(trimmed);
    let caps = or_regex()
        .captures(&corrected)
        .ok_or_else(|| ReferenceError::InvalidFormat(corrected.clone()))?;

    let digits = caps.get(2).map_or("", |m| m.as_str());
    // A digit-only run fails to parse only on overflow. Such ids saturate and
    // can only be matched by their digit string.
    let numeric_id: u64 = digits.parse().unwrap_or(u64::MAX);

    Ok(ReferenceCodeBreakdown {
        prefix_letters: caps.get(1).map_or("", |m| m.as_str()).to_string(),
        digits: digits.to_string(),
        numeric_id,
        suffix_letters: caps.get(3).map_or("", |m| m.as_str()).to_string(),
    })
}

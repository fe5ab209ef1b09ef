use std::fmt;

use crate::model::IgnoreReason;

/// Why a reference code could not be turned into a breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// Blank or whitespace-only code. Parsing is never attempted.
    Blank,
    /// No `OR<digits><letters>` run anywhere in the (corrected) code.
    InvalidFormat(String),
}

impl ReferenceError {
    /// The outcome reason reported for this failure.
    pub fn ignore_reason(&self) -> IgnoreReason {
        match self {
            Self::Blank => IgnoreReason::NoReferenceNumber,
            Self::InvalidFormat(_) => IgnoreReason::InvalidFormat,
        }
    }
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "no reference number"),
            Self::InvalidFormat(code) => write!(f, "invalid OR number format: '{code}'"),
        }
    }
}

impl std::error::Error for ReferenceError {}

//! UID validation
//!
//! A UID is accepted once it is all ASCII digits, at least [`MIN_UID_LEN`]
//! digits long and numerically at least [`MIN_UID_VALUE`]. Checks run in that
//! order and the first failing one decides the outcome.

use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of digits in a UID
pub const MIN_UID_LEN: usize = 8;

/// Smallest numeric value accepted as a UID
pub const MIN_UID_VALUE: u64 = 10_000_001;

/// How a validation outcome should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    None,
    Error,
    Warning,
    Success,
}

/// Result of classifying a candidate UID string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Nothing typed yet (or only whitespace)
    Empty,
    /// Contains something other than ASCII digits
    NonNumeric,
    /// All digits, but fewer than [`MIN_UID_LEN`]
    TooShort { len: usize },
    /// Long enough, but below [`MIN_UID_VALUE`]
    BelowMinimum,
    Valid,
}

impl Validation {
    pub fn severity(&self) -> Severity {
        match self {
            Validation::Empty => Severity::None,
            Validation::NonNumeric => Severity::Error,
            Validation::TooShort { .. } | Validation::BelowMinimum => Severity::Warning,
            Validation::Valid => Severity::Success,
        }
    }

    /// Inline message shown under the input. `Empty` has none.
    pub fn message(&self) -> Option<String> {
        match self {
            Validation::Empty => None,
            Validation::NonNumeric => Some("UID must contain digits only".to_string()),
            Validation::TooShort { len } => Some(format!(
                "UID must be at least {MIN_UID_LEN} digits (got {len})"
            )),
            Validation::BelowMinimum => {
                Some(format!("UID must be at least {MIN_UID_VALUE}"))
            }
            Validation::Valid => Some("UID looks valid".to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// True for outcomes that block submission and carry a message
    pub fn is_problem(&self) -> bool {
        matches!(self.severity(), Severity::Error | Severity::Warning)
    }
}

/// Classify `input` as a UID candidate
pub fn validate(input: &str) -> Validation {
    if input.trim().is_empty() {
        return Validation::Empty;
    }

    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Validation::NonNumeric;
    }

    if input.len() < MIN_UID_LEN {
        return Validation::TooShort { len: input.len() };
    }

    if below_minimum(input) {
        return Validation::BelowMinimum;
    }

    Validation::Valid
}

/// `digits` is non-empty and all ASCII digits
fn below_minimum(digits: &str) -> bool {
    let significant = digits.trim_start_matches('0');
    // u64 holds any 19-digit number; longer ones are far above the floor
    if significant.len() > 19 {
        return false;
    }
    match significant.parse::<u64>() {
        Ok(value) => value < MIN_UID_VALUE,
        // only reachable for an all-zero string
        Err(_) => true,
    }
}

/// A UID that passed [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(String);

impl Uid {
    pub fn parse(input: &str) -> Result<Self, Validation> {
        match validate(input) {
            Validation::Valid => Ok(Uid(input.to_string())),
            other => Err(other),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Uid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

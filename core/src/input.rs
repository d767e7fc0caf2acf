//! Loosely-typed ingestion of flag-value candidates.
//!
//! Flag values read from external sources (request payloads, spreadsheets,
//! scripting bridges) are not guaranteed to be integers. [`FlagInput`] keeps
//! the candidate's original kind so that the integer requirement can be
//! checked in one place, and so that rejections can name what was actually
//! given.

use crate::error::FlagError;

/// A flag-value candidate whose type is only known at runtime.
///
/// Only the [`Int`](FlagInput::Int) variant carries an integer; every other
/// variant is rejected with [`FlagError::TypeMismatch`] when bits are
/// requested. Whole-valued floats and numeric strings are deliberately not
/// coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlagInput<'a> {
    /// An integer candidate.
    Int(i64),
    /// A floating-point candidate. Never accepted, even for whole values.
    Float(f64),
    /// A boolean candidate.
    Bool(bool),
    /// A textual candidate. Never parsed, even if it looks numeric.
    Text(&'a str),
}

impl FlagInput<'_> {
    /// Name of this input's kind, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FlagInput::Int(_) => "integer",
            FlagInput::Float(_) => "float",
            FlagInput::Bool(_) => "boolean",
            FlagInput::Text(_) => "string",
        }
    }

    /// Extract the integer bits, rejecting every non-integer kind.
    pub fn as_bits(&self) -> Result<i64, FlagError> {
        match self {
            FlagInput::Int(value) => Ok(*value),
            other => Err(FlagError::TypeMismatch {
                found: other.kind(),
            }),
        }
    }
}

impl From<i64> for FlagInput<'_> {
    fn from(value: i64) -> Self {
        FlagInput::Int(value)
    }
}

impl From<i32> for FlagInput<'_> {
    fn from(value: i32) -> Self {
        FlagInput::Int(value.into())
    }
}

impl From<f64> for FlagInput<'_> {
    fn from(value: f64) -> Self {
        FlagInput::Float(value)
    }
}

impl From<bool> for FlagInput<'_> {
    fn from(value: bool) -> Self {
        FlagInput::Bool(value)
    }
}

impl<'a> From<&'a str> for FlagInput<'a> {
    fn from(value: &'a str) -> Self {
        FlagInput::Text(value)
    }
}

//! Error types for flag-enumeration operations.
//!
//! All failures are deterministic functions of their inputs: retrying any
//! operation with the same arguments produces the same error, so callers
//! should treat every variant as final.

use thiserror::Error;

/// Errors produced by flag validation, rendering, and bitmask derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// A non-integer reached an integer-only boundary.
    ///
    /// Only raised on the loosely-typed ingestion path ([`FlagInput`]); the
    /// typed API cannot produce it. `found` names the kind of input that was
    /// actually given.
    ///
    /// [`FlagInput`]: crate::input::FlagInput
    #[error("expected an integer flag value, got {found}")]
    TypeMismatch {
        /// Kind of the rejected input, e.g. `"string"`.
        found: &'static str,
    },

    /// An integer that is not a legal combination of the type's declared
    /// flags (it carries bits outside the enumeration's bitmask).
    #[error("{value} is not an acceptable value for {enum_name}")]
    InvalidFlagValue {
        /// Name of the enumeration type that rejected the value.
        enum_name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// An enumeration declares a constant that is neither 0 nor a positive
    /// power of two.
    ///
    /// This is a defect in the enumeration's own definition, not a runtime
    /// input error. It surfaces on the first bitmask computation for the
    /// type, is never cached, and recurs identically on every later attempt.
    #[error("declared value {value} of {enum_name} is not a bit flag")]
    InvalidFlagDefinition {
        /// Name of the enumeration type with the bad definition.
        enum_name: &'static str,
        /// The offending declared constant.
        value: i64,
    },
}

static_assertions::assert_impl_all!(FlagError: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FlagError::TypeMismatch { found: "string" };
        assert_eq!(err.to_string(), "expected an integer flag value, got string");

        let err = FlagError::InvalidFlagValue {
            enum_name: "Permission",
            value: 5,
        };
        assert_eq!(err.to_string(), "5 is not an acceptable value for Permission");

        let err = FlagError::InvalidFlagDefinition {
            enum_name: "Permission",
            value: 6,
        };
        assert_eq!(
            err.to_string(),
            "declared value 6 of Permission is not a bit flag"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = FlagError::InvalidFlagValue {
            enum_name: "Permission",
            value: 5,
        };
        assert_eq!(a.clone(), a);
        assert_ne!(
            a,
            FlagError::InvalidFlagValue {
                enum_name: "Permission",
                value: 7,
            }
        );
    }
}

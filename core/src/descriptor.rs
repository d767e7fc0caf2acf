//! The capability interface supplied by concrete flag-enumeration types.

use crate::error::FlagError;
use crate::input::FlagInput;
use crate::readable;
use crate::registry::FlagRegistry;

/// Declaration tables and type-level operations of one flag enumeration.
///
/// Implementors are zero-sized marker types describing an enumeration;
/// values of the enumeration are carried by [`FlagSet<E>`]. Most
/// implementations should be generated with [`flag_enum!`], which also
/// checks the tables at compile time; the trait can be implemented by hand,
/// in which case the tables are validated lazily on first
/// [`FlagRegistry`] access.
///
/// # Tables
///
/// ```
/// use pennant_core::{FlagEnum, FlagRegistry};
///
/// struct Color;
///
/// impl FlagEnum for Color {
///     const NAME: &'static str = "Color";
///     const VALUES: &'static [i64] = &[1, 2, 4];
///     const READABLES: &'static [(i64, &'static str)] =
///         &[(1, "red"), (2, "green"), (4, "blue"), (7, "white")];
/// }
///
/// let registry = FlagRegistry::new();
/// assert_eq!(Color::readable(&registry, 3), Ok("red; green".to_string()));
/// assert_eq!(Color::readable(&registry, 7), Ok("white".to_string()));
/// ```
///
/// [`FlagSet<E>`]: crate::flags::FlagSet
/// [`flag_enum!`]: crate::flag_enum
pub trait FlagEnum: 'static + Sized {
    /// Name of the enumeration, used in diagnostics.
    const NAME: &'static str;

    /// Declared flag constants in declaration order.
    ///
    /// Invariant: every constant is 0 or a positive power of two. A
    /// violating table fails with
    /// [`InvalidFlagDefinition`](FlagError::InvalidFlagDefinition) on first
    /// registry access.
    const VALUES: &'static [i64];

    /// Ordered (value, label) pairs for rendering: one entry per flag, then
    /// any named composites (values combining several flags). Rendering
    /// prefers an exact-value entry over decomposition, so composites here
    /// get their own label. Do not include a zero entry; the empty set is
    /// labeled by [`READABLE_NONE`](FlagEnum::READABLE_NONE).
    const READABLES: &'static [(i64, &'static str)];

    /// Label rendered for the empty set.
    const READABLE_NONE: &'static str = "none";

    /// The aggregate bitmask of all declared flags, from the registry's
    /// per-type cache.
    fn bitmask(registry: &FlagRegistry) -> Result<i64, FlagError> {
        registry.bitmask::<Self>()
    }

    /// Whether `value` is a legal combination of this type's declared
    /// flags. Zero (the empty set) is always legal; any other value is
    /// legal iff it is a sub-mask of the bitmask, whether or not that
    /// combination has a name.
    ///
    /// Errors only if the enumeration's own definition is invalid.
    fn is_acceptable_value(registry: &FlagRegistry, value: i64) -> Result<bool, FlagError> {
        if value == 0 {
            return Ok(true);
        }
        let mask = Self::bitmask(registry)?;
        Ok((value & !mask) == 0)
    }

    /// [`is_acceptable_value`](FlagEnum::is_acceptable_value) for
    /// loosely-typed input. Non-integer input fails with
    /// [`TypeMismatch`](FlagError::TypeMismatch) before any flag logic runs.
    fn is_acceptable_input<'a, I>(registry: &FlagRegistry, input: I) -> Result<bool, FlagError>
    where
        I: Into<FlagInput<'a>>,
    {
        Self::is_acceptable_value(registry, input.into().as_bits()?)
    }

    /// The ordered labels describing `value`.
    ///
    /// Zero yields the one-element sequence `[READABLE_NONE]`. A value with
    /// its own `READABLES` entry yields that single label. Anything else
    /// decomposes over `READABLES` in declaration order, keeping each label
    /// whose value's bits are all present in `value`.
    ///
    /// Errors:
    /// - `InvalidFlagValue` if `value` is not acceptable.
    /// - `InvalidFlagDefinition` if the enumeration's definition is invalid.
    fn readable_parts(registry: &FlagRegistry, value: i64) -> Result<Vec<&'static str>, FlagError> {
        if !Self::is_acceptable_value(registry, value)? {
            return Err(FlagError::InvalidFlagValue {
                enum_name: Self::NAME,
                value,
            });
        }
        Ok(readable::parts::<Self>(value))
    }

    /// The labels of `value` joined with
    /// [`DEFAULT_SEPARATOR`](readable::DEFAULT_SEPARATOR).
    fn readable(registry: &FlagRegistry, value: i64) -> Result<String, FlagError> {
        Self::readable_with(registry, value, readable::DEFAULT_SEPARATOR)
    }

    /// The labels of `value` joined with a caller-chosen separator.
    fn readable_with(
        registry: &FlagRegistry,
        value: i64,
        separator: &str,
    ) -> Result<String, FlagError> {
        Ok(Self::readable_parts(registry, value)?.join(separator))
    }
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod descriptor_test;

//! The flag-set value type.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{BitAnd, BitOr, Sub};

use once_cell::sync::OnceCell;

use crate::descriptor::FlagEnum;
use crate::error::FlagError;
use crate::input::FlagInput;
use crate::readable;
use crate::registry::FlagRegistry;

/// An immutable set of flags of the enumeration `E`, packed into one `i64`.
///
/// Instances are values: operations that "modify" a set return a new one.
/// Construction through [`new`](FlagSet::new) validates that the bits are a
/// legal combination of `E`'s declared flags, so every operation downstream
/// of it is infallible except the ones that take further raw input.
///
/// # Example
///
/// ```
/// use pennant_core::{FlagRegistry, FlagSet, flag_enum};
///
/// flag_enum! {
///     pub struct Permission {
///         READ = 1 => "Read",
///         WRITE = 2 => "Write",
///         EXECUTE = 4 => "Execute",
///     }
/// }
///
/// let registry = FlagRegistry::new();
/// let set = FlagSet::<Permission>::new(&registry, Permission::READ)?;
/// let set = set.add_flags(&registry, Permission::WRITE)?;
///
/// assert!(set.has_flag(Permission::READ));
/// assert!(!set.has_flag(Permission::EXECUTE));
/// assert_eq!(set.bits(), 3);
/// assert_eq!(set.readable(), "Read; Write");
/// # Ok::<(), pennant_core::FlagError>(())
/// ```
pub struct FlagSet<E: FlagEnum> {
    value: i64,
    // Memoized declaration-order decomposition of `value`, filled on the
    // first `flags()` call. Derived data: excluded from Eq and Hash.
    flags: OnceCell<Box<[i64]>>,
    _enum: PhantomData<E>,
}

impl<E: FlagEnum> FlagSet<E> {
    /// Creates a set from raw bits, validating them against `E`.
    ///
    /// Errors:
    /// - `InvalidFlagValue` if `value` has bits outside `E`'s bitmask.
    /// - `InvalidFlagDefinition` if `E`'s own definition is invalid.
    pub fn new(registry: &FlagRegistry, value: i64) -> Result<Self, FlagError> {
        if !E::is_acceptable_value(registry, value)? {
            return Err(FlagError::InvalidFlagValue {
                enum_name: E::NAME,
                value,
            });
        }
        Ok(Self::from_bits_retain(value))
    }

    /// Creates a set from loosely-typed input: [`new`](FlagSet::new)
    /// preceded by the integer check of [`FlagInput::as_bits`].
    pub fn from_input<'a, I>(registry: &FlagRegistry, input: I) -> Result<Self, FlagError>
    where
        I: Into<FlagInput<'a>>,
    {
        Self::new(registry, input.into().as_bits()?)
    }

    /// The empty set. Zero is acceptable for every enumeration, so this
    /// needs no registry.
    pub const fn none() -> Self {
        Self::from_bits_retain(0)
    }

    /// Creates a set from raw bits without validating them.
    ///
    /// Undeclared bits are kept as given; they stay invisible to
    /// [`flags`](FlagSet::flags) and rendering, which only recognize
    /// declared flags.
    pub const fn from_bits_retain(value: i64) -> Self {
        FlagSet {
            value,
            flags: OnceCell::new(),
            _enum: PhantomData,
        }
    }

    /// The underlying bits.
    pub const fn bits(&self) -> i64 {
        self.value
    }

    /// Whether this is the empty set.
    pub const fn is_none(&self) -> bool {
        self.value == 0
    }

    /// Whether every bit of `flag` is set in this value.
    ///
    /// `flag` may combine several bits; the test is for a sub-mask, not a
    /// single flag. Non-positive input always answers `false`, so emptiness
    /// must be tested with [`is_none`](FlagSet::is_none) rather than
    /// `has_flag(0)`.
    pub const fn has_flag(&self, flag: i64) -> bool {
        flag >= 1 && flag == (flag & self.value)
    }

    /// The declared flags present in this value, in declaration order.
    ///
    /// Computed once per instance and cached.
    pub fn flags(&self) -> &[i64] {
        self.flags.get_or_init(|| {
            E::VALUES
                .iter()
                .copied()
                .filter(|&flag| self.has_flag(flag))
                .collect()
        })
    }

    /// Iterates over [`flags`](FlagSet::flags).
    pub fn iter(&self) -> FlagsIter<'_> {
        FlagsIter {
            inner: self.flags().iter(),
        }
    }

    /// Returns a new set with every bit of `flags` added.
    ///
    /// `flags` must itself be an acceptable value for `E`; the rejected
    /// argument is carried in the error. The result is built through the
    /// validated factory, like any other instance.
    pub fn add_flags(&self, registry: &FlagRegistry, flags: i64) -> Result<Self, FlagError> {
        if !E::is_acceptable_value(registry, flags)? {
            return Err(FlagError::InvalidFlagValue {
                enum_name: E::NAME,
                value: flags,
            });
        }
        Self::new(registry, self.value | flags)
    }

    /// Returns a new set with every bit of `flags` removed.
    ///
    /// Validates `flags` the same way as [`add_flags`](FlagSet::add_flags);
    /// removing flags that are not set is a no-op, not an error.
    pub fn remove_flags(&self, registry: &FlagRegistry, flags: i64) -> Result<Self, FlagError> {
        if !E::is_acceptable_value(registry, flags)? {
            return Err(FlagError::InvalidFlagValue {
                enum_name: E::NAME,
                value: flags,
            });
        }
        Self::new(registry, self.value & !flags)
    }

    /// The ordered labels describing this value.
    ///
    /// Infallible: the value was validated at construction.
    pub fn readable_parts(&self) -> Vec<&'static str> {
        readable::parts::<E>(self.value)
    }

    /// The labels of this value joined with
    /// [`DEFAULT_SEPARATOR`](readable::DEFAULT_SEPARATOR).
    pub fn readable(&self) -> String {
        self.readable_with(readable::DEFAULT_SEPARATOR)
    }

    /// The labels of this value joined with a caller-chosen separator.
    pub fn readable_with(&self, separator: &str) -> String {
        self.readable_parts().join(separator)
    }
}

impl<E: FlagEnum> Clone for FlagSet<E> {
    fn clone(&self) -> Self {
        FlagSet {
            value: self.value,
            flags: self.flags.clone(),
            _enum: PhantomData,
        }
    }
}

impl<E: FlagEnum> Default for FlagSet<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E: FlagEnum> PartialEq for FlagSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E: FlagEnum> Eq for FlagSet<E> {}

impl<E: FlagEnum> Hash for FlagSet<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The decomposition cache is derived from `value`, so only the
        // value participates.
        self.value.hash(state);
    }
}

impl<E: FlagEnum> fmt::Debug for FlagSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet<{}>({})", E::NAME, self.value)
    }
}

/// Renders like [`readable`](FlagSet::readable).
impl<E: FlagEnum> fmt::Display for FlagSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.readable())
    }
}

/// Set union. Acceptability is closed under union, so no registry or
/// re-validation is involved.
impl<E: FlagEnum> BitOr for FlagSet<E> {
    type Output = FlagSet<E>;

    fn bitor(self, rhs: FlagSet<E>) -> FlagSet<E> {
        Self::from_bits_retain(self.value | rhs.value)
    }
}

/// Set intersection. Acceptability is closed under intersection.
impl<E: FlagEnum> BitAnd for FlagSet<E> {
    type Output = FlagSet<E>;

    fn bitand(self, rhs: FlagSet<E>) -> FlagSet<E> {
        Self::from_bits_retain(self.value & rhs.value)
    }
}

/// Set difference. The result is a subset of `self`, so it stays
/// acceptable.
impl<E: FlagEnum> Sub for FlagSet<E> {
    type Output = FlagSet<E>;

    fn sub(self, rhs: FlagSet<E>) -> FlagSet<E> {
        Self::from_bits_retain(self.value & !rhs.value)
    }
}

/// Iterator over the declared flags present in a [`FlagSet`], in
/// declaration order.
#[derive(Debug, Clone)]
pub struct FlagsIter<'a> {
    inner: core::slice::Iter<'a, i64>,
}

impl Iterator for FlagsIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for FlagsIter<'_> {
    fn next_back(&mut self) -> Option<i64> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for FlagsIter<'_> {}

impl FusedIterator for FlagsIter<'_> {}

impl<'a, E: FlagEnum> IntoIterator for &'a FlagSet<E> {
    type Item = i64;
    type IntoIter = FlagsIter<'a>;

    fn into_iter(self) -> FlagsIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

//! Human-readable rendering of flag values.
//!
//! Rendering resolves a value to labels in three steps, stopping at the
//! first that applies:
//!
//! 1. zero renders as the type's none-label;
//! 2. a value with a directly-declared label renders as that single label
//!    (named composites therefore win over their decomposition);
//! 3. otherwise the value decomposes over the declared (value, label) pairs
//!    in declaration order, keeping each label whose bits are all present.
//!
//! Callers reach this through [`FlagEnum::readable`] and friends, or the
//! instance methods on [`FlagSet`]; those entry points are responsible for
//! the acceptability check that rendering assumes.
//!
//! [`FlagEnum::readable`]: crate::descriptor::FlagEnum::readable
//! [`FlagSet`]: crate::flags::FlagSet

use crate::descriptor::FlagEnum;

/// Separator used between labels when none is given.
pub const DEFAULT_SEPARATOR: &str = "; ";

/// Collects the ordered labels for an already-validated `value`.
pub(crate) fn parts<E: FlagEnum>(value: i64) -> Vec<&'static str> {
    if value == 0 {
        return vec![E::READABLE_NONE];
    }
    if let Some(&(_, label)) = E::READABLES.iter().find(|&&(v, _)| v == value) {
        return vec![label];
    }
    E::READABLES
        .iter()
        .filter(|&&(flag, _)| flag == (flag & value))
        .map(|&(_, label)| label)
        .collect()
}

#[cfg(test)]
#[path = "readable_test.rs"]
mod readable_test;

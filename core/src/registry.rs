//! Type-keyed bitmask registry.
//!
//! Every flag-enumeration type has one aggregate bitmask, the OR of its
//! declared constants. Computing it also validates the definition, so the
//! result is cached per type and the validation runs at most once per type
//! per registry. The registry is an explicit object rather than global
//! state: whoever wires up enumeration types owns it and passes it by
//! reference.

use std::any::TypeId;
use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;

use crate::descriptor::FlagEnum;
use crate::error::FlagError;

/// Returns true if `value` is a single bit flag, i.e. a positive power of
/// two. Zero is not a bit flag (it is the empty set's sentinel).
pub const fn is_bit_flag(value: i64) -> bool {
    value >= 1 && (value & (value - 1)) == 0
}

/// Lazily populated cache of per-type bitmasks.
///
/// A registry starts empty. The first [`bitmask`](FlagRegistry::bitmask)
/// call for a type validates the type's declared constants and caches the
/// aggregate mask under the type's identity; later calls return the cached
/// mask without re-validating. Entries are never invalidated, since
/// enumeration definitions are immutable for the life of the process.
///
/// # Example
///
/// ```
/// use pennant_core::{FlagEnum, FlagRegistry, flag_enum};
///
/// flag_enum! {
///     pub struct Permission {
///         READ = 1 => "Read",
///         WRITE = 2 => "Write",
///     }
/// }
///
/// let registry = FlagRegistry::new();
/// assert_eq!(Permission::bitmask(&registry), Ok(3));
/// assert_eq!(Permission::is_acceptable_value(&registry, 3), Ok(true));
/// assert_eq!(Permission::is_acceptable_value(&registry, 4), Ok(false));
/// ```
#[derive(Debug, Default)]
pub struct FlagRegistry {
    masks: RwLock<HashMap<TypeId, i64>>,
}

static_assertions::assert_impl_all!(FlagRegistry: Send, Sync, Default);

impl FlagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        FlagRegistry {
            masks: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the aggregate bitmask for `E`, computing and caching it on
    /// first access.
    ///
    /// Errors:
    /// - `InvalidFlagDefinition` if any declared constant of `E` is neither
    ///   0 nor a positive power of two. Nothing is cached in that case, and
    ///   every later call fails the same way.
    pub fn bitmask<E: FlagEnum>(&self) -> Result<i64, FlagError> {
        let key = TypeId::of::<E>();
        {
            let masks = self.masks.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(&mask) = masks.get(&key) {
                return Ok(mask);
            }
        }

        // Not cached yet. The mask is a pure function of the type's
        // immutable definition, so racing computations agree and the
        // first insert wins.
        let mask = match compute_mask::<E>() {
            Ok(mask) => mask,
            Err(err) => {
                tracing::warn!(enum_name = E::NAME, %err, "rejected flag enumeration definition");
                return Err(err);
            }
        };
        tracing::debug!(enum_name = E::NAME, mask, "computed flag bitmask");

        let mut masks = self.masks.write().unwrap_or_else(PoisonError::into_inner);
        Ok(*masks.entry(key).or_insert(mask))
    }
}

/// Validates `E`'s declared constants and folds them into one mask.
///
/// Fails fast on the first bad constant: no partial mask escapes.
fn compute_mask<E: FlagEnum>() -> Result<i64, FlagError> {
    let mut mask = 0i64;
    for &flag in E::VALUES {
        if flag != 0 && !is_bit_flag(flag) {
            return Err(FlagError::InvalidFlagDefinition {
                enum_name: E::NAME,
                value: flag,
            });
        }
        mask |= flag;
    }
    Ok(mask)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

//! Pennant - typed bit-flag enumerations with readable rendering
//!
//! # Overview
//!
//! Pennant models a small set of boolean capabilities packed into one
//! integer: each capability is a named power-of-two constant, and a value
//! is any combination of them. Common use cases include:
//!
//! - Permission masks on shared resources
//! - Delivery-channel and notification preferences
//! - Feature toggles persisted as a single column
//! - Protocol option words
//!
//! # Quick Start
//!
//! ```
//! use pennant::{FlagRegistry, FlagSet, flag_enum};
//!
//! flag_enum! {
//!     /// What a collaborator may do with a shared document.
//!     pub struct Permission {
//!         READ = 1 => "Read",
//!         WRITE = 2 => "Write",
//!         EXECUTE = 4 => "Execute",
//!     }
//! }
//!
//! // The registry caches one validated bitmask per enumeration type.
//! let registry = FlagRegistry::new();
//!
//! let set = FlagSet::<Permission>::new(&registry, Permission::READ)?;
//! let set = set.add_flags(&registry, Permission::WRITE)?;
//!
//! assert!(set.has_flag(Permission::READ));
//! assert!(!set.has_flag(Permission::EXECUTE));
//! assert_eq!(set.readable(), "Read; Write");
//!
//! // Values with undeclared bits never get in through the checked API.
//! assert!(FlagSet::<Permission>::new(&registry, 8).is_err());
//! # Ok::<(), pennant::FlagError>(())
//! ```
//!
//! # API Tiers
//!
//! Pennant provides two construction tiers:
//!
//! 1. **Checked** ([`FlagSet::new`], [`FlagSet::from_input`]): validates
//!    bits against the enumeration's registry-cached bitmask
//! 2. **Raw** ([`FlagSet::from_bits_retain`]): no validation, for bits
//!    already trusted
//!
//! # Loosely-Typed Input
//!
//! Values arriving from dynamically-typed sources can be ingested without
//! pre-checking their type. Anything that is not an integer is rejected
//! with a [`FlagError::TypeMismatch`] naming what was given:
//!
//! ```
//! use pennant::{FlagError, FlagRegistry, FlagSet, flag_enum};
//!
//! flag_enum! {
//!     pub struct Channel {
//!         EMAIL = 1 => "Email",
//!         SMS = 2 => "SMS",
//!     }
//! }
//!
//! let registry = FlagRegistry::new();
//!
//! let from_payload = FlagSet::<Channel>::from_input(&registry, 3)?;
//! assert_eq!(from_payload.readable(), "Email; SMS");
//!
//! assert_eq!(
//!     FlagSet::<Channel>::from_input(&registry, "3"),
//!     Err(FlagError::TypeMismatch { found: "string" }),
//! );
//! # Ok::<(), pennant::FlagError>(())
//! ```

// Re-export the declaration surface: the capability trait and the macro
// that implements it from a declaration list.
pub use pennant_core::{FlagEnum, flag_enum};

// Re-export the value type and its iterator.
pub use pennant_core::{FlagSet, FlagsIter};

// Re-export the registry and the bit-flag predicate it validates with.
pub use pennant_core::{FlagRegistry, is_bit_flag};

// Re-export errors and loosely-typed ingestion.
pub use pennant_core::{FlagError, FlagInput};

// Re-export rendering constants.
pub use pennant_core::DEFAULT_SEPARATOR;

//! Integration tests for the public API.
//!
//! These tests validate that declarations, the registry, and flag sets
//! work end-to-end through the crate root, the way a depending crate
//! sees them.

use pennant_core::{FlagEnum, FlagError, FlagRegistry, FlagSet, flag_enum};

flag_enum! {
    /// Compass directions a sensor reports.
    pub struct Direction {
        NORTH = 1 => "North",
        EAST = 2 => "East",
        SOUTH = 4 => "South",
        WEST = 8 => "West",
    }
    composites {
        HORIZONTAL = Direction::EAST | Direction::WEST => "Horizontal",
        VERTICAL = Direction::NORTH | Direction::SOUTH => "Vertical",
    }
}

flag_enum! {
    pub struct Weekend {
        SATURDAY = 1 => "Saturday",
        SUNDAY = 2 => "Sunday",
    }
}

#[test]
fn test_declaration_through_the_macro() {
    let registry = FlagRegistry::new();

    assert_eq!(Direction::NAME, "Direction");
    assert_eq!(Direction::VALUES, &[1, 2, 4, 8]);
    assert_eq!(Direction::HORIZONTAL, 10);
    assert_eq!(Direction::bitmask(&registry), Ok(15));
}

#[test]
fn test_set_lifecycle() {
    let registry = FlagRegistry::new();

    let heading = FlagSet::<Direction>::new(&registry, Direction::NORTH)
        .expect("construction should succeed");
    let heading = heading
        .add_flags(&registry, Direction::EAST)
        .expect("adding a declared flag should succeed");

    assert!(heading.has_flag(Direction::NORTH));
    assert!(!heading.has_flag(Direction::SOUTH));
    assert_eq!(heading.flags(), &[1, 2]);
    assert_eq!(heading.readable(), "North; East");

    let heading = heading
        .remove_flags(&registry, Direction::NORTH)
        .expect("removing a declared flag should succeed");
    assert_eq!(heading.bits(), Direction::EAST);
}

#[test]
fn test_rendering_precedence() {
    let registry = FlagRegistry::new();

    // An exact composite entry beats decomposition.
    assert_eq!(
        Direction::readable(&registry, Direction::HORIZONTAL),
        Ok("Horizontal".to_string())
    );

    // Without an exact entry, every matching pair contributes, composites
    // included.
    assert_eq!(
        Direction::readable(&registry, 7),
        Ok("North; East; South; Vertical".to_string())
    );
}

#[test]
fn test_registry_entries_are_keyed_by_type() {
    let registry = FlagRegistry::new();

    assert_eq!(Direction::bitmask(&registry), Ok(15));
    assert_eq!(Weekend::bitmask(&registry), Ok(3));

    // 4 is a Direction flag but not a Weekend value; the rejection names
    // the type that refused it.
    assert_eq!(
        FlagSet::<Weekend>::new(&registry, 4),
        Err(FlagError::InvalidFlagValue {
            enum_name: "Weekend",
            value: 4,
        })
    );
}

#[test]
fn test_hand_written_implementations_validate_lazily() {
    struct Legacy;

    // 3 would be rejected by the declaration macro at compile time; a
    // hand-written table only fails once a registry derives its mask.
    impl FlagEnum for Legacy {
        const NAME: &'static str = "Legacy";
        const VALUES: &'static [i64] = &[1, 3];
        const READABLES: &'static [(i64, &'static str)] = &[(1, "One"), (3, "Three")];
    }

    let registry = FlagRegistry::new();
    let expected = FlagError::InvalidFlagDefinition {
        enum_name: "Legacy",
        value: 3,
    };
    assert_eq!(Legacy::bitmask(&registry), Err(expected.clone()));
    assert_eq!(FlagSet::<Legacy>::new(&registry, 1), Err(expected));
}

#[test]
fn test_loosely_typed_ingestion() {
    let registry = FlagRegistry::new();

    let from_int = FlagSet::<Direction>::from_input(&registry, 3)
        .expect("integer input should succeed");
    assert_eq!(from_int.readable(), "North; East");

    let rejected = FlagSet::<Direction>::from_input(&registry, "north")
        .expect_err("string input should be rejected");
    assert_eq!(
        rejected.to_string(),
        "expected an integer flag value, got string"
    );
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<FlagError>();
}

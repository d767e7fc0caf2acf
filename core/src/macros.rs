//! Declaration macro for concrete flag enumerations.

/// Declares a flag-enumeration type: a marker type, one `pub const` per
/// declared flag, and the [`FlagEnum`](crate::FlagEnum) implementation,
/// from a single declaration list.
///
/// Declarations are checked at compile time: flag constants must be
/// positive powers of two, and composite constants must combine declared
/// flags. Hand-written `FlagEnum` implementations skip these checks and
/// are validated lazily on first registry access instead.
///
/// # Syntax
///
/// | Clause | Meaning |
/// |--------|---------|
/// | `NAME = value => "Label",` | One flag: a `pub const` and its label |
/// | `composites { NAME = value => "Label", }` | Named combinations, rendered by their own label |
/// | `none = "label";` | Overrides the empty set's label (default `"none"`) |
///
/// The `composites` and `none` clauses are optional and follow the struct
/// block in that order. At least one flag is required; a zero constant is
/// not a flag (the empty set is covered by the `none` label).
///
/// # Example
///
/// ```
/// use pennant_core::{FlagEnum, FlagRegistry, flag_enum};
///
/// flag_enum! {
///     /// What a collaborator may do with a shared document.
///     pub struct Access {
///         VIEW = 1 => "View",
///         COMMENT = 2 => "Comment",
///         EDIT = 4 => "Edit",
///     }
///     composites {
///         FULL = Access::VIEW | Access::COMMENT | Access::EDIT => "Full access",
///     }
///     none = "no access";
/// }
///
/// let registry = FlagRegistry::new();
/// assert_eq!(Access::readable(&registry, Access::FULL), Ok("Full access".into()));
/// assert_eq!(Access::readable(&registry, 3), Ok("View; Comment".into()));
/// assert_eq!(Access::readable(&registry, 0), Ok("no access".into()));
/// ```
#[macro_export]
macro_rules! flag_enum {
    // === Entry points ===

    // Flags, composites, and a none-label override.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fattr:meta])* $flag:ident = $fval:expr => $flabel:expr ),+ $(,)?
        }
        composites {
            $( $(#[$cattr:meta])* $comp:ident = $cval:expr => $clabel:expr ),+ $(,)?
        }
        none = $none_label:expr ;
    ) => {
        $crate::flag_enum! {
            @emit
            meta [ $(#[$meta])* ]
            decl [ $vis struct $name ]
            flags [ $( [ $(#[$fattr])* $flag = $fval => $flabel ] )+ ]
            composites [ $( [ $(#[$cattr])* $comp = $cval => $clabel ] )+ ]
            none [ $none_label ]
        }
    };

    // Flags and composites.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fattr:meta])* $flag:ident = $fval:expr => $flabel:expr ),+ $(,)?
        }
        composites {
            $( $(#[$cattr:meta])* $comp:ident = $cval:expr => $clabel:expr ),+ $(,)?
        }
    ) => {
        $crate::flag_enum! {
            @emit
            meta [ $(#[$meta])* ]
            decl [ $vis struct $name ]
            flags [ $( [ $(#[$fattr])* $flag = $fval => $flabel ] )+ ]
            composites [ $( [ $(#[$cattr])* $comp = $cval => $clabel ] )+ ]
            none [ ]
        }
    };

    // Flags and a none-label override.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fattr:meta])* $flag:ident = $fval:expr => $flabel:expr ),+ $(,)?
        }
        none = $none_label:expr ;
    ) => {
        $crate::flag_enum! {
            @emit
            meta [ $(#[$meta])* ]
            decl [ $vis struct $name ]
            flags [ $( [ $(#[$fattr])* $flag = $fval => $flabel ] )+ ]
            composites [ ]
            none [ $none_label ]
        }
    };

    // Flags only.
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fattr:meta])* $flag:ident = $fval:expr => $flabel:expr ),+ $(,)?
        }
    ) => {
        $crate::flag_enum! {
            @emit
            meta [ $(#[$meta])* ]
            decl [ $vis struct $name ]
            flags [ $( [ $(#[$fattr])* $flag = $fval => $flabel ] )+ ]
            composites [ ]
            none [ ]
        }
    };

    // === Expansion ===

    (
        @emit
        meta [ $($meta:tt)* ]
        decl [ $vis:vis struct $name:ident ]
        flags [ $( [ $(#[$fattr:meta])* $flag:ident = $fval:expr => $flabel:expr ] )+ ]
        composites [ $( [ $(#[$cattr:meta])* $comp:ident = $cval:expr => $clabel:expr ] )* ]
        none [ $($none_label:expr)? ]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            $(
                $(#[$fattr])*
                pub const $flag: i64 = $fval;
            )+
            $(
                $(#[$cattr])*
                pub const $comp: i64 = $cval;
            )*
        }

        impl $crate::FlagEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [i64] = &[ $( $name::$flag ),+ ];
            const READABLES: &'static [(i64, &'static str)] = &[
                $( ($name::$flag, $flabel), )+
                $( ($name::$comp, $clabel), )*
            ];
            $( const READABLE_NONE: &'static str = $none_label; )?
        }

        const _: () = {
            $(
                assert!(
                    $crate::is_bit_flag($name::$flag),
                    "flag constants must be positive powers of two"
                );
            )+
            let mask: i64 = 0 $( | $name::$flag )+;
            $(
                assert!(
                    $name::$comp != 0 && ($name::$comp & !mask) == 0,
                    "composite constants must combine declared flags"
                );
            )*
            let _ = mask;
        };
    };
}

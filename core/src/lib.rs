pub mod descriptor;
pub mod error;
pub mod flags;
pub mod input;
mod macros;
pub mod readable;
pub mod registry;

// Root re-exports of the whole surface. `flag_enum!` expansions name the
// trait and the bit-flag predicate through these paths.
pub use descriptor::FlagEnum;
pub use error::FlagError;
pub use flags::{FlagSet, FlagsIter};
pub use input::FlagInput;
pub use readable::DEFAULT_SEPARATOR;
pub use registry::{FlagRegistry, is_bit_flag};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_bitmask_cache() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}

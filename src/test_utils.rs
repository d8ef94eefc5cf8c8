//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid unit name (lowercase alphanumeric with hyphens)
    pub fn unit_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,20}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Generate a plausible build duration in milliseconds
    pub fn duration_millis() -> impl Strategy<Value = u64> {
        1u64..600_000
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_unit_name_is_well_formed(name in unit_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '-'));
        }

        #[test]
        fn test_duration_is_positive(millis in duration_millis()) {
            prop_assert!(millis > 0);
        }
    }
}

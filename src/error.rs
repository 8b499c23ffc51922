//! Errors reported by checked rectangle arithmetic.
//!
//! Predicates never fail. Only the `checked_*` constructive operations on
//! [`Rectangle`](crate::Rectangle) return these.

use thiserror::Error;

/// Error type for checked geometry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The result of `op` cannot be represented in the numeric domain.
    #[error("{op} overflowed the {domain} domain")]
    Overflow {
        /// Operation that overflowed.
        op: &'static str,
        /// Domain name, e.g. `"i32"`.
        domain: &'static str,
    },
}

/// Result alias for checked geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = GeomError::Overflow {
            op: "union",
            domain: "i32",
        };
        assert_eq!(err.to_string(), "union overflowed the i32 domain");
    }
}

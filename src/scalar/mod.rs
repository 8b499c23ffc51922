//! Numeric domains: the scalar types every shape is generic over.
//!
//! Three domains are supported: `i32` (integer), `f32` (single precision)
//! and `f64` (double precision). They share one algebra but differ in two
//! conventions that must not be unified:
//!
//! - **Max coordinate**: integers report the last included cell
//!   (`origin + extent - 1`), floats report the exclusive edge
//!   (`origin + extent`).
//! - **Overflow**: edge sums are formed in a widened type (`i64` for `i32`),
//!   so predicates are exact for every integer input. Constructive results are
//!   narrowed back with two's-complement wrapping. Use the `checked_*`
//!   operations on [`Rectangle`](crate::Rectangle) when coordinates may
//!   approach `i32::MIN`/`i32::MAX`.
//!
//! Floats compare exactly. There is no epsilon anywhere in this crate.

mod float;
mod int;

use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

use num_traits::{One, Zero};

/// A scalar domain for coordinates and extents.
pub trait Scalar:
    Copy + PartialOrd + Default + Debug + Display + Zero + One + Send + Sync + 'static
{
    /// Type in which edge sums and differences are computed.
    type Wide: Copy + PartialOrd + Debug + Add<Output = Self::Wide> + Sub<Output = Self::Wide>;

    /// Human-readable domain name, used in diagnostics.
    const DOMAIN: &'static str;

    /// Widen a value for edge arithmetic. Never loses information.
    fn widen(self) -> Self::Wide;

    /// Narrow a widened value back into the domain.
    ///
    /// Integers wrap; floats are returned as-is (possibly infinite).
    fn narrow(wide: Self::Wide) -> Self;

    /// Narrow a widened value, or `None` if it is not representable
    /// (integers) or not finite (floats).
    fn try_narrow(wide: Self::Wide) -> Option<Self>;

    /// Maximum coordinate of a span starting at `origin` with `extent`.
    fn max_coord(origin: Self, extent: Self) -> Self::Wide;

    /// Half of `extent`. Integer division truncates toward zero.
    fn half(extent: Self) -> Self::Wide;

    /// The smaller of two values.
    fn smaller(a: Self::Wide, b: Self::Wide) -> Self::Wide;

    /// The larger of two values.
    fn larger(a: Self::Wide, b: Self::Wide) -> Self::Wide;

    /// Whether `self` is a non-positive extent (the emptiness test).
    #[inline]
    fn is_degenerate(self) -> bool {
        // Written as a negated comparison so NaN extents count as empty.
        !(self > Self::zero())
    }

    /// Far edge `origin + extent` in the widened domain.
    #[inline]
    fn edge(origin: Self, extent: Self) -> Self::Wide {
        origin.widen() + extent.widen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_coord_conventions() {
        assert_eq!(i32::max_coord(0, 5), 4);
        assert_eq!(f32::max_coord(0.0, 5.0), 5.0);
        assert_eq!(f64::max_coord(0.0, 5.0), 5.0);
    }

    #[test]
    fn test_degenerate_extents() {
        assert!(0i32.is_degenerate());
        assert!((-3i32).is_degenerate());
        assert!(!1i32.is_degenerate());
        assert!(0.0f64.is_degenerate());
        assert!((-0.5f32).is_degenerate());
        assert!(f64::NAN.is_degenerate());
        assert!(!0.25f32.is_degenerate());
    }

    #[test]
    fn test_integer_edge_is_widened() {
        let edge = i32::edge(i32::MAX, i32::MAX);
        assert_eq!(edge, 2 * i64::from(i32::MAX));
        assert_eq!(i32::try_narrow(edge), None);
        assert_eq!(i32::narrow(edge), -2);
    }

    #[test]
    fn test_domain_names() {
        assert_eq!(i32::DOMAIN, "i32");
        assert_eq!(f32::DOMAIN, "f32");
        assert_eq!(f64::DOMAIN, "f64");
    }
}

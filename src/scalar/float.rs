//! Single and double precision domains.
//!
//! Floats are their own wide type: widening to `f64` would change rounding
//! and break parity between `f32` results and what callers compute by hand.

use super::Scalar;

macro_rules! float_scalar {
    ($ty:ty, $name:literal) => {
        impl Scalar for $ty {
            type Wide = $ty;

            const DOMAIN: &'static str = $name;

            #[inline]
            fn widen(self) -> $ty {
                self
            }

            #[inline]
            fn narrow(wide: $ty) -> Self {
                wide
            }

            #[inline]
            fn try_narrow(wide: $ty) -> Option<Self> {
                wide.is_finite().then_some(wide)
            }

            #[inline]
            fn max_coord(origin: Self, extent: Self) -> $ty {
                Self::edge(origin, extent)
            }

            #[inline]
            fn half(extent: Self) -> $ty {
                extent / 2.0
            }

            #[inline]
            fn smaller(a: $ty, b: $ty) -> $ty {
                a.min(b)
            }

            #[inline]
            fn larger(a: $ty, b: $ty) -> $ty {
                a.max(b)
            }
        }
    };
}

float_scalar!(f32, "f32");
float_scalar!(f64, "f64");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_narrow_rejects_non_finite() {
        assert_eq!(f32::try_narrow(1.5), Some(1.5));
        assert_eq!(f32::try_narrow(f32::INFINITY), None);
        assert_eq!(f64::try_narrow(f64::NAN), None);
    }

    #[test]
    fn test_f32_edge_overflows_to_infinity() {
        let edge = f32::edge(f32::MAX, f32::MAX);
        assert!(edge.is_infinite());
        assert_eq!(f32::try_narrow(edge), None);
    }

    #[test]
    fn test_min_max_prefer_number_over_nan() {
        assert_eq!(f64::smaller(f64::NAN, 2.0), 2.0);
        assert_eq!(f64::larger(3.0, f64::NAN), 3.0);
    }
}

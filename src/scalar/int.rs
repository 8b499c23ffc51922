//! Integer domain.

use num_traits::ToPrimitive;

use super::Scalar;

impl Scalar for i32 {
    type Wide = i64;

    const DOMAIN: &'static str = "i32";

    #[inline]
    fn widen(self) -> i64 {
        i64::from(self)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn narrow(wide: i64) -> Self {
        wide as Self
    }

    #[inline]
    fn try_narrow(wide: i64) -> Option<Self> {
        wide.to_i32()
    }

    #[inline]
    fn max_coord(origin: Self, extent: Self) -> i64 {
        Self::edge(origin, extent) - 1
    }

    #[inline]
    fn half(extent: Self) -> i64 {
        i64::from(extent) / 2
    }

    #[inline]
    fn smaller(a: i64, b: i64) -> i64 {
        a.min(b)
    }

    #[inline]
    fn larger(a: i64, b: i64) -> i64 {
        a.max(b)
    }
}

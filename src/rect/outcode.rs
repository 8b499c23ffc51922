//! Outcode: where a point lies relative to a rectangle's four edges.

use bitflags::bitflags;

bitflags! {
    /// Position of a point relative to a rectangle, as used by
    /// Cohen-Sutherland style clipping.
    ///
    /// An empty code means the point is inside on both axes. Bits can be
    /// combined; a point above and to the left has `LEFT | TOP`.
    ///
    /// # Example
    /// ```
    /// use planar::{Outcode, RectI};
    /// let r = RectI::new(0, 0, 10, 10);
    /// assert_eq!(r.outcode(-1, -1), Outcode::LEFT | Outcode::TOP);
    /// assert!(r.outcode(5, 5).is_empty());
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct Outcode: u8 {
        /// Left of the minimum x edge.
        const LEFT = 0b0001;
        /// Above the minimum y edge.
        const TOP = 0b0010;
        /// At or right of the maximum x edge.
        const RIGHT = 0b0100;
        /// At or below the maximum y edge.
        const BOTTOM = 0b1000;
    }
}

impl Outcode {
    /// Bits describing the horizontal axis only.
    #[inline]
    pub const fn horizontal(self) -> Self {
        self.intersection(Self::LEFT.union(Self::RIGHT))
    }

    /// Bits describing the vertical axis only.
    #[inline]
    pub const fn vertical(self) -> Self {
        self.intersection(Self::TOP.union(Self::BOTTOM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_values() {
        assert_eq!(Outcode::LEFT.bits(), 1);
        assert_eq!(Outcode::TOP.bits(), 2);
        assert_eq!(Outcode::RIGHT.bits(), 4);
        assert_eq!(Outcode::BOTTOM.bits(), 8);
    }

    #[test]
    fn test_axis_split() {
        let code = Outcode::RIGHT | Outcode::TOP;
        assert_eq!(code.horizontal(), Outcode::RIGHT);
        assert_eq!(code.vertical(), Outcode::TOP);
        assert!(Outcode::BOTTOM.horizontal().is_empty());
    }
}

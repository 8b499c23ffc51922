//! The `Shape` trait.

use std::ops::Deref;

use crate::geom::Point;
use crate::rect::Rectangle;
use crate::scalar::Scalar;

/// The predicate set every shape implements.
///
/// All predicates are total: any state, including zero or negative extents,
/// yields a defined answer. Nothing is cached, so every call reflects the
/// shape's state at the time of the call.
pub trait Shape<T: Scalar> {
    /// Live view of the bounding rectangle.
    ///
    /// For a [`Rectangle`] this is the rectangle itself.
    type Bounds<'a>: Deref<Target = Rectangle<T>>
    where
        Self: 'a;

    /// Returns `true` if this shape encloses no area.
    fn is_empty(&self) -> bool;

    /// Returns `true` if the point `(x, y)` lies inside this shape.
    ///
    /// Minimum edges are inclusive, maximum edges exclusive.
    fn contains(&self, x: T, y: T) -> bool;

    /// Returns `true` if this shape completely contains the rectangle
    /// `(x, y, w, h)`.
    ///
    /// An empty rectangle is never contained, and an empty shape contains
    /// nothing.
    fn contains_area(&self, x: T, y: T, w: T, h: T) -> bool;

    /// Returns `true` if this shape and the rectangle `(x, y, w, h)` share
    /// an area of positive size.
    fn intersects_area(&self, x: T, y: T, w: T, h: T) -> bool;

    /// Returns a live view of the bounding rectangle.
    fn bounds(&self) -> Self::Bounds<'_>;

    /// Returns `true` if `point` lies inside this shape.
    #[inline]
    fn contains_point(&self, point: Point<T>) -> bool {
        self.contains(point.x, point.y)
    }

    /// Returns `true` if this shape completely contains `rect`.
    #[inline]
    fn contains_rect(&self, rect: &Rectangle<T>) -> bool {
        self.contains_area(rect.x(), rect.y(), rect.width(), rect.height())
    }

    /// Returns `true` if this shape intersects `rect`.
    #[inline]
    fn intersects(&self, rect: &Rectangle<T>) -> bool {
        self.intersects_area(rect.x(), rect.y(), rect.width(), rect.height())
    }

    /// Returns a detached copy of the bounding rectangle.
    ///
    /// Later changes to this shape are not reflected in the copy.
    #[inline]
    fn get_bounds(&self) -> Rectangle<T> {
        *self.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::{RectD, RectF, RectI};

    fn check_contract<T: Scalar, S: Shape<T>>(shape: &S, inside: Point<T>, outside: Point<T>) {
        assert!(!shape.is_empty());
        assert!(shape.contains_point(inside));
        assert!(!shape.contains_point(outside));

        let bounds = shape.get_bounds();
        assert_eq!(*shape.bounds(), bounds);
        assert!(shape.contains_rect(&bounds));
        assert!(shape.intersects(&bounds));
    }

    #[test]
    fn test_contract_holds_in_every_domain() {
        check_contract(
            &RectI::new(0, 0, 10, 10),
            Point::new(0, 9),
            Point::new(10, 9),
        );
        check_contract(
            &RectF::new(0.0, 0.0, 10.0, 10.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 5.0),
        );
        check_contract(
            &RectD::new(-1.5, -1.5, 3.0, 3.0),
            Point::new(-1.5, 1.0),
            Point::new(1.5, 1.0),
        );
    }

    #[test]
    fn test_detached_copy_does_not_track_source() {
        let mut r = RectD::new(0.0, 0.0, 1.0, 1.0);
        let copy = r.get_bounds();
        r.set_size(4.0, 4.0);
        assert_eq!(copy, RectD::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(r.get_bounds(), RectD::new(0.0, 0.0, 4.0, 4.0));
    }
}

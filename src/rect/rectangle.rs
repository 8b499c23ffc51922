//! Rectangle: an axis-aligned area and its algebra.

use crate::error::{GeomError, Result};
use crate::geom::{Dimension, Point};
use crate::scalar::Scalar;
use crate::shape::Shape;

use super::outcode::Outcode;

/// An axis-aligned rectangle defined by its upper-left corner and size.
///
/// Width and height may be zero or negative. Such a rectangle is empty: it
/// contains nothing and intersects nothing, but it still has a location that
/// [`union`](Self::union) and [`add_rect`](Self::add_rect) honor.
///
/// Derived values (edges, center, outcodes) are computed from the current
/// state on every call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle<T: Scalar> {
    x: T,
    y: T,
    width: T,
    height: T,
}

impl<T: Scalar> Rectangle<T> {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rectangle at `location`.
    #[inline]
    pub fn at(location: Point<T>) -> Self {
        Self::new(location.x, location.y, T::zero(), T::zero())
    }

    /// Rectangle of `size` with its corner at the origin.
    #[inline]
    pub fn sized(size: Dimension<T>) -> Self {
        Self::new(T::zero(), T::zero(), size.width, size.height)
    }

    /// Rectangle with its corner at `location` and the given `size`.
    #[inline]
    pub fn from_parts(location: Point<T>, size: Dimension<T>) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }

    /// X coordinate of the upper-left corner.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// Y coordinate of the upper-left corner.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// Width. May be zero or negative.
    #[inline]
    pub const fn width(&self) -> T {
        self.width
    }

    /// Height. May be zero or negative.
    #[inline]
    pub const fn height(&self) -> T {
        self.height
    }

    /// Minimum x coordinate.
    #[inline]
    pub const fn min_x(&self) -> T {
        self.x
    }

    /// Minimum y coordinate.
    #[inline]
    pub const fn min_y(&self) -> T {
        self.y
    }

    /// Maximum x coordinate.
    ///
    /// Integers report the last included column (`x + width - 1`); floats
    /// report the exclusive edge (`x + width`). Integer results wrap if the
    /// edge is outside the `i32` range.
    #[inline]
    pub fn max_x(&self) -> T {
        T::narrow(T::max_coord(self.x, self.width))
    }

    /// Maximum y coordinate. Same convention as [`max_x`](Self::max_x).
    #[inline]
    pub fn max_y(&self) -> T {
        T::narrow(T::max_coord(self.y, self.height))
    }

    /// X coordinate of the center.
    #[inline]
    pub fn center_x(&self) -> T {
        T::narrow(self.x.widen() + T::half(self.width))
    }

    /// Y coordinate of the center.
    #[inline]
    pub fn center_y(&self) -> T {
        T::narrow(self.y.widen() + T::half(self.height))
    }

    /// Copy of the upper-left corner.
    #[inline]
    pub const fn location(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    /// Copy of the size.
    #[inline]
    pub const fn size(&self) -> Dimension<T> {
        Dimension::new(self.width, self.height)
    }

    /// Mutable live view of this rectangle's bounds.
    ///
    /// Writes through the returned reference change `self`. Use
    /// [`Shape::get_bounds`] for a copy that is safe to modify.
    #[inline]
    pub fn bounds_mut(&mut self) -> &mut Self {
        self
    }

    /// Set all four bounds.
    #[inline]
    pub fn set_bounds(&mut self, x: T, y: T, width: T, height: T) {
        *self = Self::new(x, y, width, height);
    }

    /// Set the bounds to those of `other`.
    #[inline]
    pub fn set_bounds_rect(&mut self, other: &Self) {
        *self = *other;
    }

    /// Move the upper-left corner, keeping the size.
    #[inline]
    pub fn set_location(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    /// Move the upper-left corner to `location`.
    #[inline]
    pub fn set_location_point(&mut self, location: Point<T>) {
        self.set_location(location.x, location.y);
    }

    /// Resize, keeping the upper-left corner.
    #[inline]
    pub fn set_size(&mut self, width: T, height: T) {
        self.width = width;
        self.height = height;
    }

    /// Resize to `size`.
    #[inline]
    pub fn set_size_dim(&mut self, size: Dimension<T>) {
        self.set_size(size.width, size.height);
    }

    /// Grow by `dx` on the left and right and by `dy` on the top and bottom.
    ///
    /// Negative amounts shrink the rectangle and may leave it empty or
    /// inverted. Integer results wrap on overflow; see
    /// [`checked_grow`](Self::checked_grow).
    pub fn grow(&mut self, dx: T, dy: T) {
        *self = self.grown(dx, dy).narrowed();
    }

    /// Shift the upper-left corner by `(mx, my)`. Integer results wrap on
    /// overflow; see [`checked_translate`](Self::checked_translate).
    pub fn translate(&mut self, mx: T, my: T) {
        *self = self.translated(mx, my).narrowed();
    }

    /// Expand to the smallest rectangle containing `self` and the point
    /// `(px, py)`.
    ///
    /// The point counts as a zero-sized rectangle, so an empty rectangle at
    /// the origin absorbs `(3, 4)` into `(0, 0, 3, 4)`. Integer results wrap
    /// on overflow; see [`checked_add_point`](Self::checked_add_point).
    pub fn add(&mut self, px: T, py: T) {
        *self = self.with_point(px, py).narrowed();
    }

    /// Expand to contain `point`.
    #[inline]
    pub fn add_point(&mut self, point: Point<T>) {
        self.add(point.x, point.y);
    }

    /// Expand in place to the union of `self` and `other`.
    pub fn add_rect(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// The largest rectangle contained in both `self` and `other`.
    ///
    /// Disjoint inputs produce a rectangle with non-positive width or height
    /// rather than an error. Check [`Shape::is_empty`] on the result. Integer
    /// results wrap on overflow; see
    /// [`checked_intersection`](Self::checked_intersection).
    pub fn intersection(&self, other: &Self) -> Self {
        self.intersection_area(other.x, other.y, other.width, other.height)
    }

    /// Intersection with the rectangle `(rx, ry, rw, rh)`.
    pub fn intersection_area(&self, rx: T, ry: T, rw: T, rh: T) -> Self {
        self.overlap(&Self::new(rx, ry, rw, rh)).narrowed()
    }

    /// The smallest rectangle containing both `self` and `other`.
    ///
    /// An empty operand still contributes its location. Integer results wrap
    /// on overflow; see [`checked_union`](Self::checked_union).
    pub fn union(&self, other: &Self) -> Self {
        self.hull(other).narrowed()
    }

    /// Classify `(px, py)` against the four edges of this rectangle.
    ///
    /// On each axis with positive extent, the low bit is raised strictly
    /// before the minimum edge and the high bit at or past the exclusive
    /// maximum edge, so the code is empty exactly when
    /// [`contains`](Shape::contains) is `true`. On an axis with
    /// non-positive extent the rectangle collapses to the line at its
    /// origin: the low bit is raised before it, the high bit after it, and
    /// neither when the point lies on it.
    pub fn outcode(&self, px: T, py: T) -> Outcode {
        let mut code = Outcode::empty();
        code |= axis_code(px, self.x, self.width, Outcode::LEFT, Outcode::RIGHT);
        code |= axis_code(py, self.y, self.height, Outcode::TOP, Outcode::BOTTOM);
        code
    }

    /// Classify `point` against the four edges of this rectangle.
    #[inline]
    pub fn outcode_point(&self, point: Point<T>) -> Outcode {
        self.outcode(point.x, point.y)
    }

    /// [`union`](Self::union) that fails instead of wrapping.
    pub fn checked_union(&self, other: &Self) -> Result<Self> {
        self.hull(other).checked("union")
    }

    /// [`intersection`](Self::intersection) that fails instead of wrapping.
    pub fn checked_intersection(&self, other: &Self) -> Result<Self> {
        self.overlap(other).checked("intersection")
    }

    /// [`grow`](Self::grow) that fails instead of wrapping. On error `self`
    /// is unchanged.
    pub fn checked_grow(&mut self, dx: T, dy: T) -> Result<()> {
        *self = self.grown(dx, dy).checked("grow")?;
        Ok(())
    }

    /// [`translate`](Self::translate) that fails instead of wrapping. On
    /// error `self` is unchanged.
    pub fn checked_translate(&mut self, mx: T, my: T) -> Result<()> {
        *self = self.translated(mx, my).checked("translate")?;
        Ok(())
    }

    /// [`add`](Self::add) that fails instead of wrapping. On error `self` is
    /// unchanged.
    pub fn checked_add_point(&mut self, px: T, py: T) -> Result<()> {
        *self = self.with_point(px, py).checked("add")?;
        Ok(())
    }

    /// [`add_rect`](Self::add_rect) that fails instead of wrapping. On error
    /// `self` is unchanged.
    pub fn checked_add_rect(&mut self, other: &Self) -> Result<()> {
        *self = self.checked_union(other)?;
        Ok(())
    }

    #[inline]
    fn right(&self) -> T::Wide {
        T::edge(self.x, self.width)
    }

    #[inline]
    fn bottom(&self) -> T::Wide {
        T::edge(self.y, self.height)
    }

    fn overlap(&self, other: &Self) -> Edges<T> {
        Edges {
            x1: T::larger(self.x.widen(), other.x.widen()),
            y1: T::larger(self.y.widen(), other.y.widen()),
            x2: T::smaller(self.right(), other.right()),
            y2: T::smaller(self.bottom(), other.bottom()),
        }
    }

    fn hull(&self, other: &Self) -> Edges<T> {
        Edges {
            x1: T::smaller(self.x.widen(), other.x.widen()),
            y1: T::smaller(self.y.widen(), other.y.widen()),
            x2: T::larger(self.right(), other.right()),
            y2: T::larger(self.bottom(), other.bottom()),
        }
    }

    fn with_point(&self, px: T, py: T) -> Edges<T> {
        self.hull(&Self::new(px, py, T::zero(), T::zero()))
    }

    fn grown(&self, dx: T, dy: T) -> Frame<T> {
        Frame {
            x: self.x.widen() - dx.widen(),
            y: self.y.widen() - dy.widen(),
            width: self.width.widen() + (dx.widen() + dx.widen()),
            height: self.height.widen() + (dy.widen() + dy.widen()),
        }
    }

    fn translated(&self, mx: T, my: T) -> Frame<T> {
        Frame {
            x: self.x.widen() + mx.widen(),
            y: self.y.widen() + my.widen(),
            width: self.width.widen(),
            height: self.height.widen(),
        }
    }
}

fn axis_code<T: Scalar>(p: T, origin: T, extent: T, low: Outcode, high: Outcode) -> Outcode {
    if p < origin {
        low
    } else if extent.is_degenerate() {
        if p > origin {
            high
        } else {
            Outcode::empty()
        }
    } else if p.widen() >= T::edge(origin, extent) {
        high
    } else {
        Outcode::empty()
    }
}

/// Corner coordinates in the widened domain, before narrowing.
struct Edges<T: Scalar> {
    x1: T::Wide,
    y1: T::Wide,
    x2: T::Wide,
    y2: T::Wide,
}

impl<T: Scalar> Edges<T> {
    fn frame(&self) -> Frame<T> {
        Frame {
            x: self.x1,
            y: self.y1,
            width: self.x2 - self.x1,
            height: self.y2 - self.y1,
        }
    }

    fn narrowed(&self) -> Rectangle<T> {
        self.frame().narrowed()
    }

    fn checked(&self, op: &'static str) -> Result<Rectangle<T>> {
        self.frame().checked(op)
    }
}

/// Origin and size in the widened domain, before narrowing.
struct Frame<T: Scalar> {
    x: T::Wide,
    y: T::Wide,
    width: T::Wide,
    height: T::Wide,
}

impl<T: Scalar> Frame<T> {
    fn narrowed(&self) -> Rectangle<T> {
        Rectangle::new(
            T::narrow(self.x),
            T::narrow(self.y),
            T::narrow(self.width),
            T::narrow(self.height),
        )
    }

    fn checked(&self, op: &'static str) -> Result<Rectangle<T>> {
        let narrowed = (
            T::try_narrow(self.x),
            T::try_narrow(self.y),
            T::try_narrow(self.width),
            T::try_narrow(self.height),
        );
        match narrowed {
            (Some(x), Some(y), Some(width), Some(height)) => {
                Ok(Rectangle::new(x, y, width, height))
            }
            _ => {
                log::debug!(
                    "{op} overflowed the {} domain: x={:?} y={:?} w={:?} h={:?}",
                    T::DOMAIN,
                    self.x,
                    self.y,
                    self.width,
                    self.height
                );
                Err(GeomError::Overflow {
                    op,
                    domain: T::DOMAIN,
                })
            }
        }
    }
}

impl<T: Scalar> Shape<T> for Rectangle<T> {
    type Bounds<'a>
        = &'a Self
    where
        Self: 'a;

    #[inline]
    fn is_empty(&self) -> bool {
        self.width.is_degenerate() || self.height.is_degenerate()
    }

    #[inline]
    fn contains(&self, x: T, y: T) -> bool {
        !self.is_empty()
            && x >= self.x
            && y >= self.y
            && x.widen() < self.right()
            && y.widen() < self.bottom()
    }

    #[inline]
    fn contains_area(&self, x: T, y: T, w: T, h: T) -> bool {
        if self.is_empty() || w.is_degenerate() || h.is_degenerate() {
            return false;
        }
        x >= self.x
            && y >= self.y
            && T::edge(x, w) <= self.right()
            && T::edge(y, h) <= self.bottom()
    }

    #[inline]
    fn intersects_area(&self, x: T, y: T, w: T, h: T) -> bool {
        if self.is_empty() || w.is_degenerate() || h.is_degenerate() {
            return false;
        }
        T::edge(x, w) > self.x.widen()
            && T::edge(y, h) > self.y.widen()
            && x.widen() < self.right()
            && y.widen() < self.bottom()
    }

    #[inline]
    fn bounds(&self) -> Self::Bounds<'_> {
        self
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Rectangle<T> {
    #[inline]
    fn from((x, y, width, height): (T, T, T, T)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl<T: Scalar> std::fmt::Debug for Rectangle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rectangle({}, {} {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Geometry-string form, e.g. `10x5+3-2`.
impl<T: Scalar> std::fmt::Display for Rectangle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        for coord in [self.x, self.y] {
            if coord >= T::zero() {
                write!(f, "+{coord}")?;
            } else {
                write!(f, "{coord}")?;
            }
        }
        Ok(())
    }
}

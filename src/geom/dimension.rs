//! Dimension: a width and a height.

use crate::scalar::Scalar;

/// A width and a height. Either may be zero or negative.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Dimension<T: Scalar> {
    /// Width.
    pub width: T,
    /// Height.
    pub height: T,
}

impl<T: Scalar> Dimension<T> {
    /// Create a new dimension.
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Scalar> From<(T, T)> for Dimension<T> {
    #[inline]
    fn from((width, height): (T, T)) -> Self {
        Self::new(width, height)
    }
}

impl<T: Scalar> std::fmt::Debug for Dimension<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dimension({}x{})", self.width, self.height)
    }
}

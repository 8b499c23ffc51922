//! Plain coordinate holders.
//!
//! [`Point`] and [`Dimension`] carry values in and out of shape operations.
//! They have no derived geometry of their own.

mod dimension;
mod point;

pub use dimension::Dimension;
pub use point::Point;

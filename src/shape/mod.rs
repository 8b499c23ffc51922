//! Shape contract: the capability set shared by every shape.
//!
//! Layout and collision code is written against [`Shape`] rather than a
//! concrete type. A shape answers four questions: is it empty, does it
//! contain a point or rectangle, does it intersect a rectangle, and what are
//! its bounds.
//!
//! # Bounds: view vs copy
//!
//! [`Shape::bounds`] returns a live view borrowed from the shape, while
//! [`Shape::get_bounds`] returns an independent [`Rectangle`](crate::Rectangle).
//! Mutation through a live view is only offered by
//! [`Rectangle::bounds_mut`](crate::Rectangle::bounds_mut), which borrows the
//! source mutably so the aliasing is visible at the call site.
//!
//! # Example
//!
//! ```
//! use planar::{RectF, Shape};
//!
//! fn hit<S: Shape<f32>>(shape: &S, x: f32, y: f32) -> bool {
//!     !shape.is_empty() && shape.contains(x, y)
//! }
//!
//! let r = RectF::new(0.0, 0.0, 10.0, 10.0);
//! assert!(hit(&r, 5.0, 5.0));
//! assert!(!hit(&r, 10.0, 5.0));
//! ```

mod traits;

pub use traits::Shape;

//! # Planar
//!
//! Exact 2D shape predicates and rectangle algebra for layout, collision and
//! rendering code.
//!
//! Planar is deliberately small: it answers containment, intersection, union
//! and edge-classification questions for axis-aligned rectangles, precisely
//! and without tolerance, in whichever numeric domain the caller works in.
//!
//! ## Core Concepts
//!
//! - **Shape contract**: [`Shape`] is the predicate set every shape provides
//!   (emptiness, containment, intersection, bounds)
//! - **Total predicates**: zero and negative sizes are valid states with
//!   defined answers, never errors
//! - **Half-open extents**: minimum edges are inside, maximum edges outside,
//!   so adjacent rectangles tile without overlap
//! - **Numeric domains**: [`RectI`], [`RectF`] and [`RectD`] share one
//!   implementation but keep their own max-coordinate convention
//!
//! ## Example
//!
//! ```rust
//! use planar::{RectF, RectI, Shape};
//!
//! let a = RectF::new(0.0, 0.0, 10.0, 10.0);
//! let b = RectF::new(5.0, 5.0, 10.0, 10.0);
//!
//! assert!(a.intersects(&b));
//! assert_eq!(a.intersection(&b), RectF::new(5.0, 5.0, 5.0, 5.0));
//! assert_eq!(a.union(&b), RectF::new(0.0, 0.0, 15.0, 15.0));
//!
//! // The integer domain reports the last included cell.
//! assert_eq!(RectI::new(0, 0, 5, 5).max_x(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod geom;
pub mod rect;
pub mod scalar;
pub mod shape;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports for convenience
pub use error::GeomError;
pub use geom::{Dimension, Point};
pub use rect::{Outcode, RectD, RectF, RectI, Rectangle};
pub use scalar::Scalar;
pub use shape::Shape;

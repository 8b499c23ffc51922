//! Rectangle algebra: containment, intersection, union and outcodes for
//! axis-aligned rectangles.
//!
//! One generic [`Rectangle`] serves every numeric domain. The aliases below
//! name the three supported instantiations; they do not convert into each
//! other.

mod outcode;
mod rectangle;

pub use outcode::Outcode;
pub use rectangle::Rectangle;

/// Integer-domain rectangle. `max_x`/`max_y` report `edge - 1`.
pub type RectI = Rectangle<i32>;

/// Single-precision rectangle.
pub type RectF = Rectangle<f32>;

/// Double-precision rectangle.
pub type RectD = Rectangle<f64>;

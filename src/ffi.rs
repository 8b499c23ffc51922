//! C Foreign Function Interface (FFI) for Planar.
//!
//! This module exposes the integer and double-precision rectangle algebra
//! with a stable C ABI. Rectangles cross the boundary by value as plain
//! `#[repr(C)]` structs; there are no handles to free.
//!
//! # Safety
//!
//! Pointer arguments must be null or point to a valid, aligned rectangle.
//! Null is tolerated everywhere: predicates return `false`, mutators do
//! nothing, and result-returning functions report
//! [`PlanarResult::NullPointer`].
//!
//! # Example (C)
//!
//! ```c
//! #include "planar.h"
//!
//! int main() {
//!     PlanarRectI a = { 0, 0, 10, 10 };
//!     PlanarRectI b = { 5, 5, 10, 10 };
//!     PlanarRectI out;
//!
//!     if (planar_recti_intersects(&a, &b)) {
//!         planar_recti_intersection(&a, &b, &out);  // { 5, 5, 5, 5 }
//!     }
//!     return 0;
//! }
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]

use crate::error::GeomError;
use crate::rect::{RectD, RectI};
use crate::shape::Shape;
use std::os::raw::{c_char, c_uint};

// =============================================================================
// Value Types
// =============================================================================

/// Integer-domain rectangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanarRectI {
    /// X coordinate of the upper-left corner.
    pub x: i32,
    /// Y coordinate of the upper-left corner.
    pub y: i32,
    /// Width. May be zero or negative.
    pub width: i32,
    /// Height. May be zero or negative.
    pub height: i32,
}

/// Double-precision rectangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanarRectD {
    /// X coordinate of the upper-left corner.
    pub x: f64,
    /// Y coordinate of the upper-left corner.
    pub y: f64,
    /// Width. May be zero or negative.
    pub width: f64,
    /// Height. May be zero or negative.
    pub height: f64,
}

impl From<PlanarRectI> for RectI {
    fn from(r: PlanarRectI) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

impl From<RectI> for PlanarRectI {
    fn from(r: RectI) -> Self {
        Self {
            x: r.x(),
            y: r.y(),
            width: r.width(),
            height: r.height(),
        }
    }
}

impl From<PlanarRectD> for RectD {
    fn from(r: PlanarRectD) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

impl From<RectD> for PlanarRectD {
    fn from(r: RectD) -> Self {
        Self {
            x: r.x(),
            y: r.y(),
            width: r.width(),
            height: r.height(),
        }
    }
}

// =============================================================================
// Result Codes
// =============================================================================

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanarResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer passed.
    NullPointer = 1,
    /// Result not representable in the domain.
    Overflow = 2,
}

impl From<GeomError> for PlanarResult {
    fn from(err: GeomError) -> Self {
        match err {
            GeomError::Overflow { .. } => Self::Overflow,
        }
    }
}

// Outcode bits, matching `Outcode`
/// Point lies left of the rectangle.
pub const PLANAR_OUT_LEFT: c_uint = 1;
/// Point lies above the rectangle.
pub const PLANAR_OUT_TOP: c_uint = 2;
/// Point lies right of the rectangle.
pub const PLANAR_OUT_RIGHT: c_uint = 4;
/// Point lies below the rectangle.
pub const PLANAR_OUT_BOTTOM: c_uint = 8;

// =============================================================================
// Integer Rectangle Functions
// =============================================================================

/// Check whether the rectangle encloses no area.
///
/// A null rectangle is reported as empty.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_is_empty(rect: *const PlanarRectI) -> bool {
    if rect.is_null() {
        warn_null("planar_recti_is_empty");
        return true;
    }
    RectI::from(*rect).is_empty()
}

/// Check whether the point `(x, y)` lies inside the rectangle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_contains(rect: *const PlanarRectI, x: i32, y: i32) -> bool {
    if rect.is_null() {
        warn_null("planar_recti_contains");
        return false;
    }
    RectI::from(*rect).contains(x, y)
}

/// Check whether `rect` completely contains `other`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_contains_rect(
    rect: *const PlanarRectI,
    other: *const PlanarRectI,
) -> bool {
    if rect.is_null() || other.is_null() {
        warn_null("planar_recti_contains_rect");
        return false;
    }
    RectI::from(*rect).contains_rect(&RectI::from(*other))
}

/// Check whether two rectangles share an area of positive size.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_intersects(
    a: *const PlanarRectI,
    b: *const PlanarRectI,
) -> bool {
    if a.is_null() || b.is_null() {
        warn_null("planar_recti_intersects");
        return false;
    }
    RectI::from(*a).intersects(&RectI::from(*b))
}

/// Write the intersection of `a` and `b` to `out`.
///
/// Disjoint inputs produce a rectangle with non-positive width or height.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_intersection(
    a: *const PlanarRectI,
    b: *const PlanarRectI,
    out: *mut PlanarRectI,
) -> PlanarResult {
    if a.is_null() || b.is_null() || out.is_null() {
        warn_null("planar_recti_intersection");
        return PlanarResult::NullPointer;
    }
    *out = RectI::from(*a).intersection(&RectI::from(*b)).into();
    PlanarResult::Ok
}

/// Write the union of `a` and `b` to `out`. Wraps on overflow.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_union(
    a: *const PlanarRectI,
    b: *const PlanarRectI,
    out: *mut PlanarRectI,
) -> PlanarResult {
    if a.is_null() || b.is_null() || out.is_null() {
        warn_null("planar_recti_union");
        return PlanarResult::NullPointer;
    }
    *out = RectI::from(*a).union(&RectI::from(*b)).into();
    PlanarResult::Ok
}

/// Write the union of `a` and `b` to `out`, failing instead of wrapping.
///
/// `out` is left untouched on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_checked_union(
    a: *const PlanarRectI,
    b: *const PlanarRectI,
    out: *mut PlanarRectI,
) -> PlanarResult {
    if a.is_null() || b.is_null() || out.is_null() {
        warn_null("planar_recti_checked_union");
        return PlanarResult::NullPointer;
    }
    match RectI::from(*a).checked_union(&RectI::from(*b)) {
        Ok(union) => {
            *out = union.into();
            PlanarResult::Ok
        }
        Err(err) => err.into(),
    }
}

/// Outcode of `(x, y)` relative to the rectangle (see `PLANAR_OUT_*`).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_outcode(rect: *const PlanarRectI, x: i32, y: i32) -> c_uint {
    if rect.is_null() {
        warn_null("planar_recti_outcode");
        return 0;
    }
    c_uint::from(RectI::from(*rect).outcode(x, y).bits())
}

/// Last included column, `x + width - 1`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_max_x(rect: *const PlanarRectI) -> i32 {
    if rect.is_null() {
        warn_null("planar_recti_max_x");
        return 0;
    }
    RectI::from(*rect).max_x()
}

/// Last included row, `y + height - 1`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_max_y(rect: *const PlanarRectI) -> i32 {
    if rect.is_null() {
        warn_null("planar_recti_max_y");
        return 0;
    }
    RectI::from(*rect).max_y()
}

/// Grow the rectangle in place by `dx`/`dy` on each side.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_grow(rect: *mut PlanarRectI, dx: i32, dy: i32) {
    if rect.is_null() {
        warn_null("planar_recti_grow");
        return;
    }
    let mut r = RectI::from(*rect);
    r.grow(dx, dy);
    *rect = r.into();
}

/// Shift the rectangle in place.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_translate(rect: *mut PlanarRectI, mx: i32, my: i32) {
    if rect.is_null() {
        warn_null("planar_recti_translate");
        return;
    }
    let mut r = RectI::from(*rect);
    r.translate(mx, my);
    *rect = r.into();
}

/// Expand the rectangle in place to contain `(px, py)`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_recti_add_point(rect: *mut PlanarRectI, px: i32, py: i32) {
    if rect.is_null() {
        warn_null("planar_recti_add_point");
        return;
    }
    let mut r = RectI::from(*rect);
    r.add(px, py);
    *rect = r.into();
}

// =============================================================================
// Double Rectangle Functions
// =============================================================================

/// Check whether the rectangle encloses no area.
///
/// A null rectangle is reported as empty.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_is_empty(rect: *const PlanarRectD) -> bool {
    if rect.is_null() {
        warn_null("planar_rectd_is_empty");
        return true;
    }
    RectD::from(*rect).is_empty()
}

/// Check whether the point `(x, y)` lies inside the rectangle.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_contains(rect: *const PlanarRectD, x: f64, y: f64) -> bool {
    if rect.is_null() {
        warn_null("planar_rectd_contains");
        return false;
    }
    RectD::from(*rect).contains(x, y)
}

/// Check whether `rect` completely contains `other`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_contains_rect(
    rect: *const PlanarRectD,
    other: *const PlanarRectD,
) -> bool {
    if rect.is_null() || other.is_null() {
        warn_null("planar_rectd_contains_rect");
        return false;
    }
    RectD::from(*rect).contains_rect(&RectD::from(*other))
}

/// Check whether two rectangles share an area of positive size.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_intersects(
    a: *const PlanarRectD,
    b: *const PlanarRectD,
) -> bool {
    if a.is_null() || b.is_null() {
        warn_null("planar_rectd_intersects");
        return false;
    }
    RectD::from(*a).intersects(&RectD::from(*b))
}

/// Write the intersection of `a` and `b` to `out`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_intersection(
    a: *const PlanarRectD,
    b: *const PlanarRectD,
    out: *mut PlanarRectD,
) -> PlanarResult {
    if a.is_null() || b.is_null() || out.is_null() {
        warn_null("planar_rectd_intersection");
        return PlanarResult::NullPointer;
    }
    *out = RectD::from(*a).intersection(&RectD::from(*b)).into();
    PlanarResult::Ok
}

/// Write the union of `a` and `b` to `out`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_union(
    a: *const PlanarRectD,
    b: *const PlanarRectD,
    out: *mut PlanarRectD,
) -> PlanarResult {
    if a.is_null() || b.is_null() || out.is_null() {
        warn_null("planar_rectd_union");
        return PlanarResult::NullPointer;
    }
    *out = RectD::from(*a).union(&RectD::from(*b)).into();
    PlanarResult::Ok
}

/// Outcode of `(x, y)` relative to the rectangle (see `PLANAR_OUT_*`).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_outcode(rect: *const PlanarRectD, x: f64, y: f64) -> c_uint {
    if rect.is_null() {
        warn_null("planar_rectd_outcode");
        return 0;
    }
    c_uint::from(RectD::from(*rect).outcode(x, y).bits())
}

/// Grow the rectangle in place by `dx`/`dy` on each side.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_grow(rect: *mut PlanarRectD, dx: f64, dy: f64) {
    if rect.is_null() {
        warn_null("planar_rectd_grow");
        return;
    }
    let mut r = RectD::from(*rect);
    r.grow(dx, dy);
    *rect = r.into();
}

/// Shift the rectangle in place.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_translate(rect: *mut PlanarRectD, mx: f64, my: f64) {
    if rect.is_null() {
        warn_null("planar_rectd_translate");
        return;
    }
    let mut r = RectD::from(*rect);
    r.translate(mx, my);
    *rect = r.into();
}

/// Expand the rectangle in place to contain `(px, py)`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn planar_rectd_add_point(rect: *mut PlanarRectD, px: f64, py: f64) {
    if rect.is_null() {
        warn_null("planar_rectd_add_point");
        return;
    }
    let mut r = RectD::from(*rect);
    r.add(px, py);
    *rect = r.into();
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the Planar version string.
#[unsafe(no_mangle)]
pub extern "C" fn planar_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr().cast::<c_char>()
}

// =============================================================================
// Helper Functions
// =============================================================================

fn warn_null(func: &str) {
    log::warn!("{func}: null pointer argument");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Outcode;
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_planar_version() {
        unsafe {
            let version = planar_version();
            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert_eq!(version_str, env!("CARGO_PKG_VERSION"));
        }
    }

    #[test]
    fn test_outcode_constants_match() {
        assert_eq!(PLANAR_OUT_LEFT, c_uint::from(Outcode::LEFT.bits()));
        assert_eq!(PLANAR_OUT_TOP, c_uint::from(Outcode::TOP.bits()));
        assert_eq!(PLANAR_OUT_RIGHT, c_uint::from(Outcode::RIGHT.bits()));
        assert_eq!(PLANAR_OUT_BOTTOM, c_uint::from(Outcode::BOTTOM.bits()));
    }

    #[test]
    fn test_recti_predicates() {
        let a = PlanarRectI { x: 0, y: 0, width: 10, height: 10 };
        let b = PlanarRectI { x: 5, y: 5, width: 10, height: 10 };
        unsafe {
            assert!(!planar_recti_is_empty(&a));
            assert!(planar_recti_contains(&a, 9, 9));
            assert!(!planar_recti_contains(&a, 10, 9));
            assert!(planar_recti_intersects(&a, &b));
            assert!(!planar_recti_contains_rect(&a, &b));
            assert_eq!(planar_recti_outcode(&a, 10, -1), PLANAR_OUT_RIGHT | PLANAR_OUT_TOP);
            assert_eq!(planar_recti_max_x(&a), 9);
            assert_eq!(planar_recti_max_y(&a), 9);
        }
    }

    #[test]
    fn test_recti_intersection_and_union() {
        let a = PlanarRectI { x: 0, y: 0, width: 10, height: 10 };
        let b = PlanarRectI { x: 5, y: 5, width: 10, height: 10 };
        let mut out = PlanarRectI::default();
        unsafe {
            assert_eq!(planar_recti_intersection(&a, &b, &mut out), PlanarResult::Ok);
            assert_eq!(out, PlanarRectI { x: 5, y: 5, width: 5, height: 5 });
            assert_eq!(planar_recti_union(&a, &b, &mut out), PlanarResult::Ok);
            assert_eq!(out, PlanarRectI { x: 0, y: 0, width: 15, height: 15 });
        }
    }

    #[test]
    fn test_recti_checked_union_overflow() {
        let a = PlanarRectI { x: i32::MIN, y: 0, width: 1, height: 1 };
        let b = PlanarRectI { x: i32::MAX - 1, y: 0, width: 1, height: 1 };
        let mut out = PlanarRectI::default();
        unsafe {
            assert_eq!(planar_recti_checked_union(&a, &b, &mut out), PlanarResult::Overflow);
        }
        assert_eq!(out, PlanarRectI::default());
    }

    #[test]
    fn test_recti_mutators() {
        let mut r = PlanarRectI { x: 2, y: 2, width: 6, height: 4 };
        unsafe {
            planar_recti_grow(&mut r, 1, 1);
            assert_eq!(r, PlanarRectI { x: 1, y: 1, width: 8, height: 6 });
            planar_recti_translate(&mut r, -1, -1);
            assert_eq!(r, PlanarRectI { x: 0, y: 0, width: 8, height: 6 });
            planar_recti_add_point(&mut r, 10, 10);
            assert_eq!(r, PlanarRectI { x: 0, y: 0, width: 10, height: 10 });
        }
    }

    #[test]
    fn test_rectd_round_trip_operations() {
        let a = PlanarRectD { x: 0.0, y: 0.0, width: 5.0, height: 5.0 };
        let b = PlanarRectD { x: 10.0, y: 10.0, width: 5.0, height: 5.0 };
        let mut out = PlanarRectD::default();
        unsafe {
            assert!(!planar_rectd_intersects(&a, &b));
            assert_eq!(planar_rectd_intersection(&a, &b, &mut out), PlanarResult::Ok);
            assert!(planar_rectd_is_empty(&out));
            assert_eq!(planar_rectd_union(&a, &b, &mut out), PlanarResult::Ok);
            assert_eq!(out, PlanarRectD { x: 0.0, y: 0.0, width: 15.0, height: 15.0 });
            assert!(planar_rectd_contains_rect(&out, &a));
            assert!(planar_rectd_contains(&out, 14.5, 0.0));
            assert_eq!(planar_rectd_outcode(&a, 5.0, 2.0), PLANAR_OUT_RIGHT);

            let mut r = PlanarRectD::default();
            planar_rectd_add_point(&mut r, 3.0, 4.0);
            assert_eq!(r, PlanarRectD { x: 0.0, y: 0.0, width: 3.0, height: 4.0 });
            planar_rectd_grow(&mut r, 0.5, 0.5);
            planar_rectd_translate(&mut r, 0.5, 0.5);
            assert_eq!(r, PlanarRectD { x: 0.0, y: 0.0, width: 4.0, height: 5.0 });
        }
    }

    #[test]
    fn test_null_pointers_are_tolerated() {
        let a = PlanarRectI::default();
        unsafe {
            assert!(planar_recti_is_empty(ptr::null()));
            assert!(!planar_recti_contains(ptr::null(), 0, 0));
            assert!(!planar_recti_intersects(&a, ptr::null()));
            assert_eq!(
                planar_recti_union(&a, &a, ptr::null_mut()),
                PlanarResult::NullPointer
            );
            planar_recti_grow(ptr::null_mut(), 1, 1);
            assert!(!planar_rectd_contains(ptr::null(), 0.0, 0.0));
            assert_eq!(
                planar_rectd_intersection(ptr::null(), ptr::null(), ptr::null_mut()),
                PlanarResult::NullPointer
            );
        }
    }
}

//! Inch/point unit conversion.
//!
//! Layout tables are authored in inches; the remote slides service
//! takes every coordinate in points. The conversion happens exactly
//! once, at the boundary where a template row becomes a
//! [`ShapeSpec`](crate::plan::ShapeSpec); plan geometry is always in
//! points.

/// Points per inch, fixed by the presentation format.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Convert a length in inches to points.
pub fn inches_to_points(inches: f64) -> f64 {
    inches * POINTS_PER_INCH
}

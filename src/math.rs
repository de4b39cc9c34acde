//! Angle conversion and rounding helpers.

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians, reducing the angle modulo 360° first.
///
/// The reduction keeps the sign of the input (`-450°` becomes `-90°`), which leaves
/// every trigonometric result unchanged while keeping the argument small.
///
/// # Example
/// ```
/// # use sun_position::math::degrees_to_radians;
/// assert!((degrees_to_radians(540.0) - core::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    (degrees % 360.0) * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Rounds to the nearest integer, with halves going towards positive infinity.
///
/// `-7.5` rounds to `-7`, unlike [`f64::round`] which rounds halves away from zero.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

//! Angle unit conversions.

use std::f64::consts::PI;

/// Converts an angle in degrees into radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts an angle in radians into degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

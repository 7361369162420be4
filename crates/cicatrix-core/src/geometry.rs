//! Sphere geometry used to turn volume growth into diameter growth.
//!
//! Agents are spheres: `V = π d³ / 6`. Growth adds volume, so the diameter
//! increment per step shrinks as the cell gets larger.

use std::f64::consts::PI;

/// Smallest diameter an agent can shrink to.
pub const MIN_DIAMETER: f64 = 0.01;
/// Volume of a [`MIN_DIAMETER`] sphere.
pub const MIN_VOLUME: f64 = 5.235_987_7e-7;

pub fn volume_from_diameter(diameter: f64) -> f64 {
    PI / 6.0 * diameter.powi(3)
}

pub fn diameter_from_volume(volume: f64) -> f64 {
    (6.0 * volume / PI).cbrt()
}

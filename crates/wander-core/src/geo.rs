//! Planar geometry helpers.
//!
//! World positions are `glam::Vec3` with **y up**.  Wandering happens on the
//! horizontal XZ plane; the vertical component only matters for surface
//! height and for the full 3D distances used by acceptance checks.

pub use glam::Vec3;

/// Zero the vertical (y) component of `v`.
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Distance between `a` and `b` ignoring the vertical axis.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    flatten(a - b).length()
}

use crate::constants::{SPIRAL_DEPTH, SPIRAL_TAPER};
use glam::Vec3;
use std::f32::consts::TAU;

/// Point on the funnel spiral at phase `t`.
///
/// One full turn per cycle; the radius narrows linearly from 1.0 at the top
/// to `1.0 - SPIRAL_TAPER` at the bottom while `y` drops to `-SPIRAL_DEPTH`.
#[inline]
pub fn position_at(t: f32) -> Vec3 {
    let radius = 1.0 - t * SPIRAL_TAPER;
    let angle = t * TAU;
    Vec3::new(angle.cos() * radius, -t * SPIRAL_DEPTH, angle.sin() * radius)
}

/// Endpoints of the spiral are hidden so words don't pop at the seam.
#[inline]
pub fn is_inside_span(y: f32) -> bool {
    y > -SPIRAL_DEPTH && y < 0.0
}

//! Closed-form curves shared by both path enums.
//!
//! Headings follow the tangent convention of the curves' polar forms: the
//! facing angle is the curve parameter (or an approximate travel direction)
//! rotated a quarter turn, so characters look along their direction of travel.

use std::f32::consts::FRAC_PI_2;

use sg_core::{Pose, Vec2, vec2};

/// Circle of radius `r` around `base`.
#[inline]
pub(crate) fn circular(base: Vec2, t: f32, r: f32) -> Pose {
    Pose::new(base + Vec2::from_angle(t) * r, t + FRAC_PI_2)
}

/// Figure-eight / infinity lobes: full-radius sweep in x, `z_scale * r` in z.
///
/// The two lobes differ only in how pinched the crossing is (`0.5` for the
/// walker/skater figure-eight, `0.6` for the wider skater infinity).
#[inline]
pub(crate) fn lemniscate(base: Vec2, t: f32, r: f32, z_scale: f32) -> Pose {
    let position = base + vec2(t.sin() * r, (2.0 * t).sin() * z_scale * r);
    let tangent = vec2(t.cos() * r, (2.0 * t).cos() * z_scale * r);
    Pose::new(position, tangent.to_angle() + FRAC_PI_2)
}

/// Breathing spiral: a circle whose radius oscillates between `0.3 r`
/// and `1.0 r` on a slow secondary frequency.
#[inline]
pub(crate) fn spiral(base: Vec2, t: f32, r: f32) -> Pose {
    let r_t = r * (0.3 + ((0.3 * t).sin() + 1.0) * 0.35);
    Pose::new(base + Vec2::from_angle(t) * r_t, t + FRAC_PI_2)
}

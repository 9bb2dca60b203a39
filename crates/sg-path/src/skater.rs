//! Rink-character path curves.

use std::f32::consts::{FRAC_PI_2, PI};

use sg_core::{Pose, Vec2, vec2};

use crate::curves;
use crate::params::PathParams;

/// Which closed-form curve a skater traces around its rink center.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkaterPath {
    /// Plain circle around the rink center.
    #[default]
    Circular,
    /// Figure-eight through the rink center.
    Figure8,
    /// Circle whose radius slowly breathes between 30% and 100%.
    Spiral,
    /// Wider-waisted figure-eight.
    Infinity,
    /// Circles at three discrete radii, stepping outward every half turn
    /// and wrapping back to the innermost lap.
    Laps,
    /// Lateral slalom across the rink while sweeping forward and back.
    Zigzag,
}

impl SkaterPath {
    /// Evaluate the raw (pre-steering) pose at the given agent clock.
    ///
    /// Pure: identical inputs always produce the identical pose.
    pub fn pose(self, params: &PathParams, base: Vec2, clock_secs: f32) -> Pose {
        let t = params.t(clock_secs);
        let r = params.radius;
        match self {
            SkaterPath::Circular => curves::circular(base, t, r),
            SkaterPath::Figure8 => curves::lemniscate(base, t, r, 0.5),
            SkaterPath::Spiral => curves::spiral(base, t, r),
            SkaterPath::Infinity => curves::lemniscate(base, t, r, 0.6),
            SkaterPath::Laps => {
                // Band index cycles 0,1,2 as t crosses multiples of π.
                let band = ((t / PI).floor() as i64).rem_euclid(3) as f32;
                curves::circular(base, t, r * (0.4 + band * 0.3))
            }
            SkaterPath::Zigzag => {
                let position = base
                    + vec2(
                        (2.0 * t).sin() * 0.8 * r,
                        ((t.sin() + 1.0) * 0.5) * 1.2 * r - 0.6 * r,
                    );
                let tangent = vec2((2.0 * t).cos() * 0.8 * r, t.cos() * 1.2 * r);
                Pose::new(position, tangent.to_angle() + FRAC_PI_2)
            }
        }
    }
}

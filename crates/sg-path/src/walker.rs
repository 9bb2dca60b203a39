//! Ground-character path curves.

use std::f32::consts::{FRAC_PI_2, TAU};

use sg_core::{Pose, Vec2, vec2};

use crate::curves;
use crate::params::PathParams;

/// Which closed-form curve a walker follows.
///
/// `Straight` and `BackForth` traverse the configured segment; all other
/// kinds orbit the walker's base anchor.  A segment path configured without
/// endpoints silently evaluates as `Circular` so a misconfigured walker keeps
/// moving instead of failing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WalkerPath {
    /// Ease along the segment and back, always facing the forward direction
    /// (the return leg is a backwards slide).
    #[default]
    Straight,
    /// Ease along the segment and back, turning to face the travel direction
    /// on each leg.
    BackForth,
    /// Figure-eight around the base.
    Figure8,
    /// Circle whose radius slowly breathes between 30% and 100%.
    Spiral,
    /// Slow orbit with a small high-frequency dither, for an aimless look.
    Wander,
    /// Plain circle around the base.  Also the fallback for segment paths
    /// without endpoints.
    Circular,
}

impl WalkerPath {
    /// Evaluate the raw (pre-steering) pose at the given agent clock.
    ///
    /// Pure: identical inputs always produce the identical pose.
    pub fn pose(self, params: &PathParams, base: Vec2, clock_secs: f32) -> Pose {
        let t = params.t(clock_secs);
        let r = params.radius;
        match self {
            WalkerPath::Straight => match params.segment {
                Some(seg) => {
                    let u = ((0.5 * t).sin() + 1.0) * 0.5;
                    Pose::new(seg.point_at(u), seg.heading())
                }
                None => curves::circular(base, t, r),
            },
            WalkerPath::BackForth => match params.segment {
                Some(seg) => {
                    let swing = (0.5 * t).sin();
                    let dir = if swing > 0.0 { 1.0 } else { -1.0 };
                    let heading = ((seg.to - seg.from) * dir).to_angle();
                    Pose::new(seg.point_at(swing.abs()), heading)
                }
                None => curves::circular(base, t, r),
            },
            WalkerPath::Figure8 => curves::lemniscate(base, t, r, 0.5),
            WalkerPath::Spiral => curves::spiral(base, t, r),
            WalkerPath::Wander => {
                let orbit = (0.1 * t).sin() * TAU;
                let dither = vec2((0.3 * t).sin(), (0.3 * t).cos()) * 0.5;
                let position = base + Vec2::from_angle(orbit) * (0.5 * r) + dither;
                Pose::new(position, orbit + FRAC_PI_2)
            }
            WalkerPath::Circular => curves::circular(base, t, r),
        }
    }
}

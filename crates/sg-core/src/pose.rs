//! Planar pose: where an agent stands and which way it faces.

use glam::Vec2;

/// Position on the ground plane plus a facing angle.
///
/// `position` holds the scene's `(x, z)` coordinates (see the crate docs for
/// the axis convention).  `heading` is yaw in radians and is deliberately not
/// wrapped into `[0, 2π)`: path formulas produce monotonically growing angles
/// and consumers that need a bounded value can wrap at the edge.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub position: Vec2,
    pub heading:  f32,
}

impl Pose {
    #[inline]
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Planar distance to another pose.
    #[inline]
    pub fn distance(&self, other: &Pose) -> f32 {
        self.position.distance(other.position)
    }
}

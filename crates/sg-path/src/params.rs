//! Shared path parameters.

use sg_core::Vec2;

/// A directed segment on the ground plane, used by the walker segment paths.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Vec2,
    pub to:   Vec2,
}

impl Segment {
    #[inline]
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Point at fraction `u` along the segment (`0.0` = `from`, `1.0` = `to`).
    #[inline]
    pub fn point_at(&self, u: f32) -> Vec2 {
        self.from.lerp(self.to, u)
    }

    /// The segment's direction as a heading angle.
    ///
    /// A degenerate segment (`from == to`) yields `0.0`, matching
    /// `atan2(0, 0)`.
    #[inline]
    pub fn heading(&self) -> f32 {
        (self.to - self.from).to_angle()
    }
}

/// Tuning knobs for a single agent's path.
///
/// `radius` scales every curve; `start_phase` offsets the curve parameter so
/// agents sharing a path type are not stacked on top of each other; `segment`
/// only matters for the walker segment paths and is ignored by every other
/// kind.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathParams {
    /// Curve radius (or half-extent for segmentless lateral curves).
    pub radius: f32,

    /// Added to the agent clock before evaluation, in radians of curve
    /// parameter.  Two agents on the same circle with phases π apart stay on
    /// opposite sides forever.
    pub start_phase: f32,

    /// Endpoints for `WalkerPath::Straight` / `WalkerPath::BackForth`.
    /// Segment paths without endpoints fall back to the circular curve.
    pub segment: Option<Segment>,
}

impl PathParams {
    /// Parameters with the given radius, zero phase, and no segment.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            start_phase: 0.0,
            segment: None,
        }
    }

    /// Builder-style phase override.
    pub fn with_phase(mut self, start_phase: f32) -> Self {
        self.start_phase = start_phase;
        self
    }

    /// Builder-style segment endpoints.
    pub fn with_segment(mut self, from: Vec2, to: Vec2) -> Self {
        self.segment = Some(Segment::new(from, to));
        self
    }

    /// Effective curve parameter for a given agent clock.
    #[inline]
    pub fn t(&self, clock_secs: f32) -> f32 {
        self.start_phase + clock_secs
    }
}

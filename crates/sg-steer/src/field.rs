//! Static obstacle field with a spatial index.
//!
//! Obstacles are circles on the ground plane (tree trunks, buildings, lamp
//! posts...).  The set is populated once at scene setup and never mutated at
//! runtime, so the field bulk-loads an R-tree and serves read-only envelope
//! queries from then on.

use rstar::{AABB, RTree, RTreeObject};

use sg_core::Vec2;

// ── Obstacle ─────────────────────────────────────────────────────────────────

/// A circular no-walk zone on the ground plane.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

// ── R-tree circle entry ──────────────────────────────────────────────────────

/// Entry stored in the R-tree: the obstacle with its circle's bounding box as
/// the envelope, so an envelope intersection over-approximates the circle
/// test.
#[derive(Clone)]
struct CircleEntry {
    obstacle: Obstacle,
}

impl RTreeObject for CircleEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        let c = self.obstacle.center;
        let r = self.obstacle.radius;
        AABB::from_corners([c.x - r, c.y - r], [c.x + r, c.y + r])
    }
}

// ── ObstacleField ────────────────────────────────────────────────────────────

/// The immutable set of obstacle circles a scene steers its walkers around.
pub struct ObstacleField {
    index: RTree<CircleEntry>,
}

impl ObstacleField {
    /// Bulk-load a field from a list of circles.
    ///
    /// Time complexity: O(N log N) — faster than N inserts.
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        let entries = obstacles
            .into_iter()
            .map(|obstacle| CircleEntry { obstacle })
            .collect();
        Self { index: RTree::bulk_load(entries) }
    }

    /// A field with no obstacles.  Walkers in such a scene only steer around
    /// each other.
    pub fn empty() -> Self {
        Self { index: RTree::new() }
    }

    pub fn len(&self) -> usize {
        self.index.size()
    }

    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }

    /// Iterator over every obstacle, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.index.iter().map(|e| &e.obstacle)
    }

    /// Obstacles whose circles could lie within `clearance` of `point`.
    ///
    /// Returns a **superset**: the envelope intersection over-approximates
    /// the circle test, so callers must re-check exact distances.
    /// `clearance` must be non-negative.
    pub fn near(&self, point: Vec2, clearance: f32) -> impl Iterator<Item = &Obstacle> + '_ {
        let window = AABB::from_corners(
            [point.x - clearance, point.y - clearance],
            [point.x + clearance, point.y + clearance],
        );
        self.index
            .locate_in_envelope_intersecting(&window)
            .map(|e| &e.obstacle)
    }
}

//! Spawn specs and per-agent runtime state.

use sg_core::{AgentClock, Pose, Vec2};
use sg_path::{PathParams, SkaterPath, WalkerPath};

// ── Spawn specs ──────────────────────────────────────────────────────────────

/// Configuration for one walker, fixed at spawn time.
///
/// Defaults: speed `1.0`, radius `3.0`, zero phase, [`WalkerPath::Straight`]
/// (which, with no segment configured, evaluates as a circle).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkerSpec {
    /// Anchor the path curves around (or near, for segment paths).
    pub base: Vec2,
    /// Clock multiplier; `0.0` pins the walker to its start-phase pose.
    pub speed: f32,
    pub path: WalkerPath,
    pub params: PathParams,
}

impl WalkerSpec {
    pub fn new(base: Vec2) -> Self {
        Self {
            base,
            speed: 1.0,
            path: WalkerPath::default(),
            params: PathParams::new(3.0),
        }
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn path(mut self, path: WalkerPath) -> Self {
        self.path = path;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.params.radius = radius;
        self
    }

    pub fn phase(mut self, start_phase: f32) -> Self {
        self.params.start_phase = start_phase;
        self
    }

    /// Endpoints for the segment paths (`Straight`, `BackForth`).
    pub fn segment(mut self, from: Vec2, to: Vec2) -> Self {
        self.params = self.params.with_segment(from, to);
        self
    }
}

/// Configuration for one skater, fixed at spawn time.
///
/// Defaults: speed `0.5`, radius `2.0`, zero phase,
/// [`SkaterPath::Circular`].  The skater's `base` doubles as its rink center
/// for the containment rule.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkaterSpec {
    /// Rink center: path anchor and containment origin.
    pub base: Vec2,
    /// Clock multiplier; `0.0` pins the skater to its start-phase pose.
    pub speed: f32,
    pub path: SkaterPath,
    pub params: PathParams,
}

impl SkaterSpec {
    pub fn new(base: Vec2) -> Self {
        Self {
            base,
            speed: 0.5,
            path: SkaterPath::default(),
            params: PathParams::new(2.0),
        }
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn path(mut self, path: SkaterPath) -> Self {
        self.path = path;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.params.radius = radius;
        self
    }

    pub fn phase(mut self, start_phase: f32) -> Self {
        self.params.start_phase = start_phase;
        self
    }
}

// ── Runtime state ────────────────────────────────────────────────────────────

/// Roster entry for one walker.  `last == None` means the walker has never
/// been ticked and holds no ledger entry yet.
#[derive(Clone, Debug)]
pub(crate) struct Walker {
    pub(crate) spec:  WalkerSpec,
    pub(crate) clock: AgentClock,
    pub(crate) last:  Option<Pose>,
}

impl Walker {
    pub(crate) fn new(spec: WalkerSpec) -> Self {
        Self { spec, clock: AgentClock::new(), last: None }
    }
}

/// Roster entry for one skater.  Same lifecycle as [`Walker`].
#[derive(Clone, Debug)]
pub(crate) struct Skater {
    pub(crate) spec:  SkaterSpec,
    pub(crate) clock: AgentClock,
    pub(crate) last:  Option<Pose>,
}

impl Skater {
    pub(crate) fn new(spec: SkaterSpec) -> Self {
        Self { spec, clock: AgentClock::new(), last: None }
    }
}

//! Time model for frame-driven ambient animation.
//!
//! # Design
//!
//! There are two separate notions of time:
//!
//! * [`Frame`] — the scene's monotonically increasing frame counter.  Integer,
//!   so frame bookkeeping (trace strides, summaries) is exact.
//! * [`AgentClock`] — each agent's private parameter clock.  It accumulates
//!   `delta_secs * speed` every tick, so two agents ticked with the same frame
//!   deltas but different speed multipliers sit at different points along
//!   their paths.  Path evaluation is a pure function of this clock, which is
//!   what makes poses reproducible: replaying the same deltas replays the
//!   same motion.

use std::fmt;

// ── Frame ────────────────────────────────────────────────────────────────────

/// An absolute frame counter for a scene.
///
/// Stored as `u64`: at 60 frames per second a u64 lasts ~9.7 billion years,
/// so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// The frame after `self`.
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── AgentClock ───────────────────────────────────────────────────────────────

/// A single agent's private path-parameter clock.
///
/// The clock only moves forward (for non-negative frame deltas) and a speed
/// multiplier of zero freezes it, which legally pins the agent to its
/// start-phase pose forever.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentClock {
    secs: f32,
}

impl AgentClock {
    /// A clock at zero elapsed seconds.
    pub fn new() -> Self {
        Self { secs: 0.0 }
    }

    /// Advance by one frame delta, scaled by the agent's speed multiplier.
    ///
    /// # Panics
    /// Panics in debug mode if `delta_secs` is negative; release builds
    /// accept the caller's value unchecked.
    #[inline]
    pub fn advance(&mut self, delta_secs: f32, speed: f32) {
        debug_assert!(delta_secs >= 0.0, "frame delta must be non-negative");
        self.secs += delta_secs * speed;
    }

    /// Accumulated speed-scaled seconds since the agent was spawned.
    #[inline]
    pub fn secs(&self) -> f32 {
        self.secs
    }
}

impl fmt::Display for AgentClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.secs)
    }
}

//! The `Scene` struct and its frame loop.

use sg_core::{Frame, Pose, SkaterId, WalkerId};
use sg_steer::{
    AVOID_CLEARANCE, OBSTACLE_GAIN, ObstacleField, RINK_FALLOFF, RINK_GAIN, RINK_RADIUS,
    SKATER_MIN_SEPARATION, SKATER_SEPARATION_GAIN, WALKER_MIN_SEPARATION,
    WALKER_SEPARATION_GAIN, containment_push, obstacle_push, separation_push,
};

use crate::agent::{Skater, SkaterSpec, Walker, WalkerSpec};
use crate::error::{SceneError, SceneResult};
use crate::ledger::PositionLedger;
use crate::observer::SceneObserver;

/// An ambient cast and the world it moves through.
///
/// The scene owns both rosters, one position ledger per class, and the
/// obstacle field (injected once at construction, immutable afterwards).
/// Ids are dense roster indices assigned in spawn order; a fresh scene
/// restarts both sequences at zero.
///
/// Hosts either call [`advance`](Self::advance) once per rendered frame, or
/// drive individual agents through [`tick_walker`](Self::tick_walker) /
/// [`tick_skater`](Self::tick_skater) from their own loop.
pub struct Scene {
    walkers: Vec<Walker>,
    skaters: Vec<Skater>,
    walker_ledger: PositionLedger<WalkerId>,
    skater_ledger: PositionLedger<SkaterId>,
    obstacles: ObstacleField,
    frame: Frame,
}

impl Scene {
    // ── Construction ──────────────────────────────────────────────────────

    /// A scene steering its walkers around the given obstacle circles.
    pub fn new(obstacles: ObstacleField) -> Self {
        Self {
            walkers: Vec::new(),
            skaters: Vec::new(),
            walker_ledger: PositionLedger::new(),
            skater_ledger: PositionLedger::new(),
            obstacles,
            frame: Frame::ZERO,
        }
    }

    /// A scene with no obstacles; walkers only steer around each other.
    pub fn empty() -> Self {
        Self::new(ObstacleField::empty())
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Add a walker to the roster.  The walker is uninitialized (no ledger
    /// entry) until its first tick.
    pub fn spawn_walker(&mut self, spec: WalkerSpec) -> WalkerId {
        let id = WalkerId(self.walkers.len() as u32);
        self.walkers.push(Walker::new(spec));
        id
    }

    /// Add a skater to the roster.  Same lifecycle as walkers.
    pub fn spawn_skater(&mut self, spec: SkaterSpec) -> SkaterId {
        let id = SkaterId(self.skaters.len() as u32);
        self.skaters.push(Skater::new(spec));
        id
    }

    // ── Dimensions & read-back ────────────────────────────────────────────

    pub fn walker_count(&self) -> usize {
        self.walkers.len()
    }

    pub fn skater_count(&self) -> usize {
        self.skaters.len()
    }

    pub fn agent_count(&self) -> usize {
        self.walkers.len() + self.skaters.len()
    }

    /// The frame the next `advance` call will run.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    /// The pose this walker last committed.  `None` until its first tick
    /// (or for an id from another scene).
    pub fn walker_pose(&self, id: WalkerId) -> Option<Pose> {
        self.walkers.get(id.index()).and_then(|w| w.last)
    }

    /// The pose this skater last committed.  `None` until its first tick.
    pub fn skater_pose(&self, id: SkaterId) -> Option<Pose> {
        self.skaters.get(id.index()).and_then(|s| s.last)
    }

    /// Read-only view of the walker position ledger.
    ///
    /// This is exactly the registry the walker separation rule reads; it is
    /// public so hosts can inspect crowding without ticking anything.
    pub fn walker_ledger(&self) -> &PositionLedger<WalkerId> {
        &self.walker_ledger
    }

    /// Read-only view of the skater position ledger.
    pub fn skater_ledger(&self) -> &PositionLedger<SkaterId> {
        &self.skater_ledger
    }

    // ── Per-agent ticking ─────────────────────────────────────────────────

    /// Step one walker by `delta_secs` and return its corrected pose.
    ///
    /// Applies the walker rule stack: obstacle avoidance plus peer
    /// separation, summed and added once to the raw path position.
    pub fn tick_walker(&mut self, id: WalkerId, delta_secs: f32) -> SceneResult<Pose> {
        let walker = self
            .walkers
            .get_mut(id.index())
            .ok_or(SceneError::UnknownWalker(id))?;
        walker.clock.advance(delta_secs, walker.spec.speed);
        let raw = walker
            .spec
            .path
            .pose(&walker.spec.params, walker.spec.base, walker.clock.secs());

        let push = obstacle_push(raw.position, &self.obstacles, AVOID_CLEARANCE, OBSTACLE_GAIN)
            + separation_push(
                raw.position,
                self.walker_ledger.neighbors(id),
                WALKER_MIN_SEPARATION,
                WALKER_SEPARATION_GAIN,
            );

        let pose = Pose::new(raw.position + push, raw.heading);
        self.walker_ledger.commit(id, pose.position);
        self.walkers[id.index()].last = Some(pose);
        Ok(pose)
    }

    /// Step one skater by `delta_secs` and return its corrected pose.
    ///
    /// Applies the skater rule stack: rink containment around the skater's
    /// base plus peer separation.
    pub fn tick_skater(&mut self, id: SkaterId, delta_secs: f32) -> SceneResult<Pose> {
        let skater = self
            .skaters
            .get_mut(id.index())
            .ok_or(SceneError::UnknownSkater(id))?;
        skater.clock.advance(delta_secs, skater.spec.speed);
        let rink_center = skater.spec.base;
        let raw = skater
            .spec
            .path
            .pose(&skater.spec.params, rink_center, skater.clock.secs());

        let push = containment_push(raw.position, rink_center, RINK_RADIUS, RINK_FALLOFF, RINK_GAIN)
            + separation_push(
                raw.position,
                self.skater_ledger.neighbors(id),
                SKATER_MIN_SEPARATION,
                SKATER_SEPARATION_GAIN,
            );

        let pose = Pose::new(raw.position + push, raw.heading);
        self.skater_ledger.commit(id, pose.position);
        self.skaters[id.index()].last = Some(pose);
        Ok(pose)
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Step every agent by `delta_secs` and bump the frame counter.
    ///
    /// Walkers tick first in spawn order, then skaters in spawn order — a
    /// fixed order, so the live-ledger staleness asymmetry is reproducible.
    /// Observer hooks fire around and between the ticks.  Returns the number
    /// of agents stepped.
    pub fn advance<O: SceneObserver>(&mut self, delta_secs: f32, observer: &mut O) -> usize {
        let frame = self.frame;
        observer.on_frame_start(frame);

        for i in 0..self.walkers.len() {
            let id = WalkerId(i as u32);
            // Roster-range ids cannot fail.
            if let Ok(pose) = self.tick_walker(id, delta_secs) {
                observer.on_walker_pose(frame, id, pose);
            }
        }
        for i in 0..self.skaters.len() {
            let id = SkaterId(i as u32);
            if let Ok(pose) = self.tick_skater(id, delta_secs) {
                observer.on_skater_pose(frame, id, pose);
            }
        }

        let ticked = self.walkers.len() + self.skaters.len();
        observer.on_frame_end(frame, ticked);
        self.frame = frame.next();
        ticked
    }
}

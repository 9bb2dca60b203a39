//! `sg-scene` — scene orchestration for the snowglobe simulation.
//!
//! A [`Scene`] owns everything an ambient cast needs: the walker and skater
//! rosters, one live position ledger per class, and the immutable obstacle
//! field.  The host (typically a renderer) drives it one frame at a time.
//!
//! # Per-agent frame step
//!
//! ```text
//! tick_walker(id, dt):
//!   ① clock   — clock += dt * speed
//!   ② path    — raw = path.pose(params, base, clock)      (pure, stateless)
//!   ③ steer   — push = Σ active class rules at raw        (single pass)
//!   ④ commit  — ledger[id] = raw.position + push
//!   ⑤ return  — Pose { raw.position + push, raw.heading }
//! ```
//!
//! Steering never touches the heading, and corrections never accumulate: the
//! next frame starts from a fresh path evaluation.
//!
//! # Ordering
//!
//! The ledgers are live maps.  Within one [`Scene::advance`] frame, an agent
//! processed later sees the positions committed by agents processed earlier
//! in the **same** frame, and the previous-frame positions of everyone else.
//! That one-frame-staleness asymmetry is part of the model's look and is
//! deliberately not hidden behind double-buffering.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sg_core::vec2;
//! use sg_scene::{NoopObserver, Scene, SkaterSpec, WalkerSpec};
//! use sg_steer::ObstacleField;
//!
//! let mut scene = Scene::new(ObstacleField::empty());
//! scene.spawn_walker(WalkerSpec::new(vec2(0.0, 0.0)));
//! scene.spawn_skater(SkaterSpec::new(vec2(0.0, 8.0)));
//! loop {
//!     scene.advance(1.0 / 60.0, &mut NoopObserver);
//! }
//! ```

pub mod agent;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod scene;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{SkaterSpec, WalkerSpec};
pub use error::{SceneError, SceneResult};
pub use ledger::PositionLedger;
pub use observer::{NoopObserver, SceneObserver};
pub use scene::Scene;

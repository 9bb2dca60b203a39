//! `sg-steer` — post-hoc steering corrections for ambient characters.
//!
//! Path evaluation (`sg-path`) is pure and knows nothing about the scene;
//! this crate supplies the corrections that keep raw path positions from
//! clipping through obstacles, stacking on top of peers, or drifting off the
//! rink.  Every rule returns a planar displacement; the scene sums the active
//! rules for an agent's class and adds the sum **once** to the raw position.
//!
//! Corrections are single-pass by contract: they are not re-evaluated after
//! displacement, and they do not accumulate across frames (the next frame
//! starts from the freshly evaluated path position again).  The result is a
//! cheap soft repulsion, not a collision solver.
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`field`] | `Obstacle`, `ObstacleField` (R-tree indexed)        |
//! | [`rules`] | `obstacle_push`, `separation_push`, `containment_push`, gain constants |

pub mod field;
pub mod rules;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use field::{Obstacle, ObstacleField};
pub use rules::{
    AVOID_CLEARANCE, OBSTACLE_GAIN, RINK_FALLOFF, RINK_GAIN, RINK_RADIUS,
    SKATER_MIN_SEPARATION, SKATER_SEPARATION_GAIN, WALKER_MIN_SEPARATION,
    WALKER_SEPARATION_GAIN, containment_push, obstacle_push, separation_push,
};

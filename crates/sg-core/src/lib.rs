//! `sg-core` — foundational types for the `snowglobe` ambient character
//! simulation.
//!
//! This crate is a dependency of every other `sg-*` crate.  It intentionally
//! has no `sg-*` dependencies and minimal external ones (only `glam`, plus
//! optional `serde`).
//!
//! # Coordinate convention
//!
//! Characters move on the ground plane.  A planar point holds the scene's
//! `(x, z)` coordinates as a [`Vec2`] with `x -> x` and `z -> y`; headings are
//! yaw angles in radians, measured with `atan2(z, x)` so that `Vec2::to_angle`
//! and `Vec2::from_angle` line up with facing math.
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `WalkerId`, `SkaterId`                          |
//! | [`clock`]  | `AgentClock` (per-agent), `Frame` (per-scene)   |
//! | [`pose`]   | `Pose` (planar position + heading)              |
//! | [`class`]  | `AgentClass` enum                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod class;
pub mod clock;
pub mod ids;
pub mod pose;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use class::AgentClass;
pub use clock::{AgentClock, Frame};
pub use glam::{Vec2, vec2};
pub use ids::{SkaterId, WalkerId};
pub use pose::Pose;

//! `sg-path` — parametric path evaluation for ambient characters.
//!
//! Every path is a pure function from an agent's clock to a [`Pose`]:
//!
//! ```text
//! pose = kind.pose(&params, base, clock_secs)
//! ```
//!
//! with the effective curve parameter `t = params.start_phase + clock_secs`.
//! There is no per-path state and no integration: an agent's raw position
//! never drifts, because each frame re-evaluates the closed-form curve from
//! scratch.  Steering corrections (a different crate's business) displace the
//! *committed* position only and are forgotten by the next frame.
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`params`] | `PathParams`, `Segment`                                |
//! | [`walker`] | `WalkerPath` — ground character curves                 |
//! | [`skater`] | `SkaterPath` — rink character curves                   |
//!
//! Walker segment paths (`Straight`, `BackForth`) need endpoints; when the
//! parameters carry none, evaluation falls back to the circular curve instead
//! of erroring.  Misconfigured agents keep moving.

mod curves;
pub mod params;
pub mod skater;
pub mod walker;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use params::{PathParams, Segment};
pub use skater::SkaterPath;
pub use walker::WalkerPath;

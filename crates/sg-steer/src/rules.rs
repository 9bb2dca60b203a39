//! Corrective steering rules and their tuning constants.
//!
//! All three rules share one shape: find the offending proximity, scale a
//! unit push vector by how deep the violation is, and weight it by a gain
//! below 1.  Gains are deliberately soft — a single pass under-corrects, and
//! the next frame's fresh path evaluation gets another chance.  An exactly
//! coincident pair degenerates to a push along +x.

use sg_core::Vec2;

use crate::field::ObstacleField;

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Extra clearance a walker keeps around every obstacle circle.
pub const AVOID_CLEARANCE: f32 = 1.2;
/// Weight of the obstacle-avoidance push.
pub const OBSTACLE_GAIN: f32 = 0.3;

/// Walkers closer than this push each other apart.
pub const WALKER_MIN_SEPARATION: f32 = 1.0;
/// Weight of the walker separation push.
pub const WALKER_SEPARATION_GAIN: f32 = 0.4;

/// Skaters closer than this push each other apart.
pub const SKATER_MIN_SEPARATION: f32 = 0.9;
/// Weight of the skater separation push.
pub const SKATER_SEPARATION_GAIN: f32 = 0.5;

/// Skaters farther than this from their rink center get pushed back in.
pub const RINK_RADIUS: f32 = 3.5;
/// Distance over which the containment push ramps up to full strength.
pub const RINK_FALLOFF: f32 = 0.5;
/// Weight of the containment push.  Together with [`RINK_FALLOFF`] the
/// default constants return an escaped skater exactly to the boundary.
pub const RINK_GAIN: f32 = 0.5;

// ── Rules ────────────────────────────────────────────────────────────────────

/// Sum of pushes away from every obstacle circle within `clearance` of `raw`.
///
/// Each violated circle contributes `unit(raw - center)` scaled by the
/// penetration fraction `(radius + clearance - dist) / clearance` and `gain`.
/// A non-positive `clearance` disables the rule.
pub fn obstacle_push(raw: Vec2, field: &ObstacleField, clearance: f32, gain: f32) -> Vec2 {
    if clearance <= 0.0 {
        return Vec2::ZERO;
    }
    let mut push = Vec2::ZERO;
    for obstacle in field.near(raw, clearance) {
        let min_dist = obstacle.radius + clearance;
        let delta = raw - obstacle.center;
        let dist = delta.length();
        if dist < min_dist {
            let dir = delta.try_normalize().unwrap_or(Vec2::X);
            push += dir * ((min_dist - dist) / clearance) * gain;
        }
    }
    push
}

/// Sum of pushes away from every peer closer than `min_separation`.
///
/// `peers` is the querying agent's class registry snapshot **excluding
/// itself**; passing the agent's own position would pin it with a permanent
/// +x push.  A non-positive `min_separation` disables the rule.
pub fn separation_push(
    raw: Vec2,
    peers: impl IntoIterator<Item = Vec2>,
    min_separation: f32,
    gain: f32,
) -> Vec2 {
    if min_separation <= 0.0 {
        return Vec2::ZERO;
    }
    let mut push = Vec2::ZERO;
    for peer in peers {
        let delta = raw - peer;
        let dist = delta.length();
        if dist < min_separation {
            let dir = delta.try_normalize().unwrap_or(Vec2::X);
            push += dir * ((min_separation - dist) / min_separation) * gain;
        }
    }
    push
}

/// Push back toward `center` when `raw` has strayed beyond `limit`.
///
/// Inside the limit the push is zero.  Outside, the push grows linearly with
/// the overshoot at a slope of `gain / falloff`.  A non-positive `falloff`
/// disables the rule.
pub fn containment_push(raw: Vec2, center: Vec2, limit: f32, falloff: f32, gain: f32) -> Vec2 {
    if falloff <= 0.0 {
        return Vec2::ZERO;
    }
    let delta = raw - center;
    let dist = delta.length();
    if dist <= limit {
        return Vec2::ZERO;
    }
    let dir = delta.try_normalize().unwrap_or(Vec2::X);
    -dir * ((dist - limit) / falloff) * gain
}

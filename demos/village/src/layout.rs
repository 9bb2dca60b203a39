//! Shared winter-village ground plan.
//!
//! A fixed table of 41 obstacle circles approximating the footprints of the
//! village set pieces, plus the frozen-pond rink center.  Positions are scene
//! `(x, z)` meters; positive z is "north" toward the pond.

use sg_core::{Vec2, vec2};
use sg_steer::Obstacle;

/// Center of the frozen pond; skaters orbit and are contained here.
pub const RINK_CENTER: Vec2 = Vec2::new(0.0, 8.0);

fn circle(x: f32, z: f32, r: f32) -> Obstacle {
    Obstacle::new(vec2(x, z), r)
}

/// Build the village obstacle table.
///
/// Walkers steer around every circle here; skaters ignore it (the pond
/// border ring keeps walkers off the ice, and containment keeps skaters on
/// it).
pub fn village_obstacles() -> Vec<Obstacle> {
    let mut o = Vec::with_capacity(41);

    // Buildings.
    o.push(circle(0.0, -8.0, 2.2)); // church
    o.push(circle(8.0, 2.0, 1.7)); // shop
    o.push(circle(-8.0, 2.0, 1.7)); // cabin
    o.push(circle(10.0, -2.0, 1.2)); // houses
    o.push(circle(8.0, -4.0, 1.2));
    o.push(circle(-10.0, -2.0, 1.2));
    o.push(circle(-8.0, -4.0, 1.2));

    // Trees; the big one marks the village center.
    o.push(circle(0.0, 0.0, 1.8));
    o.push(circle(-4.0, -3.0, 1.0));
    o.push(circle(4.0, -3.0, 1.1));
    o.push(circle(-3.0, 4.0, 0.9));
    o.push(circle(3.0, 4.0, 1.2));
    o.push(circle(-12.0, -6.0, 0.8));
    o.push(circle(12.0, -6.0, 0.9));
    o.push(circle(-10.0, 6.0, 1.0));
    o.push(circle(10.0, 6.0, 1.1));

    // Lamp posts.
    for (x, z) in [
        (-4.0, -4.0),
        (4.0, -4.0),
        (-4.0, 4.0),
        (4.0, 4.0),
        (0.0, -6.0),
        (0.0, 6.0),
        (-6.0, 0.0),
        (6.0, 0.0),
    ] {
        o.push(circle(x, z, 0.15));
    }

    // Benches.
    o.push(circle(-6.0, 8.0, 0.9));
    o.push(circle(6.0, 8.0, 0.9));
    o.push(circle(0.0, 12.0, 0.9));

    // Snowmen.
    o.push(circle(-6.0, -1.0, 0.6));
    o.push(circle(6.0, -1.0, 0.6));
    o.push(circle(-5.0, 5.0, 0.6));
    o.push(circle(5.0, 5.0, 0.6));

    // Present piles under the center tree and on the greens.
    for (x, z) in [
        (-0.8, 0.8),
        (0.8, 0.8),
        (-0.5, -1.2),
        (0.5, -1.2),
        (-4.5, -2.5),
        (4.5, -2.5),
        (-2.5, 4.5),
        (2.5, 4.5),
    ] {
        o.push(circle(x, z, 0.3));
    }

    // Bridge abutment at the pond's south edge, then the pond border ring
    // itself (keeps walkers off the ice).
    o.push(circle(0.0, 6.0, 1.8));
    o.push(circle(RINK_CENTER.x, RINK_CENTER.y, 4.2));

    o
}

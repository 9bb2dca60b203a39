//! Unit tests for path evaluation.

#[cfg(test)]
mod walker {
    use std::f32::consts::PI;

    use sg_core::vec2;

    use crate::{PathParams, WalkerPath};

    fn street() -> PathParams {
        PathParams::new(3.0).with_segment(vec2(-4.0, 0.0), vec2(4.0, 0.0))
    }

    #[test]
    fn straight_starts_at_midpoint() {
        // At clock zero the ease curve sits at u = 0.5.
        let pose = WalkerPath::Straight.pose(&street(), vec2(0.0, 0.0), 0.0);
        assert!(pose.position.distance(vec2(0.0, 0.0)) < 1e-6);
        assert!(pose.heading.abs() < 1e-6, "faces +x along the segment");
    }

    #[test]
    fn straight_faces_forward_on_return_leg() {
        let params = street();
        let base = vec2(0.0, 0.0);
        // t = 1 moves toward `to`, t = 7 slides back toward `from`.
        let out = WalkerPath::Straight.pose(&params, base, 1.0);
        let back = WalkerPath::Straight.pose(&params, base, 7.0);
        assert_eq!(out.heading, back.heading, "straight never turns around");
    }

    #[test]
    fn backforth_flips_facing() {
        let params = street();
        let base = vec2(0.0, 0.0);
        let out = WalkerPath::BackForth.pose(&params, base, 1.0);
        let back = WalkerPath::BackForth.pose(&params, base, 7.0);
        assert!(out.heading.abs() < 1e-6);
        assert!(
            (back.heading.abs() - PI).abs() < 1e-6,
            "return leg faces the opposite way, got {}",
            back.heading
        );
    }

    #[test]
    fn segmentless_straight_falls_back_to_circle() {
        let params = PathParams::new(3.0);
        let base = vec2(10.0, -2.0);
        for i in 0..50 {
            let clock = i as f32 * 0.37;
            let fallback = WalkerPath::Straight.pose(&params, base, clock);
            let circle = WalkerPath::Circular.pose(&params, base, clock);
            assert_eq!(fallback, circle);
        }
    }

    #[test]
    fn circular_orbit_radius() {
        let params = PathParams::new(3.0);
        let base = vec2(-8.0, 2.0);
        for i in 0..100 {
            let pose = WalkerPath::Circular.pose(&params, base, i as f32 * 0.21);
            let dist = pose.position.distance(base);
            assert!((dist - 3.0).abs() < 1e-4, "off-circle at step {i}: {dist}");
        }
    }

    #[test]
    fn figure8_stays_in_lobe_box() {
        let params = PathParams::new(2.0);
        let base = vec2(1.0, 1.0);
        for i in 0..200 {
            let p = WalkerPath::Figure8.pose(&params, base, i as f32 * 0.13).position;
            assert!((p.x - base.x).abs() <= 2.0 + 1e-4);
            assert!((p.y - base.y).abs() <= 1.0 + 1e-4, "z lobe is half the radius");
        }
    }

    #[test]
    fn wander_stays_near_base() {
        let params = PathParams::new(3.0);
        let base = vec2(5.0, 3.0);
        for i in 0..500 {
            let p = WalkerPath::Wander.pose(&params, base, i as f32 * 0.11).position;
            // Orbit arm 0.5 * r plus a dither arm of exactly 0.5.
            assert!(p.distance(base) <= 0.5 * 3.0 + 0.5 + 1e-4);
        }
    }

    #[test]
    fn spiral_radius_breathes_within_band() {
        let params = PathParams::new(3.0);
        let base = vec2(0.0, 0.0);
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..600 {
            let d = WalkerPath::Spiral
                .pose(&params, base, i as f32 * 0.1)
                .position
                .distance(base);
            assert!(d >= 0.3 * 3.0 - 1e-4 && d <= 3.0 + 1e-4);
            min = min.min(d);
            max = max.max(d);
        }
        assert!(max - min > 0.5, "radius should actually breathe, got {min}..{max}");
    }
}

#[cfg(test)]
mod skater {
    use std::f32::consts::{FRAC_PI_4, PI};

    use sg_core::vec2;

    use crate::{PathParams, SkaterPath, WalkerPath};

    #[test]
    fn defaults() {
        assert_eq!(SkaterPath::default(), SkaterPath::Circular);
        assert_eq!(WalkerPath::default(), WalkerPath::Straight);
    }

    #[test]
    fn laps_steps_through_three_bands() {
        let params = PathParams::new(2.0);
        let base = vec2(0.0, 8.0);
        // Sample mid-band to stay clear of the float edges at multiples of π.
        let expect = [(0.5, 0.8), (1.5, 1.4), (2.5, 2.0), (3.5, 0.8)];
        for (half_turns, radius) in expect {
            let d = SkaterPath::Laps
                .pose(&params, base, half_turns * PI)
                .position
                .distance(base);
            assert!(
                (d - radius).abs() < 1e-3,
                "band at t = {half_turns}π: expected {radius}, got {d}"
            );
        }
    }

    #[test]
    fn infinity_is_wider_waisted_than_figure8() {
        let params = PathParams::new(2.0);
        let base = vec2(0.0, 0.0);
        // sin(2t) peaks at t = π/4, exposing each lobe's z amplitude.
        let eight = SkaterPath::Figure8.pose(&params, base, FRAC_PI_4).position;
        let inf = SkaterPath::Infinity.pose(&params, base, FRAC_PI_4).position;
        assert!((eight.y - 0.5 * 2.0).abs() < 1e-4);
        assert!((inf.y - 0.6 * 2.0).abs() < 1e-4);
    }

    #[test]
    fn zigzag_spans_the_rink() {
        let params = PathParams::new(2.0);
        let base = vec2(0.0, 8.0);
        let mut max_x = 0.0f32;
        let mut max_z = 0.0f32;
        for i in 0..400 {
            let p = SkaterPath::Zigzag.pose(&params, base, i as f32 * 0.05).position;
            let off = p - base;
            assert!(off.x.abs() <= 0.8 * 2.0 + 1e-4);
            assert!(off.y.abs() <= 0.6 * 2.0 + 1e-4);
            max_x = max_x.max(off.x.abs());
            max_z = max_z.max(off.y.abs());
        }
        assert!(max_x > 0.8 * 2.0 - 0.05, "slalom should reach its lateral extent");
        assert!(max_z > 0.6 * 2.0 - 0.05, "sweep should reach its forward extent");
    }
}

#[cfg(test)]
mod phase {
    use sg_core::vec2;

    use crate::{PathParams, SkaterPath, WalkerPath};

    const WALKER_KINDS: [WalkerPath; 6] = [
        WalkerPath::Straight,
        WalkerPath::BackForth,
        WalkerPath::Figure8,
        WalkerPath::Spiral,
        WalkerPath::Wander,
        WalkerPath::Circular,
    ];

    const SKATER_KINDS: [SkaterPath; 6] = [
        SkaterPath::Circular,
        SkaterPath::Figure8,
        SkaterPath::Spiral,
        SkaterPath::Infinity,
        SkaterPath::Laps,
        SkaterPath::Zigzag,
    ];

    #[test]
    fn evaluation_is_deterministic() {
        let params = PathParams::new(2.5).with_segment(vec2(-1.0, 3.0), vec2(4.0, -2.0));
        let base = vec2(0.5, -0.5);
        for kind in WALKER_KINDS {
            assert_eq!(
                kind.pose(&params, base, 12.34),
                kind.pose(&params, base, 12.34),
                "{kind:?}"
            );
        }
        for kind in SKATER_KINDS {
            assert_eq!(
                kind.pose(&params, base, 12.34),
                kind.pose(&params, base, 12.34),
                "{kind:?}"
            );
        }
    }

    #[test]
    fn start_phase_offsets_the_clock() {
        let base = vec2(2.0, 2.0);
        let phased = PathParams::new(2.0).with_phase(1.75);
        let plain = PathParams::new(2.0);
        for kind in SKATER_KINDS {
            assert_eq!(
                kind.pose(&phased, base, 3.0),
                kind.pose(&plain, base, 1.75 + 3.0),
                "{kind:?}"
            );
        }
    }
}

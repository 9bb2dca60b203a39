//! Unit tests for sg-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SkaterId, WalkerId};

    #[test]
    fn index_roundtrip() {
        let id = WalkerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(WalkerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(WalkerId(0) < WalkerId(1));
        assert!(SkaterId(100) > SkaterId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(WalkerId::INVALID.0, u32::MAX);
        assert_eq!(SkaterId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(WalkerId(7).to_string(), "WalkerId(7)");
        assert_eq!(SkaterId(3).to_string(), "SkaterId(3)");
    }
}

#[cfg(test)]
mod clock {
    use crate::{AgentClock, Frame};

    #[test]
    fn frame_advances() {
        assert_eq!(Frame::ZERO.next(), Frame(1));
        assert_eq!(Frame(41).next(), Frame(42));
        assert_eq!(Frame(9).to_string(), "F9");
    }

    #[test]
    fn accumulates_speed_scaled_deltas() {
        let mut clock = AgentClock::new();
        clock.advance(0.5, 2.0);
        assert_eq!(clock.secs(), 1.0);
        clock.advance(0.25, 2.0);
        assert_eq!(clock.secs(), 1.5);
    }

    #[test]
    fn zero_speed_freezes() {
        let mut clock = AgentClock::new();
        for _ in 0..100 {
            clock.advance(0.016, 0.0);
        }
        assert_eq!(clock.secs(), 0.0);
    }

    #[test]
    fn half_deltas_match_full_delta() {
        // Two ticks of delta/2 land where one tick of delta does.
        let mut halves = AgentClock::new();
        halves.advance(0.05, 1.3);
        halves.advance(0.05, 1.3);
        let mut full = AgentClock::new();
        full.advance(0.1, 1.3);
        assert!((halves.secs() - full.secs()).abs() < 1e-6);
    }
}

#[cfg(test)]
mod pose {
    use crate::{Pose, vec2};

    #[test]
    fn planar_distance() {
        let a = Pose::new(vec2(0.0, 0.0), 0.0);
        let b = Pose::new(vec2(3.0, 4.0), 1.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod class {
    use crate::AgentClass;

    #[test]
    fn labels() {
        assert_eq!(AgentClass::Walker.as_str(), "walker");
        assert_eq!(AgentClass::Skater.to_string(), "skater");
    }
}

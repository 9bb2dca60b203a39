//! village — winter-village demo for the snowglobe motion core.
//!
//! Runs the full decorative cast on the fixed village ground plan: strollers
//! on the streets, a pacer in front of the church, wanderers on the greens,
//! and a pond full of skaters.  Poses are traced to CSV so the motion can be
//! inspected or replayed offline.

mod layout;

use std::f32::consts::TAU;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sg_core::{Frame, Pose, SkaterId, Vec2, WalkerId, vec2};
use sg_path::{SkaterPath, WalkerPath};
use sg_scene::{Scene, SceneObserver, SkaterSpec, WalkerSpec};
use sg_steer::ObstacleField;
use sg_trace::{CsvTraceWriter, TraceObserver, TraceWriter};

use layout::{RINK_CENTER, village_obstacles};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64 = 42;
const FRAME_DT:     f32 = 1.0 / 60.0; // 60 fps
const FRAMES:       u64 = 1_800;      // 30 s of scene time
const TRACE_STRIDE: u64 = 6;          // pose rows every 6th frame (10 Hz)

// ── Observer wrapper for separation stats ────────────────────────────────────

struct StatsObserver<W: TraceWriter> {
    inner:          TraceObserver<W>,
    walker_frame:   Vec<Vec2>,
    skater_frame:   Vec<Vec2>,
    min_walker_gap: f32,
    min_skater_gap: f32,
}

impl<W: TraceWriter> StatsObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self {
            inner,
            walker_frame:   Vec::new(),
            skater_frame:   Vec::new(),
            min_walker_gap: f32::INFINITY,
            min_skater_gap: f32::INFINITY,
        }
    }
}

impl<W: TraceWriter> SceneObserver for StatsObserver<W> {
    fn on_frame_start(&mut self, frame: Frame) {
        self.walker_frame.clear();
        self.skater_frame.clear();
        self.inner.on_frame_start(frame);
    }

    fn on_walker_pose(&mut self, frame: Frame, id: WalkerId, pose: Pose) {
        self.walker_frame.push(pose.position);
        self.inner.on_walker_pose(frame, id, pose);
    }

    fn on_skater_pose(&mut self, frame: Frame, id: SkaterId, pose: Pose) {
        self.skater_frame.push(pose.position);
        self.inner.on_skater_pose(frame, id, pose);
    }

    fn on_frame_end(&mut self, frame: Frame, ticked: usize) {
        self.min_walker_gap = self.min_walker_gap.min(min_gap(&self.walker_frame));
        self.min_skater_gap = self.min_skater_gap.min(min_gap(&self.skater_frame));
        self.inner.on_frame_end(frame, ticked);
    }
}

/// Smallest pairwise distance in `points` (infinity for fewer than two).
fn min_gap(points: &[Vec2]) -> f32 {
    let mut min = f32::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            min = min.min(a.distance(*b));
        }
    }
    min
}

// ── Cast ──────────────────────────────────────────────────────────────────────

fn jitter_walker(spec: WalkerSpec, rng: &mut SmallRng) -> WalkerSpec {
    spec.speed(spec.speed * rng.gen_range(0.85..1.15))
        .phase(rng.gen_range(0.0..TAU))
}

fn jitter_skater(spec: SkaterSpec, rng: &mut SmallRng) -> SkaterSpec {
    spec.speed(spec.speed * rng.gen_range(0.85..1.15))
        .phase(rng.gen_range(0.0..TAU))
}

/// Spawn the street cast.  Returns `(id, role)` pairs for the summary table.
fn spawn_walkers(scene: &mut Scene, rng: &mut SmallRng) -> Vec<(WalkerId, &'static str)> {
    let mut cast = Vec::new();
    let mut spawn = |scene: &mut Scene, role, spec| {
        cast.push((scene.spawn_walker(spec), role));
    };

    // Two strollers sharing the south street; separation keeps them apart.
    let south = WalkerSpec::new(vec2(0.0, -5.5)).segment(vec2(-9.0, -5.5), vec2(9.0, -5.5));
    spawn(scene, "stroller-south", jitter_walker(south, rng));
    spawn(scene, "stroller-south", jitter_walker(south, rng));

    // North street, past the small trees.
    let north = WalkerSpec::new(vec2(0.0, 3.0)).segment(vec2(-9.0, 3.0), vec2(9.0, 3.0));
    spawn(scene, "stroller-north", jitter_walker(north, rng));

    // Pacing back and forth on the church plaza.
    let plaza = WalkerSpec::new(vec2(0.0, -11.0))
        .path(WalkerPath::BackForth)
        .segment(vec2(-4.0, -11.0), vec2(4.0, -11.0));
    spawn(scene, "churchgoer", jitter_walker(plaza, rng));

    // Pacing the west lane by the cabin.
    let lane = WalkerSpec::new(vec2(-12.0, 2.0))
        .path(WalkerPath::BackForth)
        .segment(vec2(-12.0, -2.0), vec2(-12.0, 6.0));
    spawn(scene, "west-pacer", jitter_walker(lane, rng));

    // Figure-eights on the east green.
    let green = WalkerSpec::new(vec2(7.0, 6.0)).path(WalkerPath::Figure8).radius(2.5);
    spawn(scene, "figure-eight", jitter_walker(green, rng));

    // Spiraling around the center tree.
    let tree = WalkerSpec::new(vec2(0.0, 0.0)).path(WalkerPath::Spiral).radius(3.0);
    spawn(scene, "tree-spiral", jitter_walker(tree, rng));

    // Wanderers drifting near the cabin and the shop.
    let west = WalkerSpec::new(vec2(-5.5, 0.5)).path(WalkerPath::Wander).radius(3.0);
    spawn(scene, "wanderer-west", jitter_walker(west, rng));
    let east = WalkerSpec::new(vec2(5.5, 0.5)).path(WalkerPath::Wander).radius(3.0);
    spawn(scene, "wanderer-east", jitter_walker(east, rng));

    // Circling the plaza between church and center tree.
    let plaza_orbit = WalkerSpec::new(vec2(0.0, -3.5)).path(WalkerPath::Circular).radius(2.5);
    spawn(scene, "plaza-orbit", jitter_walker(plaza_orbit, rng));

    cast
}

/// Spawn the pond cast.  All skaters share the rink center as their base.
fn spawn_skaters(scene: &mut Scene, rng: &mut SmallRng) -> Vec<(SkaterId, &'static str)> {
    let mut cast = Vec::new();
    let mut spawn = |scene: &mut Scene, role, spec| {
        cast.push((scene.spawn_skater(spec), role));
    };

    let rink = |path, radius| SkaterSpec::new(RINK_CENTER).path(path).radius(radius);

    spawn(scene, "circles", jitter_skater(rink(SkaterPath::Circular, 2.0), rng));
    spawn(scene, "circles-wide", jitter_skater(rink(SkaterPath::Circular, 2.8), rng));
    spawn(scene, "figure-eight", jitter_skater(rink(SkaterPath::Figure8, 2.2), rng));
    spawn(scene, "figure-eight", jitter_skater(rink(SkaterPath::Figure8, 1.6), rng));
    spawn(scene, "spiral", jitter_skater(rink(SkaterPath::Spiral, 2.4), rng));
    spawn(scene, "infinity", jitter_skater(rink(SkaterPath::Infinity, 2.0), rng));
    spawn(scene, "laps", jitter_skater(rink(SkaterPath::Laps, 2.6), rng));
    spawn(scene, "zigzag", jitter_skater(rink(SkaterPath::Zigzag, 2.0), rng));

    cast
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== village — snowglobe motion demo ===");
    println!("Seed: {SEED}  |  Frames: {FRAMES} at {:.0} fps", 1.0 / FRAME_DT);
    println!();

    // 1. Build the ground plan.
    let mut scene = Scene::new(ObstacleField::new(village_obstacles()));
    println!(
        "Ground plan: {} obstacle circles, rink at {RINK_CENTER}",
        scene.obstacles().len()
    );

    // 2. Spawn the cast with seeded speed/phase jitter.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let walkers = spawn_walkers(&mut scene, &mut rng);
    let skaters = spawn_skaters(&mut scene, &mut rng);
    println!("Cast: {} walkers, {} skaters", scene.walker_count(), scene.skater_count());
    println!();

    // 3. Set up the pose trace.
    std::fs::create_dir_all("output/village")?;
    let writer = CsvTraceWriter::new(Path::new("output/village"))?;
    let mut obs = StatsObserver::new(TraceObserver::new(writer, TRACE_STRIDE));

    // 4. Run.
    let t0 = Instant::now();
    for _ in 0..FRAMES {
        scene.advance(FRAME_DT, &mut obs);
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }
    obs.inner.into_writer().finish()?;

    // 5. Summary.
    let recorded = FRAMES.div_ceil(TRACE_STRIDE);
    println!("Scene advanced {FRAMES} frames in {:.3} s", elapsed.as_secs_f64());
    println!("  poses.csv  : {} rows ({recorded} recorded frames)", recorded * scene.agent_count() as u64);
    println!("  frames.csv : {FRAMES} rows");
    println!("Closest walker pair over the run: {:.2} m", obs.min_walker_gap);
    println!("Closest skater pair over the run: {:.2} m", obs.min_skater_gap);
    println!();

    // 6. Final pose tables.
    println!("{:<12} {:<16} {:>8} {:>8} {:>9}", "Walker", "Role", "x", "z", "heading");
    println!("{}", "-".repeat(56));
    for (id, role) in &walkers {
        if let Some(pose) = scene.walker_pose(*id) {
            println!(
                "{:<12} {:<16} {:>8.2} {:>8.2} {:>9.2}",
                id.to_string(),
                role,
                pose.position.x,
                pose.position.y,
                pose.heading,
            );
        }
    }
    println!();
    println!("{:<12} {:<16} {:>8} {:>8} {:>9}", "Skater", "Role", "x", "z", "heading");
    println!("{}", "-".repeat(56));
    for (id, role) in &skaters {
        if let Some(pose) = scene.skater_pose(*id) {
            println!(
                "{:<12} {:<16} {:>8.2} {:>8.2} {:>9.2}",
                id.to_string(),
                role,
                pose.position.x,
                pose.position.y,
                pose.heading,
            );
        }
    }

    Ok(())
}

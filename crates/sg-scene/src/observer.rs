//! Scene observer trait for progress reporting and data collection.

use sg_core::{Frame, Pose, SkaterId, WalkerId};

/// Callbacks invoked by [`Scene::advance`][crate::Scene::advance] at key
/// points in the frame.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Direct per-id `tick_*` calls bypass the
/// observer entirely; hosts that embed their own loop pay nothing.
///
/// # Example — closest-approach tracking
///
/// ```rust,ignore
/// struct ClosestApproach { min: f32, reference: Vec2 }
///
/// impl SceneObserver for ClosestApproach {
///     fn on_walker_pose(&mut self, _frame: Frame, _id: WalkerId, pose: Pose) {
///         self.min = self.min.min(pose.position.distance(self.reference));
///     }
/// }
/// ```
pub trait SceneObserver {
    /// Called at the very start of each frame, before any agent ticks.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after each walker commits, with its corrected pose.
    fn on_walker_pose(&mut self, _frame: Frame, _id: WalkerId, _pose: Pose) {}

    /// Called after each skater commits, with its corrected pose.
    fn on_skater_pose(&mut self, _frame: Frame, _id: SkaterId, _pose: Pose) {}

    /// Called at the end of each frame.  `ticked` is the number of agents
    /// that were stepped this frame.
    fn on_frame_end(&mut self, _frame: Frame, _ticked: usize) {}
}

/// A [`SceneObserver`] that does nothing.  Use when you need to call
/// `advance` but don't want callbacks.
pub struct NoopObserver;

impl SceneObserver for NoopObserver {}

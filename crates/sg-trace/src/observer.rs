//! `TraceObserver<W>` — bridges `SceneObserver` to a `TraceWriter`.

use sg_core::{AgentClass, Frame, Pose, SkaterId, WalkerId};
use sg_scene::SceneObserver;

use crate::row::{FrameRow, PoseRow};
use crate::writer::TraceWriter;
use crate::TraceError;

/// A [`SceneObserver`] that records committed poses to any [`TraceWriter`]
/// backend.
///
/// `stride` controls how often pose rows are recorded: every `stride`-th
/// frame gets the full per-agent batch, the rest get nothing.  A stride of
/// `0` disables pose rows entirely.  Frame summary rows are written for
/// every frame regardless.
///
/// Errors from the writer are stored internally because `SceneObserver`
/// methods have no return value.  After the drive loop exits, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    stride:     u64,
    recording:  bool,
    buffer:     Vec<PoseRow>,
    last_error: Option<TraceError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`, recording pose rows every
    /// `stride` frames.
    pub fn new(writer: W, stride: u64) -> Self {
        Self {
            writer,
            stride,
            recording: false,
            buffer: Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the drive loop exits.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<TraceError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to `finish()` it after the loop).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::TraceResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn buffer_pose(&mut self, frame: Frame, class: AgentClass, agent: u32, pose: Pose) {
        if self.recording {
            self.buffer.push(PoseRow {
                frame: frame.0,
                class,
                agent,
                x: pose.position.x,
                z: pose.position.y,
                heading: pose.heading,
            });
        }
    }
}

impl<W: TraceWriter> SceneObserver for TraceObserver<W> {
    fn on_frame_start(&mut self, frame: Frame) {
        self.recording = self.stride > 0 && frame.0 % self.stride == 0;
        self.buffer.clear();
    }

    fn on_walker_pose(&mut self, frame: Frame, id: WalkerId, pose: Pose) {
        self.buffer_pose(frame, AgentClass::Walker, id.0, pose);
    }

    fn on_skater_pose(&mut self, frame: Frame, id: SkaterId, pose: Pose) {
        self.buffer_pose(frame, AgentClass::Skater, id.0, pose);
    }

    fn on_frame_end(&mut self, frame: Frame, ticked: usize) {
        if self.recording && !self.buffer.is_empty() {
            let batch = std::mem::take(&mut self.buffer);
            let result = self.writer.write_poses(&batch);
            self.store_err(result);
        }
        let row = FrameRow { frame: frame.0, agents: ticked as u64 };
        let result = self.writer.write_frame(&row);
        self.store_err(result);
    }
}

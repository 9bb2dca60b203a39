//! The `TraceWriter` trait implemented by trace backends.

use crate::{FrameRow, PoseRow, TraceResult};

/// Trait implemented by trace backends (currently only CSV).
///
/// The observer never inspects errors at the call site — they are stored and
/// retrieved later with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write one recorded frame's batch of pose rows.
    fn write_poses(&mut self, rows: &[PoseRow]) -> TraceResult<()>;

    /// Write one frame summary row.
    fn write_frame(&mut self, row: &FrameRow) -> TraceResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> TraceResult<()>;
}

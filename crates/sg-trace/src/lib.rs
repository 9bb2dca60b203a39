//! `sg-trace` — pose trace recording for snowglobe scenes.
//!
//! Hosts that want to inspect or replay a scene's motion attach a
//! [`TraceObserver`] to [`Scene::advance`](sg_scene::Scene::advance).  The
//! observer buffers one [`PoseRow`] per agent on recorded frames and hands
//! batches to a [`TraceWriter`] backend.  The only backend currently provided
//! is CSV:
//!
//! | File         | Columns                                  |
//! |--------------|------------------------------------------|
//! | `poses.csv`  | `frame, class, agent, x, z, heading`     |
//! | `frames.csv` | `frame, agents`                          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sg_trace::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace")).unwrap();
//! let mut obs = TraceObserver::new(writer, 10); // record every 10th frame
//! for _ in 0..1800 {
//!     scene.advance(1.0 / 60.0, &mut obs);
//! }
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! obs.into_writer().finish().unwrap();
//! ```
//!
//! The scene has no end-of-run hook, so the host finishes the writer itself
//! once the loop exits.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{TraceError, TraceResult};
pub use observer::TraceObserver;
pub use row::{FrameRow, PoseRow};
pub use writer::TraceWriter;

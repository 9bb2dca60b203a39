//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `poses.csv`
//! - `frames.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{FrameRow, PoseRow, TraceResult};

/// Writes pose traces to two CSV files.
pub struct CsvTraceWriter {
    poses:    Writer<File>,
    frames:   Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> TraceResult<Self> {
        let mut poses = Writer::from_path(dir.join("poses.csv"))?;
        poses.write_record(["frame", "class", "agent", "x", "z", "heading"])?;

        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(["frame", "agents"])?;

        Ok(Self { poses, frames, finished: false })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_poses(&mut self, rows: &[PoseRow]) -> TraceResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.frame.to_string(),
                row.class.as_str().to_string(),
                row.agent.to_string(),
                row.x.to_string(),
                row.z.to_string(),
                row.heading.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_frame(&mut self, row: &FrameRow) -> TraceResult<()> {
        self.frames
            .write_record(&[row.frame.to_string(), row.agents.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.frames.flush()?;
        Ok(())
    }
}

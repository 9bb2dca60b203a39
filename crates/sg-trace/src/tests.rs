//! Integration tests for sg-trace.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use sg_core::AgentClass;

    use crate::csv::CsvTraceWriter;
    use crate::row::{FrameRow, PoseRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn walker_row(frame: u64, agent: u32) -> PoseRow {
        PoseRow {
            frame,
            class: AgentClass::Walker,
            agent,
            x: agent as f32 + 0.5,
            z: -2.0,
            heading: 0.0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("poses.csv").exists());
        assert!(dir.path().join("frames.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("poses.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["frame", "class", "agent", "x", "z", "heading"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["frame", "agents"]);
    }

    #[test]
    fn csv_pose_rows_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        let rows = vec![
            walker_row(4, 0),
            walker_row(4, 1),
            PoseRow {
                frame: 4,
                class: AgentClass::Skater,
                agent: 0,
                x: 0.0,
                z: 8.0,
                heading: 1.5,
            },
        ];
        w.write_poses(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("poses.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "4");      // frame
        assert_eq!(&read_rows[0][1], "walker"); // class
        assert_eq!(&read_rows[0][2], "0");      // agent
        assert_eq!(&read_rows[0][3], "0.5");    // x
        assert_eq!(&read_rows[1][2], "1");
        assert_eq!(&read_rows[2][1], "skater");
        assert_eq!(&read_rows[2][4], "8");      // z
    }

    #[test]
    fn csv_frame_row_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_frame(&FrameRow { frame: 7, agents: 12 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "7");
        assert_eq!(&read_rows[0][1], "12");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_poses(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_strided_recording() {
        use sg_core::vec2;
        use sg_path::WalkerPath;
        use sg_scene::{Scene, SkaterSpec, WalkerSpec};

        use crate::observer::TraceObserver;

        let mut scene = Scene::empty();
        scene.spawn_walker(
            WalkerSpec::new(vec2(0.0, 0.0)).path(WalkerPath::Circular).radius(0.0).speed(0.0),
        );
        scene.spawn_walker(
            WalkerSpec::new(vec2(5.0, 0.0)).path(WalkerPath::Circular).radius(0.0).speed(0.0),
        );
        scene.spawn_skater(SkaterSpec::new(vec2(0.0, 8.0)).radius(0.0).speed(0.0));

        let dir = tmp();
        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer, 2);
        for _ in 0..5 {
            scene.advance(1.0 / 60.0, &mut obs);
        }
        assert!(obs.take_error().is_none(), "no write errors expected");
        obs.into_writer().finish().unwrap();

        // stride = 2 → pose batches fired at frames 0, 2, 4 (3 frames × 3 agents = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("poses.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 3 frames × 3 agents = 9 pose rows, got {}", rows.len());

        // Within a frame, walkers come first, then skaters.
        assert_eq!(&rows[0][1], "walker");
        assert_eq!(&rows[1][1], "walker");
        assert_eq!(&rows[2][1], "skater");
        assert_eq!(&rows[2][4], "8"); // skater z

        // Frame summaries are written for every frame, recorded or not.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let frame_rows: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(frame_rows.len(), 5);
        assert_eq!(&frame_rows[4][0], "4");
        assert_eq!(&frame_rows[4][1], "3");
    }

    #[test]
    fn integration_zero_stride_disables_pose_rows() {
        use sg_core::vec2;
        use sg_scene::{Scene, WalkerSpec};

        use crate::observer::TraceObserver;

        let mut scene = Scene::empty();
        scene.spawn_walker(WalkerSpec::new(vec2(0.0, 0.0)));

        let dir = tmp();
        let writer = CsvTraceWriter::new(dir.path()).unwrap();
        let mut obs = TraceObserver::new(writer, 0);
        for _ in 0..3 {
            scene.advance(1.0 / 60.0, &mut obs);
        }
        assert!(obs.take_error().is_none());
        obs.into_writer().finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("poses.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0, "stride 0 must record no pose rows");

        let mut rdr2 = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 3);
    }
}

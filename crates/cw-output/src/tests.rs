//! Integration tests for cw-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvTraceWriter, SESSIONS_FILE, TRACE_FILE};
    use crate::row::{SessionOutcome, SessionRow, TraceRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.flush().unwrap();

        assert_eq!(
            headers(&dir.path().join(TRACE_FILE)),
            ["tick", "progress", "x", "y", "heading_deg", "compass_deg", "eta_minutes", "headline"]
        );
        assert_eq!(
            headers(&dir.path().join(SESSIONS_FILE)),
            ["outcome", "ticks", "final_progress", "headline"]
        );
    }

    #[test]
    fn update_row_is_formatted() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_update(&TraceRow {
            tick:        3,
            progress:    0.44999999999999996,
            x:           50.0,
            y:           2.3285,
            heading_deg: 180.0,
            compass_deg: 0.0,
            eta_minutes: 5,
            headline:    "Proceed straight along the main avenue".into(),
        })
        .unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "0.45");
        assert_eq!(&rows[0][3], "2.329");
        assert_eq!(&rows[0][4], "180.0");
        assert_eq!(&rows[0][7], "Proceed straight along the main avenue");
    }

    #[test]
    fn session_row_round_trip() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_session(&SessionRow {
            outcome:        SessionOutcome::Cancelled,
            ticks:          42,
            final_progress: 6.3,
            headline:       "Proceed straight along the main avenue".into(),
        })
        .unwrap();
        w.flush().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SESSIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "cancelled");
        assert_eq!(&rows[0][1], "42");
        assert_eq!(&rows[0][2], "6.30");
    }

    #[test]
    fn flush_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.flush().unwrap();
        w.flush().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        let result = CsvTraceWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use cw_route::CampusLayout;
    use cw_sim::{ManualPacer, NavBuilder, NavPhase, RunOutcome, TickScheduler};

    use crate::csv::{CsvTraceWriter, SESSIONS_FILE, TRACE_FILE};
    use crate::row::{SessionOutcome, SessionRow, TraceRow};
    use crate::writer::TraceWriter;
    use crate::{OutputError, OutputResult, TraceObserver};

    /// Keeps rows in memory.
    #[derive(Default)]
    struct MemWriter {
        updates:  Vec<TraceRow>,
        sessions: Vec<SessionRow>,
        flushes:  usize,
    }

    impl TraceWriter for MemWriter {
        fn write_update(&mut self, row: &TraceRow) -> OutputResult<()> {
            self.updates.push(row.clone());
            Ok(())
        }
        fn write_session(&mut self, row: &SessionRow) -> OutputResult<()> {
            self.sessions.push(row.clone());
            Ok(())
        }
        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    /// Fails every write.
    struct BrokenWriter;

    impl TraceWriter for BrokenWriter {
        fn write_update(&mut self, _row: &TraceRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }
        fn write_session(&mut self, _row: &SessionRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk gone")))
        }
        fn flush(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn records_full_walk() {
        let mut driver = NavBuilder::new(CampusLayout::default()).build().unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        driver.start_for("60TA - 601", &mut obs).unwrap();
        let mut sched = TickScheduler::for_config(&driver.config, ManualPacer::default());
        assert_eq!(sched.run(&mut driver, &mut obs).unwrap(), RunOutcome::Arrived);

        assert!(obs.take_error().is_none());
        let w = obs.into_writer().unwrap();
        assert_eq!(w.updates.len(), 668);
        assert_eq!(w.updates[0].tick, 0);
        assert_eq!(w.updates[667].headline, "Arrived! 60TA - 601 (floor 6)");
        assert_eq!(
            w.sessions,
            vec![SessionRow {
                outcome:        SessionOutcome::Arrived,
                ticks:          667,
                final_progress: 100.0,
                headline:       "Arrived! 60TA - 601 (floor 6)".into(),
            }]
        );
    }

    #[test]
    fn sampling_keeps_start_and_arrival() {
        let mut driver = NavBuilder::new(CampusLayout::default()).build().unwrap();
        let mut obs = TraceObserver::sampled(MemWriter::default(), 100);
        driver.start_for("TB - 1203", &mut obs).unwrap();
        while driver.tick(&mut obs).unwrap() == NavPhase::Navigating {}

        let w = obs.into_writer().unwrap();
        let ticks: Vec<u64> = w.updates.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [0, 100, 200, 300, 400, 500, 600, 667]);
        assert_eq!(w.sessions[0].headline, "Arrived! TB - 1203 (floor 12)");
    }

    #[test]
    fn cancelled_run_writes_session_summary() {
        let mut driver = NavBuilder::new(CampusLayout::default()).build().unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        driver.start_for("TC - 305", &mut obs).unwrap();
        let mut sched = TickScheduler::for_config(&driver.config, ManualPacer::default());
        assert_eq!(sched.run_ticks(20, &mut driver, &mut obs).unwrap(), RunOutcome::Suspended);
        sched.cancel_token().cancel();
        assert_eq!(sched.run(&mut driver, &mut obs).unwrap(), RunOutcome::Cancelled);

        let w = obs.into_writer().unwrap();
        assert_eq!(w.updates.len(), 21);
        assert_eq!(w.sessions.len(), 1);
        assert_eq!(w.sessions[0].outcome, SessionOutcome::Cancelled);
        assert_eq!(w.sessions[0].ticks, 20);
        assert!((w.sessions[0].final_progress - 3.0).abs() < 1e-9);
    }

    #[test]
    fn first_error_is_kept() {
        let mut driver = NavBuilder::new(CampusLayout::default()).build().unwrap();
        let mut obs = TraceObserver::new(BrokenWriter);
        driver.start_for("60TA - 601", &mut obs).unwrap();
        while driver.tick(&mut obs).unwrap() == NavPhase::Navigating {}

        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error: disk full");
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_backend_end_to_end() {
        let dir: TempDir = tempfile::tempdir().expect("create temp dir");
        let mut driver = NavBuilder::new(CampusLayout::default()).build().unwrap();
        let mut obs = TraceObserver::sampled(CsvTraceWriter::new(dir.path()).unwrap(), 50);
        driver.start_for("60TA - 601", &mut obs).unwrap();
        while driver.tick(&mut obs).unwrap() == NavPhase::Navigating {}
        assert!(obs.take_error().is_none());
        drop(obs.into_writer().unwrap());

        let trace = csv::Reader::from_path(dir.path().join(TRACE_FILE)).unwrap().records().count();
        assert_eq!(trace, 15);

        let mut rdr = csv::Reader::from_path(dir.path().join(SESSIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "arrived");
        assert_eq!(&rows[0][1], "667");
        assert_eq!(&rows[0][2], "100.00");
    }
}

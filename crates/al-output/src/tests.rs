//! Tests for the CSV backend and the observer bridge.

#[cfg(test)]
mod csv_tests {
    use al_core::DoorId;
    use al_door::Action;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{ActuationRow, DoorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(x: i32, tick: u64) -> DoorSnapshotRow {
        DoorSnapshotRow {
            tick,
            door:            DoorId::new(x, 0, 0),
            is_open:         x % 2 == 0,
            is_opening:      false,
            is_closing:      false,
            request_to_open: false,
            cooldown_ticks:  7,
        }
    }

    fn read_all(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("door_snapshots.csv").exists());
        assert!(dir.path().join("actuations.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("door_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "door", "open", "opening", "closing", "request_to_open", "cooldown_ticks"]
        );

        let mut rdr = csv::Reader::from_path(dir.path().join("actuations.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "door", "action"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["tick", "tag", "doors", "pairs", "unpaired", "opens", "closes", "reset"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("door_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[0][1], "0:0:0");
        assert_eq!(&rows[0][2], "1");
        assert_eq!(&rows[1][1], "1:0:0");
        assert_eq!(&rows[1][2], "0");
        assert_eq!(&rows[1][6], "7");
    }

    #[test]
    fn csv_actuation_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_actuation(&ActuationRow { tick: 9, door: DoorId::new(-2, 3, 4), action: Action::Close })
            .unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("actuations.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "9");
        assert_eq!(&rows[0][1], "-2:3:4");
        assert_eq!(&rows[0][2], "close");
    }

    #[test]
    fn csv_summary_blank_when_all_paired() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:     3,
            tag:      "[lock]".into(),
            doors:    4,
            pairs:    2,
            unpaired: None,
            opens:    1,
            closes:   0,
            reset:    true,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "[lock]");
        assert_eq!(&rows[0][3], "2");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[0][7], "1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use al_control::{AirlockObserver, ProgramBuilder};
    use al_core::{AirlockConfig, DoorId, GridPos, Tick};
    use al_door::{Actuation, SimDoor};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::error::{OutputError, OutputResult};
    use crate::observer::TraceObserver;
    use crate::row::{ActuationRow, DoorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    /// Backend that fails every write.
    struct Broken {
        attempts: usize,
    }

    impl OutputWriter for Broken {
        fn write_snapshots(&mut self, _rows: &[DoorSnapshotRow]) -> OutputResult<()> {
            self.fail()
        }
        fn write_actuation(&mut self, _row: &ActuationRow) -> OutputResult<()> {
            self.fail()
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.fail()
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    impl Broken {
        fn fail(&mut self) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.attempts))))
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = TraceObserver::new(Broken { attempts: 0 });
        obs.on_actuation(Tick(0), &Actuation::open(DoorId::new(0, 0, 0)));
        obs.on_actuation(Tick(1), &Actuation::open(DoorId::new(0, 0, 0)));

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("write 1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 2);
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();

        let outside = SimDoor::new(GridPos::new(0, 0, 0));
        let inside = SimDoor::new(GridPos::new(1, 0, 0));
        let hand = outside.clone();
        let doors = vec![outside, inside];
        let source = move |_tag: &str| doors.clone();

        let config = AirlockConfig { snapshot_interval_ticks: 2, ..AirlockConfig::default() };
        let mut program = ProgramBuilder::new(source).config(config).build().unwrap();

        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        program.invoke(None, &mut obs);
        // Crew opens the outside door by hand; the request is latched on
        // tick 1 and honoured on tick 2.
        hand.set_open(true);
        program.run_ticks(3, &mut obs);
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("actuations.csv")).unwrap();
        let acts: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(acts.len(), 1);
        assert_eq!(&acts[0][0], "2");
        assert_eq!(&acts[0][1], "0:0:0");
        assert_eq!(&acts[0][2], "open");

        // Snapshot ticks 0 and 2, two doors each.
        let mut rdr = csv::Reader::from_path(dir.path().join("door_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 4);
        assert_eq!(&snaps[2][0], "2");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let sums: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(sums.len(), 4);
        assert_eq!(&sums[0][1], "[airlock]");
        assert_eq!(&sums[2][5], "1");
        assert_eq!(&sums[3][5], "0");
    }
}

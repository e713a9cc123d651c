//! Integration tests for fuel-output.

#[cfg(test)]
fn sample_plan(by_units: bool) -> fuel_schedule::Plan {
    use fuel_schedule::{Course, PlanSettings, RoundingPolicy, Segment, compute_plan};

    let segments = vec![
        Segment::new("swim", "Swim", Course::Fixed { duration_secs: 1_800 }, 0.0).with_micro_minutes(30),
        Segment::new("bike", "Bike", Course::Fixed { duration_secs: 5_400 }, 60.0)
            .with_unit_grams(Some(25.0)),
    ];
    let settings = PlanSettings { rounding: RoundingPolicy::Ceil, plan_by_units: by_units, timing_enabled: true };
    compute_plan(&segments, &settings)
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::sample_plan;
    use crate::csv::{BREAKDOWN_FILE, CsvWriter, TIMING_FILE};
    use crate::row::{BreakdownRow, timing_rows};
    use crate::writer::PlanWriter;
    use crate::export_plan;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_rows(dir: &TempDir, file: &str) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path(), false).unwrap();
        assert!(dir.path().join(BREAKDOWN_FILE).exists());
        assert!(dir.path().join(TIMING_FILE).exists());
    }

    #[test]
    fn csv_headers_without_units() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        w.finish().unwrap();

        let (headers, _) = read_rows(&dir, BREAKDOWN_FILE);
        assert_eq!(headers, ["index", "start_sec", "end_sec", "duration_sec", "label", "grams"]);

        let (headers, _) = read_rows(&dir, TIMING_FILE);
        assert_eq!(headers, ["index", "at_sec", "grams", "units", "label"]);
    }

    #[test]
    fn csv_headers_with_units() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), true).unwrap();
        w.finish().unwrap();

        let (headers, _) = read_rows(&dir, BREAKDOWN_FILE);
        assert_eq!(headers.last().map(String::as_str), Some("units_rounded"));
    }

    #[test]
    fn continuous_plan_export() {
        let plan = sample_plan(false);
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        export_plan(&plan, &mut w).unwrap();

        let (_, rows) = read_rows(&dir, BREAKDOWN_FILE);
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "2");     // index
        assert_eq!(&rows[1][1], "1800");  // start_sec
        assert_eq!(&rows[1][2], "5400");  // end_sec
        assert_eq!(&rows[1][3], "3600");  // duration_sec
        assert_eq!(&rows[1][4], "Bike 00:00:00 → 01:00:00");
        assert_eq!(&rows[1][5], "60");

        // swim 1 slot + bike 3 + 2 slots
        let (_, timing) = read_rows(&dir, TIMING_FILE);
        assert_eq!(timing.len(), 6);
        assert_eq!(&timing[0][0], "1");
        assert_eq!(&timing[1][1], "1800");
        assert_eq!(&timing[1][2], "20");
        assert_eq!(&timing[1][3], ""); // no units
    }

    #[test]
    fn unit_plan_export() {
        let plan = sample_plan(true);
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), true).unwrap();
        export_plan(&plan, &mut w).unwrap();

        let (_, rows) = read_rows(&dir, BREAKDOWN_FILE);
        assert_eq!(&rows[0][6], "");   // swim has no unit size
        assert_eq!(&rows[1][6], "3");  // ceil(60 / 25)
        assert_eq!(&rows[1][5], "75");
        assert_eq!(&rows[2][6], "2");  // ceil(30 / 25)

        let (_, timing) = read_rows(&dir, TIMING_FILE);
        let units: u32 = timing.iter().filter_map(|r| r[3].parse::<u32>().ok()).sum();
        assert_eq!(units, 5);
    }

    #[test]
    fn in_memory_writers() {
        let plan = sample_plan(false);
        let mut w = CsvWriter::from_writers(Vec::new(), Vec::new(), false).unwrap();
        let rows: Vec<BreakdownRow> = plan.intervals.iter().map(BreakdownRow::from).collect();
        w.write_breakdown(&rows).unwrap();
        w.write_timing(&timing_rows(&plan.schedule)).unwrap();
        let (breakdown, timing) = w.into_inner().unwrap();

        let breakdown = String::from_utf8(breakdown).unwrap();
        assert!(breakdown.starts_with("index,start_sec,end_sec,duration_sec,label,grams"));
        assert_eq!(breakdown.lines().count(), 4);
        assert_eq!(String::from_utf8(timing).unwrap().lines().count(), 7);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_rows_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path(), false).unwrap();
        w.write_breakdown(&[]).unwrap();
        w.write_timing(&[]).unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use super::sample_plan;
    use crate::row::{BreakdownRow, timing_rows};

    #[test]
    fn breakdown_row_copies_interval() {
        let plan = sample_plan(true);
        let row = BreakdownRow::from(&plan.intervals[1]);
        assert_eq!(row.index, 2);
        assert_eq!(row.start_sec, 1_800);
        assert_eq!(row.units_rounded, Some(3));
        assert_eq!(row.grams, 75.0);
    }

    #[test]
    fn timing_rows_numbered_in_order() {
        let plan = sample_plan(false);
        let rows = timing_rows(&plan.schedule);
        let indices: Vec<u32> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
        assert!(rows.windows(2).all(|w| w[0].at_sec <= w[1].at_sec));
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::sample_plan;
    use crate::export_plan;
    use crate::sqlite::{DB_FILE, SqliteWriter};
    use crate::writer::PlanWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(DB_FILE).exists());
    }

    #[test]
    fn sqlite_row_counts() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        export_plan(&sample_plan(false), &mut w).unwrap();

        let conn = rusqlite::Connection::open(dir.path().join(DB_FILE)).unwrap();
        let breakdown: i64 = conn.query_row("SELECT COUNT(*) FROM breakdown", [], |r| r.get(0)).unwrap();
        let timing: i64 = conn.query_row("SELECT COUNT(*) FROM timing", [], |r| r.get(0)).unwrap();
        assert_eq!(breakdown, 3);
        assert_eq!(timing, 6);
    }

    #[test]
    fn sqlite_missing_units_stored_as_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        export_plan(&sample_plan(true), &mut w).unwrap();

        let conn = rusqlite::Connection::open(dir.path().join(DB_FILE)).unwrap();
        let swim: Option<i64> = conn
            .query_row("SELECT units_rounded FROM breakdown WHERE idx = 1", [], |r| r.get(0))
            .unwrap();
        let bike: Option<i64> = conn
            .query_row("SELECT units_rounded FROM breakdown WHERE idx = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(swim, None);
        assert_eq!(bike, Some(3));
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

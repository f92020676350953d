#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reportdash::app::fixtures;
    use reportdash::app::session::{Session, CSV_FILE_NAME, GENERATE_LATENCY};
    use std::time::Instant;

    #[test]
    fn test_default_report_csv_exact_text() {
        let session = Session::new();
        let csv = session.csv();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Campaign name,Column Name,Column Name,Column Name,Column Name"
        );

        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "Ad group 1,12345,12345,12345,12345");
        assert_eq!(rows[4], "Ad group 5,12345,12345,12345,12345");
        // Rows 6 and 7 repeat the "Ad group 5" fixture name.
        assert_eq!(rows[5], "Ad group 5,12345,12345,12345,12345");
        assert_eq!(rows[6], "Ad group 5,12345,12345,12345,12345");
    }

    #[test]
    fn test_generated_report_csv_follows_column_order() {
        let now = Instant::now();
        let mut session = Session::new();
        session.generate("campaigns with orders", now);
        session.tick(now + GENERATE_LATENCY);

        let csv = session.csv();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Campaign name,Orders,Spend,Revenue,ROAS"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Summer Sale Campaign,156,$4,230,$18,450,4.36"
        );
    }

    #[test]
    fn test_write_csv_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CSV_FILE_NAME);

        let session = Session::new();
        session.write_csv(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.csv());
        assert_eq!(written, fixtures::default_report().to_csv());
    }

    #[test]
    fn test_write_csv_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join(CSV_FILE_NAME);

        let session = Session::new();
        assert!(session.write_csv(&path).is_err());
    }
}

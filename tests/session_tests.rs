#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use reportdash::app::fixtures;
    use reportdash::app::session::{Session, GENERATE_LATENCY};
    use reportdash::app::toasts::ToastKind;
    use std::collections::BTreeSet;
    use std::time::{Duration, Instant};

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_session_starts_with_default_report() {
        let session = Session::new();
        assert_eq!(*session.current(), fixtures::default_report());
        assert_eq!(*session.previous(), fixtures::default_report());
        assert!(session.dimensions_selected().is_empty());
        assert!(session.metrics_selected().is_empty());
        assert!(!session.is_generating());
    }

    #[test]
    fn test_generate_applies_after_latency() {
        let now = Instant::now();
        let mut session = Session::new();

        assert!(session.generate("campaigns with orders", now));
        assert!(session.is_generating());

        // Before the deadline nothing is applied.
        session.tick(now + GENERATE_LATENCY - Duration::from_millis(1));
        assert!(session.is_generating());
        assert_eq!(*session.current(), fixtures::default_report());

        session.tick(now + GENERATE_LATENCY);
        assert!(!session.is_generating());
        assert_eq!(*session.current(), fixtures::orders_report());
        assert_eq!(*session.previous(), fixtures::default_report());
    }

    #[test]
    fn test_generate_rejects_empty_and_overlapping_prompts() {
        let now = Instant::now();
        let mut session = Session::new();

        assert!(!session.generate("", now));
        assert!(!session.generate("   \t  ", now));
        assert!(!session.is_generating());

        assert!(session.generate("orders", now));
        // A second submission while one is pending is rejected outright.
        assert!(!session.generate("revenue", now + Duration::from_millis(100)));

        session.tick(now + GENERATE_LATENCY);
        assert_eq!(*session.current(), fixtures::orders_report());
    }

    #[test]
    fn test_generate_derives_selections_from_columns() {
        let now = Instant::now();
        let mut session = Session::new();

        session.generate("high spend campaigns with low roas", now);
        session.tick(now + GENERATE_LATENCY);

        assert_eq!(*session.dimensions_selected(), set(&["Campaign name"]));
        assert_eq!(
            *session.metrics_selected(),
            set(&["Spend", "ROAS", "Impressions", "Clicks", "CTR"])
        );
    }

    #[test]
    fn test_generate_raises_configured_toast_with_change_counts() {
        let now = Instant::now();
        let mut session = Session::new();

        session.generate("something unmatched", now);
        session.tick(now + GENERATE_LATENCY);

        // Fallback report carries one metric and one dimension change.
        let toast = session.toasts.get(ToastKind::Configured).unwrap();
        assert_eq!(toast.kind.title(), "Table configured");
        assert_eq!(toast.message, "1 dimension, 1 metric");
    }

    #[test]
    fn test_undo_restores_previous_report_exactly() {
        let now = Instant::now();
        let mut session = Session::new();

        session.generate("orders", now);
        session.tick(now + GENERATE_LATENCY);
        let before_second = session.current().clone();

        let second = now + Duration::from_secs(2);
        session.generate("revenue please", second);
        session.tick(second + GENERATE_LATENCY);
        assert_eq!(*session.current(), fixtures::revenue_report());

        session.undo(second + Duration::from_secs(2));
        assert_eq!(*session.current(), before_second);
        // Selections are recomputed from the restored columns.
        assert_eq!(*session.dimensions_selected(), set(&["Campaign name"]));
        assert_eq!(
            *session.metrics_selected(),
            set(&["Orders", "Spend", "Revenue", "ROAS"])
        );
        assert!(session.toasts.get(ToastKind::Reverted).is_some());
    }

    #[test]
    fn test_undo_without_generate_reverts_to_default() {
        let now = Instant::now();
        let mut session = Session::new();

        session.undo(now);
        assert_eq!(*session.current(), fixtures::default_report());
        // The only distinct label among the metric columns is "Column Name".
        assert_eq!(*session.dimensions_selected(), set(&["Campaign name"]));
        assert_eq!(*session.metrics_selected(), set(&["Column Name"]));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let now = Instant::now();
        let mut session = Session::new();

        session.generate("orders", now);
        session.tick(now + GENERATE_LATENCY);

        session.reset(now + Duration::from_secs(2));
        let after_first = session.current().clone();
        session.reset(now + Duration::from_secs(3));

        assert_eq!(*session.current(), after_first);
        assert_eq!(*session.current(), fixtures::default_report());
        assert!(session.dimensions_selected().is_empty());
        assert!(session.metrics_selected().is_empty());
        assert!(session.toasts.get(ToastKind::Reset).is_some());
    }

    #[test]
    fn test_reset_and_undo_histories_are_independent() {
        let now = Instant::now();
        let mut session = Session::new();

        session.generate("orders", now);
        session.tick(now + GENERATE_LATENCY);
        // previous = default; current = orders.

        session.reset(now + Duration::from_secs(2));
        assert_eq!(*session.current(), fixtures::default_report());

        // Undo after reset restores the pre-generate slot, not the
        // pre-reset table.
        session.undo(now + Duration::from_secs(3));
        assert_eq!(*session.current(), fixtures::default_report());
        assert_eq!(*session.previous(), fixtures::default_report());
    }

    #[test]
    fn test_selection_toggles_respect_catalogs() {
        let mut session = Session::new();

        session.toggle_dimension("Device");
        session.toggle_metric("Clicks");
        session.toggle_metric("Avg Order Value");
        assert_eq!(*session.dimensions_selected(), set(&["Device"]));
        assert_eq!(*session.metrics_selected(), set(&["Clicks", "Avg Order Value"]));

        // Toggling again removes.
        session.toggle_metric("Clicks");
        assert_eq!(*session.metrics_selected(), set(&["Avg Order Value"]));

        // Names outside the fixed catalogs are ignored.
        session.toggle_dimension("Not a dimension");
        session.toggle_metric("Column Name");
        assert_eq!(*session.dimensions_selected(), set(&["Device"]));
        assert_eq!(*session.metrics_selected(), set(&["Avg Order Value"]));
    }

    #[test]
    fn test_reraised_generate_toast_restarts() {
        let now = Instant::now();
        let mut session = Session::new();

        session.generate("orders", now);
        session.tick(now + GENERATE_LATENCY);
        assert!(session.toasts.get(ToastKind::Configured).is_some());

        // A second generate completing while the first toast is still up
        // replaces it rather than stacking a duplicate.
        let second = now + Duration::from_secs(1);
        session.generate("revenue", second);
        session.tick(second + GENERATE_LATENCY);
        assert_eq!(session.toasts.active().len(), 1);
        let toast = session.toasts.get(ToastKind::Configured).unwrap();
        assert_eq!(toast.message, "1 dimension, 1 metric, 1 filter applied");
    }
}

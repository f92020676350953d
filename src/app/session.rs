//! Session controller for the reporting table.
//!
//! [`Session`] owns the currently displayed report, the previously displayed
//! report (one level of undo), the dimension/metric selections, the pending
//! generate task, and the toast manager. All state changes flow through the
//! `generate`, `undo`, and `reset` transitions plus the selection toggles;
//! nothing else mutates the session.
//!
//! The simulated generation latency and the toast timers are plain deadline
//! fields advanced by [`Session::tick`] with an explicit `Instant`. The UI
//! ticks once per frame; tests inject time. Dropping the session drops any
//! pending deadline with it, so there are no background timers to cancel.

use crate::app::fixtures::{self, DIMENSION_CATALOG, METRIC_CATALOG};
use crate::app::report::Report;
use crate::app::resolver;
use crate::app::toasts::{ToastKind, ToastManager, RESET_TOAST_MESSAGE, UNDO_TOAST_MESSAGE};
use anyhow::Context as _;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Simulated processing delay between submitting a prompt and the generated
/// report being applied.
pub const GENERATE_LATENCY: Duration = Duration::from_millis(800);

/// File name of the exported CSV artifact.
pub const CSV_FILE_NAME: &str = "report.csv";

#[derive(Debug)]
struct PendingGenerate {
    prompt: String,
    ready_at: Instant,
}

#[derive(Debug)]
pub struct Session {
    current: Report,
    previous: Report,
    dimensions_selected: BTreeSet<String>,
    metrics_selected: BTreeSet<String>,
    pending: Option<PendingGenerate>,
    pub toasts: ToastManager,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current: fixtures::default_report(),
            previous: fixtures::default_report(),
            dimensions_selected: BTreeSet::new(),
            metrics_selected: BTreeSet::new(),
            pending: None,
            toasts: ToastManager::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Report {
        &self.current
    }

    pub fn previous(&self) -> &Report {
        &self.previous
    }

    pub fn dimensions_selected(&self) -> &BTreeSet<String> {
        &self.dimensions_selected
    }

    pub fn metrics_selected(&self) -> &BTreeSet<String> {
        &self.metrics_selected
    }

    /// True while a submitted prompt is waiting out the simulated latency.
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit a prompt for generation. Returns false without touching any
    /// state when the trimmed prompt is empty or another generate is already
    /// pending; overlapping submissions are rejected rather than raced.
    pub fn generate(&mut self, prompt: &str, now: Instant) -> bool {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return false;
        }
        if self.pending.is_some() {
            tracing::warn!("Generate rejected: another generate is already pending");
            return false;
        }

        // Snapshot the table before it is replaced so undo can revert.
        self.previous = self.current.clone();
        self.pending = Some(PendingGenerate {
            prompt: prompt.to_string(),
            ready_at: now + GENERATE_LATENCY,
        });
        tracing::info!("Generating report for prompt: {:?}", prompt);
        true
    }

    /// Advance time: complete a pending generate whose deadline has passed
    /// and age the toast timers. The generated report, the derived
    /// selections, and the toast are applied in one step, so no partial
    /// update is ever observable.
    pub fn tick(&mut self, now: Instant) {
        let ready = self.pending.as_ref().is_some_and(|p| now >= p.ready_at);
        if ready {
            let pending = self.pending.take().expect("pending generate checked above");
            let report = resolver::resolve(&pending.prompt);
            let summary = report.change_summary();
            self.current = report;
            self.derive_selections();
            self.toasts.raise(ToastKind::Configured, summary, now);
            tracing::info!(
                "Report applied: {} columns, {} rows, {} changes",
                self.current.columns.len(),
                self.current.rows.len(),
                self.current.changes.len()
            );
        }
        self.toasts.tick(now);
    }

    /// Revert to the previously displayed report. One-shot: the previous
    /// slot is left as-is, so a second undo is a no-op rather than a redo.
    pub fn undo(&mut self, now: Instant) {
        self.current = self.previous.clone();
        self.derive_selections();
        self.toasts.raise(ToastKind::Reverted, UNDO_TOAST_MESSAGE, now);
        tracing::info!("Table reverted to previous report");
    }

    /// Restore the built-in default table and clear the selections. The
    /// previous slot is not updated; reset and undo histories are
    /// independent single slots.
    pub fn reset(&mut self, now: Instant) {
        self.current = fixtures::default_report();
        self.dimensions_selected.clear();
        self.metrics_selected.clear();
        self.toasts.raise(ToastKind::Reset, RESET_TOAST_MESSAGE, now);
        tracing::info!("Table reset to default state");
    }

    /// Toggle a dimension in the multi-select. Names outside the fixed
    /// catalog are ignored.
    pub fn toggle_dimension(&mut self, name: &str) {
        if !DIMENSION_CATALOG.contains(&name) {
            return;
        }
        if !self.dimensions_selected.remove(name) {
            self.dimensions_selected.insert(name.to_string());
        }
    }

    /// Toggle a metric in the multi-select. Names outside the fixed catalog
    /// are ignored.
    pub fn toggle_metric(&mut self, name: &str) {
        if !METRIC_CATALOG.contains(&name) {
            return;
        }
        if !self.metrics_selected.remove(name) {
            self.metrics_selected.insert(name.to_string());
        }
    }

    /// First column label becomes the selected dimension, the remaining
    /// column labels become the selected metrics.
    fn derive_selections(&mut self) {
        self.dimensions_selected = self
            .current
            .dimension_label()
            .map(|label| BTreeSet::from([label.to_string()]))
            .unwrap_or_default();
        self.metrics_selected = self
            .current
            .metric_labels()
            .map(str::to_string)
            .collect();
    }

    /// CSV rendering of the current report.
    pub fn csv(&self) -> String {
        self.current.to_csv()
    }

    /// Write the current report to `path` as CSV.
    pub fn write_csv(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.csv())
            .with_context(|| format!("Failed to write CSV to {}", path.display()))
    }

    /// Export the current report as `report.csv` in the user's download
    /// directory, falling back to the working directory when no download
    /// directory is known. Returns the path written.
    pub fn export_csv(&self) -> anyhow::Result<PathBuf> {
        let path = dirs::download_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CSV_FILE_NAME);
        self.write_csv(&path)?;
        tracing::info!("Exported report CSV to {}", path.display());
        Ok(path)
    }
}

//! Report data model shared by the resolver, the session controller, and the
//! table UI.
//!
//! A [`Report`] is the full table configuration (ordered columns + rows)
//! together with the list of [`ChangeRecord`]s that produced it. Column order
//! is significant: the first column is the row-identifying dimension and the
//! remaining columns are metrics in display order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One column of a report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportColumn {
    /// Unique within a report, used to key row values.
    pub id: String,
    /// Display name shown in the table header and CSV export.
    pub label: String,
    pub sortable: bool,
}

impl ReportColumn {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sortable: true,
        }
    }
}

/// One row of a report table, keyed by column id.
///
/// Every row is expected to supply a value for every column id present in
/// the report's column list. Rendering and CSV export treat a missing cell
/// as empty rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub values: BTreeMap<String, String>,
}

impl ReportRow {
    pub fn new(id: impl Into<String>, cells: &[(&str, &str)]) -> Self {
        Self {
            id: id.into(),
            values: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Cell value for a column id, or empty when the row is missing it.
    pub fn value(&self, column_id: &str) -> &str {
        self.values.get(column_id).map(String::as_str).unwrap_or("")
    }
}

/// Category of a change applied while generating a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Metric,
    Dimension,
    Filter,
}

impl ChangeKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ChangeKind::Metric => "Metrics",
            ChangeKind::Dimension => "Dimensions",
            ChangeKind::Filter => "Filters",
        }
    }
}

/// One audit entry describing a dimension, metric, or filter adjustment.
///
/// Interpretation of `label`/`value` is convention-based per kind: for
/// `Metric` the label is an action ("Added") and the value a comma-separated
/// metric name list; for `Filter` the label is the filtered field and the
/// value the comparison expression; for `Dimension` the label is an action
/// ("Sorted by", "Grouped by") and the value the field description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub kind: ChangeKind,
    pub label: String,
    pub value: String,
}

impl ChangeRecord {
    pub fn new(kind: ChangeKind, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A full table configuration plus the changes that produced it.
///
/// `changes` is advisory metadata and is never validated against
/// `columns`/`rows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<ReportRow>,
    pub changes: Vec<ChangeRecord>,
}

impl Report {
    pub fn change_count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    /// Label of the row-identifying dimension column, when present.
    pub fn dimension_label(&self) -> Option<&str> {
        self.columns.first().map(|c| c.label.as_str())
    }

    /// Labels of the metric columns (everything after the first column).
    pub fn metric_labels(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().skip(1).map(|c| c.label.as_str())
    }

    /// Metric names parsed out of the "Added" metric change record.
    pub fn added_metric_names(&self) -> Vec<&str> {
        self.changes
            .iter()
            .find(|c| c.kind == ChangeKind::Metric && c.label == "Added")
            .map(|c| c.value.split(',').map(str::trim).collect())
            .unwrap_or_default()
    }

    /// Values of the dimension-kind change records, for the review list.
    pub fn dimension_descriptions(&self) -> Vec<&str> {
        self.changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Dimension)
            .map(|c| c.value.as_str())
            .collect()
    }

    /// Filter-kind change records formatted as "field expression".
    pub fn filter_descriptions(&self) -> Vec<String> {
        self.changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Filter)
            .map(|c| format!("{} {}", c.label, c.value))
            .collect()
    }

    /// Summary line built from the per-kind change counts, e.g.
    /// `1 dimension, 4 metrics, 2 filters applied`. Empty when there are no
    /// changes. Used verbatim for both the review panel summary and the
    /// "Table configured" toast message.
    pub fn change_summary(&self) -> String {
        let dimensions = self.change_count(ChangeKind::Dimension);
        let metrics = self.change_count(ChangeKind::Metric);
        let filters = self.change_count(ChangeKind::Filter);

        let mut parts = Vec::new();
        if dimensions > 0 {
            parts.push(format!(
                "{} dimension{}",
                dimensions,
                if dimensions == 1 { "" } else { "s" }
            ));
        }
        if metrics > 0 {
            parts.push(format!(
                "{} metric{}",
                metrics,
                if metrics == 1 { "" } else { "s" }
            ));
        }
        if filters > 0 {
            parts.push(format!(
                "{} filter{} applied",
                filters,
                if filters == 1 { "" } else { "s" }
            ));
        }
        parts.join(", ")
    }

    /// Render the report as CSV text: first line is the comma-joined column
    /// labels, then one line per row with values in column order. Values are
    /// joined verbatim; no quoting or escaping of embedded commas is done.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(
            self.columns
                .iter()
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>()
                .join(","),
        );
        for row in &self.rows {
            lines.push(
                self.columns
                    .iter()
                    .map(|c| row.value(&c.id))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_changes(changes: Vec<ChangeRecord>) -> Report {
        Report {
            columns: Vec::new(),
            rows: Vec::new(),
            changes,
        }
    }

    #[test]
    fn change_summary_pluralizes_each_part() {
        let report = report_with_changes(vec![
            ChangeRecord::new(ChangeKind::Dimension, "Grouped by", "Campaign"),
            ChangeRecord::new(ChangeKind::Metric, "Added", "Orders"),
            ChangeRecord::new(ChangeKind::Metric, "Added", "Spend"),
            ChangeRecord::new(ChangeKind::Filter, "Orders", "≥ 1"),
            ChangeRecord::new(ChangeKind::Filter, "Spend", "> $5,000"),
        ]);
        assert_eq!(
            report.change_summary(),
            "1 dimension, 2 metrics, 2 filters applied"
        );
    }

    #[test]
    fn change_summary_omits_absent_parts() {
        let report = report_with_changes(vec![
            ChangeRecord::new(ChangeKind::Dimension, "Grouped by", "Campaign"),
            ChangeRecord::new(ChangeKind::Metric, "Added", "Orders"),
            ChangeRecord::new(ChangeKind::Metric, "Added", "Spend"),
            ChangeRecord::new(ChangeKind::Metric, "Added", "Clicks"),
            ChangeRecord::new(ChangeKind::Metric, "Added", "CTR"),
        ]);
        assert_eq!(report.change_summary(), "1 dimension, 4 metrics");
    }

    #[test]
    fn change_summary_empty_when_no_changes() {
        assert_eq!(report_with_changes(Vec::new()).change_summary(), "");
    }

    #[test]
    fn missing_cell_renders_empty() {
        let report = Report {
            columns: vec![ReportColumn::new("a", "A"), ReportColumn::new("b", "B")],
            rows: vec![ReportRow::new("1", &[("a", "x")])],
            changes: Vec::new(),
        };
        assert_eq!(report.to_csv(), "A,B\nx,");
    }

    #[test]
    fn added_metric_names_split_and_trimmed() {
        let report = report_with_changes(vec![ChangeRecord::new(
            ChangeKind::Metric,
            "Added",
            "Orders, Spend, Revenue, ROAS",
        )]);
        assert_eq!(
            report.added_metric_names(),
            vec!["Orders", "Spend", "Revenue", "ROAS"]
        );
    }
}

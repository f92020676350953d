//! Canned report fixtures and selection catalogs.
//!
//! The four generated reports, the default table, and the dimension/metric
//! catalogs are immutable process-wide constants. Accessors hand out clones
//! so callers own their copies and the fixtures stay pristine.

use crate::app::report::{ChangeKind, ChangeRecord, Report, ReportColumn, ReportRow};
use once_cell::sync::Lazy;

/// Dimension names offered by the Dimensions multi-select.
pub const DIMENSION_CATALOG: [&str; 5] =
    ["Campaign name", "Ad group", "Keyword", "Device", "Date"];

/// Metric names offered by the Metrics multi-select.
pub const METRIC_CATALOG: [&str; 11] = [
    "Orders",
    "Spend",
    "Revenue",
    "ROAS",
    "Impressions",
    "Clicks",
    "CTR",
    "Conversions",
    "Transactions",
    "Avg Order Value",
    "Conv. Rate",
];

/// Prompt shortcuts shown in the report generator panel.
pub const PROMPT_SUGGESTIONS: [&str; 3] = [
    "Campaigns with at least 1 order",
    "Only campaigns that drove revenue",
    "High spend campaigns with low ROAS",
];

fn column(id: &str, label: &str) -> ReportColumn {
    ReportColumn::new(id, label)
}

fn change(kind: ChangeKind, label: &str, value: &str) -> ChangeRecord {
    ChangeRecord::new(kind, label, value)
}

/// Placeholder table shown before any report has been generated.
static DEFAULT: Lazy<Report> = Lazy::new(|| Report {
    columns: vec![
        column("campaign", "Campaign name"),
        column("col1", "Column Name"),
        column("col2", "Column Name"),
        column("col3", "Column Name"),
        column("col4", "Column Name"),
    ],
    rows: vec![
        default_row("1", "Ad group 1"),
        default_row("2", "Ad group 2"),
        default_row("3", "Ad group 3"),
        default_row("4", "Ad group 4"),
        default_row("5", "Ad group 5"),
        default_row("6", "Ad group 5"),
        default_row("7", "Ad group 5"),
    ],
    changes: Vec::new(),
});

fn default_row(id: &str, name: &str) -> ReportRow {
    ReportRow::new(
        id,
        &[
            ("campaign", name),
            ("col1", "12345"),
            ("col2", "12345"),
            ("col3", "12345"),
            ("col4", "12345"),
        ],
    )
}

/// Campaigns with at least one order.
static ORDERS: Lazy<Report> = Lazy::new(|| Report {
    columns: vec![
        column("campaign", "Campaign name"),
        column("orders", "Orders"),
        column("spend", "Spend"),
        column("revenue", "Revenue"),
        column("roas", "ROAS"),
    ],
    rows: vec![
        ReportRow::new(
            "1",
            &[
                ("campaign", "Summer Sale Campaign"),
                ("orders", "156"),
                ("spend", "$4,230"),
                ("revenue", "$18,450"),
                ("roas", "4.36"),
            ],
        ),
        ReportRow::new(
            "2",
            &[
                ("campaign", "Brand Awareness Q1"),
                ("orders", "89"),
                ("spend", "$2,150"),
                ("revenue", "$9,870"),
                ("roas", "4.59"),
            ],
        ),
        ReportRow::new(
            "3",
            &[
                ("campaign", "Product Launch 2026"),
                ("orders", "234"),
                ("spend", "$6,780"),
                ("revenue", "$28,560"),
                ("roas", "4.21"),
            ],
        ),
        ReportRow::new(
            "4",
            &[
                ("campaign", "Holiday Promotions"),
                ("orders", "312"),
                ("spend", "$8,900"),
                ("revenue", "$42,100"),
                ("roas", "4.73"),
            ],
        ),
        ReportRow::new(
            "5",
            &[
                ("campaign", "Retargeting Users"),
                ("orders", "67"),
                ("spend", "$1,890"),
                ("revenue", "$7,340"),
                ("roas", "3.88"),
            ],
        ),
    ],
    changes: vec![
        change(ChangeKind::Filter, "Orders", "≥ 1"),
        change(ChangeKind::Metric, "Added", "Orders, Spend, Revenue, ROAS"),
    ],
});

/// Campaigns that drove revenue.
static REVENUE: Lazy<Report> = Lazy::new(|| Report {
    columns: vec![
        column("campaign", "Campaign name"),
        column("revenue", "Revenue"),
        column("transactions", "Transactions"),
        column("avgOrderValue", "Avg Order Value"),
        column("conversionRate", "Conv. Rate"),
    ],
    rows: vec![
        ReportRow::new(
            "1",
            &[
                ("campaign", "Top Performer Alpha"),
                ("revenue", "$52,340"),
                ("transactions", "423"),
                ("avgOrderValue", "$123.74"),
                ("conversionRate", "5.2%"),
            ],
        ),
        ReportRow::new(
            "2",
            &[
                ("campaign", "Seasonal Winter"),
                ("revenue", "$38,920"),
                ("transactions", "298"),
                ("avgOrderValue", "$130.61"),
                ("conversionRate", "4.8%"),
            ],
        ),
        ReportRow::new(
            "3",
            &[
                ("campaign", "New Customer Promo"),
                ("revenue", "$24,670"),
                ("transactions", "187"),
                ("avgOrderValue", "$131.93"),
                ("conversionRate", "3.9%"),
            ],
        ),
        ReportRow::new(
            "4",
            &[
                ("campaign", "Flash Sale March"),
                ("revenue", "$18,450"),
                ("transactions", "156"),
                ("avgOrderValue", "$118.27"),
                ("conversionRate", "6.1%"),
            ],
        ),
    ],
    changes: vec![
        change(ChangeKind::Filter, "Revenue", "> $0"),
        change(
            ChangeKind::Metric,
            "Added",
            "Revenue, Transactions, AOV, Conv. Rate",
        ),
        change(ChangeKind::Dimension, "Sorted by", "Revenue (descending)"),
    ],
});

/// High spend campaigns with low return on ad spend.
static SPEND_ROAS: Lazy<Report> = Lazy::new(|| Report {
    columns: vec![
        column("campaign", "Campaign name"),
        column("spend", "Spend"),
        column("roas", "ROAS"),
        column("impressions", "Impressions"),
        column("clicks", "Clicks"),
        column("ctr", "CTR"),
    ],
    rows: vec![
        ReportRow::new(
            "1",
            &[
                ("campaign", "Underperforming Campaign A"),
                ("spend", "$12,450"),
                ("roas", "0.82"),
                ("impressions", "234,500"),
                ("clicks", "1,234"),
                ("ctr", "0.53%"),
            ],
        ),
        ReportRow::new(
            "2",
            &[
                ("campaign", "Test Campaign Beta"),
                ("spend", "$8,920"),
                ("roas", "1.15"),
                ("impressions", "189,200"),
                ("clicks", "945"),
                ("ctr", "0.50%"),
            ],
        ),
        ReportRow::new(
            "3",
            &[
                ("campaign", "Broad Targeting Exp"),
                ("spend", "$15,670"),
                ("roas", "0.67"),
                ("impressions", "456,780"),
                ("clicks", "2,890"),
                ("ctr", "0.63%"),
            ],
        ),
        ReportRow::new(
            "4",
            &[
                ("campaign", "New Market Entry"),
                ("spend", "$9,340"),
                ("roas", "0.94"),
                ("impressions", "167,890"),
                ("clicks", "756"),
                ("ctr", "0.45%"),
            ],
        ),
        ReportRow::new(
            "5",
            &[
                ("campaign", "Brand Generic Terms"),
                ("spend", "$11,200"),
                ("roas", "1.02"),
                ("impressions", "312,400"),
                ("clicks", "1,562"),
                ("ctr", "0.50%"),
            ],
        ),
    ],
    changes: vec![
        change(ChangeKind::Filter, "Spend", "> $5,000"),
        change(ChangeKind::Filter, "ROAS", "< 1.5"),
        change(
            ChangeKind::Metric,
            "Added",
            "Spend, ROAS, Impressions, Clicks, CTR",
        ),
    ],
});

/// General performance report returned when no trigger phrase matches.
static FALLBACK: Lazy<Report> = Lazy::new(|| Report {
    columns: vec![
        column("campaign", "Campaign name"),
        column("impressions", "Impressions"),
        column("clicks", "Clicks"),
        column("spend", "Spend"),
        column("conversions", "Conversions"),
    ],
    rows: vec![
        ReportRow::new(
            "1",
            &[
                ("campaign", "Campaign Alpha"),
                ("impressions", "125,400"),
                ("clicks", "3,456"),
                ("spend", "$2,340"),
                ("conversions", "89"),
            ],
        ),
        ReportRow::new(
            "2",
            &[
                ("campaign", "Campaign Beta"),
                ("impressions", "98,200"),
                ("clicks", "2,890"),
                ("spend", "$1,890"),
                ("conversions", "67"),
            ],
        ),
        ReportRow::new(
            "3",
            &[
                ("campaign", "Campaign Gamma"),
                ("impressions", "156,780"),
                ("clicks", "4,120"),
                ("spend", "$3,120"),
                ("conversions", "112"),
            ],
        ),
        ReportRow::new(
            "4",
            &[
                ("campaign", "Campaign Delta"),
                ("impressions", "87,650"),
                ("clicks", "2,340"),
                ("spend", "$1,560"),
                ("conversions", "54"),
            ],
        ),
        ReportRow::new(
            "5",
            &[
                ("campaign", "Campaign Epsilon"),
                ("impressions", "203,400"),
                ("clicks", "5,670"),
                ("spend", "$4,230"),
                ("conversions", "143"),
            ],
        ),
    ],
    changes: vec![
        change(
            ChangeKind::Metric,
            "Added",
            "Impressions, Clicks, Spend, Conversions",
        ),
        change(ChangeKind::Dimension, "Grouped by", "Campaign"),
    ],
});

pub fn default_report() -> Report {
    DEFAULT.clone()
}

pub fn orders_report() -> Report {
    ORDERS.clone()
}

pub fn revenue_report() -> Report {
    REVENUE.clone()
}

pub fn spend_roas_report() -> Report {
    SPEND_ROAS.clone()
}

pub fn fallback_report() -> Report {
    FALLBACK.clone()
}

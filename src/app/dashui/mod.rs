//! Desktop user interface for Report Dash.
//!
//! A single-window egui interface laid out as:
//!
//! - a top menu bar ([`menu`]) with CSV export, theme selection, and quit
//! - a central panel with the page title, channel tabs, the filter-count
//!   toolbar, and the data table ([`table`])
//! - a right side panel with the report generator ([`generator_panel`]) and
//!   the change review ([`review_panel`])
//! - a toast overlay ([`toast_overlay`]) anchored to the bottom-right corner
//!
//! All panels render against the [`crate::app::session::Session`] owned by
//! [`app::ReportApp`]; the frame loop ticks the session once per frame so
//! the pending-generate deadline and the toast timers advance.

pub mod app;
pub mod generator_panel;
pub mod menu;
pub mod review_panel;
pub mod table;
pub mod toast_overlay;

pub use app::ReportApp;

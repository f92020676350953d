//! Core application logic for Report Dash.
//!
//! The non-view half of the application lives here:
//!
//! - [`report`]: the report data model (columns, rows, change records) and
//!   CSV rendering
//! - [`fixtures`]: the canned report configurations and selection catalogs
//! - [`resolver`]: prompt-to-report resolution
//! - [`session`]: the session controller coordinating generate/undo/reset
//! - [`toasts`]: the timed-visibility toast primitive
//! - [`dashui`]: the egui view layer

pub mod dashui;
pub mod fixtures;
pub mod report;
pub mod resolver;
pub mod session;
pub mod toasts;

pub use dashui::app::ReportApp;

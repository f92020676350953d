//! Report Dash - Advertising Reporting Workspace Mockup
//!
//! Report Dash is a single-window desktop application that mocks up a
//! prompt-driven advertising reporting workflow: the user describes the
//! report they want in free text, a canned resolver picks one of four
//! pre-baked table configurations, and the UI shows the resulting table
//! together with a review of the applied changes, undo/reset controls,
//! CSV export, and transient toast notifications.
//!
//! # Architecture Overview
//!
//! - **Core logic** ([`app`]): report model, fixture catalog, prompt
//!   resolver, and the session state machine that owns the displayed table
//! - **UI Layer** ([`app::dashui`]): egui-based single-window interface
//!
//! Report generation is intentionally fake: there is no backend, no
//! persistence of report state across sessions, and no natural-language
//! understanding — the resolver is ordered substring matching over a fixed
//! fixture set. The interesting contracts are the session transitions
//! (generate/undo/reset) and the toast lifecycle, both of which are driven
//! by explicit time so they stay deterministic under test.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::ReportApp;

//! Data table rendering with the dimension/metric multi-selects and the CSV
//! export control.

use crate::app::fixtures::{DIMENSION_CATALOG, METRIC_CATALOG};
use crate::app::session::Session;
use eframe::egui;
use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

pub fn show(ui: &mut Ui, session: &mut Session, generator_open: &mut bool) {
    render_toolbar(ui, session, generator_open);
    ui.separator();
    render_table(ui, session);
}

fn render_toolbar(ui: &mut Ui, session: &mut Session, generator_open: &mut bool) {
    ui.horizontal(|ui| {
        let dimensions_label = format!("Dimensions ({})", session.dimensions_selected().len());
        ui.menu_button(dimensions_label, |ui| {
            for name in DIMENSION_CATALOG {
                let mut checked = session.dimensions_selected().contains(name);
                if ui.checkbox(&mut checked, name).clicked() {
                    session.toggle_dimension(name);
                }
            }
        });

        let metrics_label = format!("Metrics ({})", session.metrics_selected().len());
        ui.menu_button(metrics_label, |ui| {
            for name in METRIC_CATALOG {
                let mut checked = session.metrics_selected().contains(name);
                if ui.checkbox(&mut checked, name).clicked() {
                    session.toggle_metric(name);
                }
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_label = if *generator_open {
                "Hide generator"
            } else {
                "Show generator"
            };
            if ui.button(toggle_label).clicked() {
                *generator_open = !*generator_open;
            }

            if ui.button("⬇ Download CSV").clicked() {
                match session.export_csv() {
                    Ok(path) => log::info!("CSV export complete: {}", path.display()),
                    Err(e) => log::error!("CSV export failed: {}", e),
                }
            }
        });
    });
}

fn render_table(ui: &mut Ui, session: &Session) {
    let report = session.current();

    if report.rows.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                RichText::new("No data to display. Use the report generator to create a report.")
                    .weak(),
            );
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(180.0))
        .columns(
            Column::remainder().at_least(90.0),
            report.columns.len().saturating_sub(1),
        )
        .header(24.0, |mut header| {
            for col in &report.columns {
                header.col(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(&col.label);
                        if col.sortable {
                            ui.label(RichText::new("⏷").weak().small());
                        }
                    });
                });
            }
        })
        .body(|mut body| {
            for row in &report.rows {
                body.row(22.0, |mut table_row| {
                    for col in &report.columns {
                        table_row.col(|ui| {
                            // A row missing a cell renders as empty.
                            ui.label(row.value(&col.id));
                        });
                    }
                });
            }
        });
}

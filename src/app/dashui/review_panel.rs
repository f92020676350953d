//! Review changes panel: per-kind change lists, summary line, and the
//! undo/reset controls.

use crate::app::report::ChangeKind;
use crate::app::session::Session;
use eframe::egui;
use egui::{RichText, Ui};
use std::time::Instant;

pub fn show(ui: &mut Ui, session: &mut Session, active_tab: &mut ChangeKind, now: Instant) {
    ui.strong("Review changes");
    ui.add_space(4.0);

    let summary = session.current().change_summary();
    if !summary.is_empty() {
        ui.label(RichText::new(summary).weak());
        ui.add_space(4.0);
    }

    ui.horizontal(|ui| {
        for kind in [ChangeKind::Metric, ChangeKind::Dimension, ChangeKind::Filter] {
            ui.selectable_value(active_tab, kind, kind.display_name());
        }
    });
    ui.separator();

    if session.is_generating() {
        render_skeleton(ui);
    } else {
        let entries: Vec<String> = match active_tab {
            ChangeKind::Metric => session
                .current()
                .added_metric_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ChangeKind::Dimension => session
                .current()
                .dimension_descriptions()
                .into_iter()
                .map(str::to_string)
                .collect(),
            ChangeKind::Filter => session.current().filter_descriptions(),
        };
        render_entries(ui, &entries);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Undo").clicked() {
            session.undo(now);
        }
        if ui.button("Reset").clicked() {
            session.reset(now);
        }
    });
}

fn render_entries(ui: &mut Ui, entries: &[String]) {
    if entries.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.strong("No changes yet");
            ui.label(RichText::new("Updates to your report will appear here").weak());
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("review_changes_list")
        .max_height(200.0)
        .show(ui, |ui| {
            for entry in entries {
                ui.label(RichText::new(entry).weak());
                ui.add_space(4.0);
            }
        });
}

/// Placeholder bars shown while a generate is pending.
fn render_skeleton(ui: &mut Ui) {
    for _ in 0..8 {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 12.0),
            egui::Sense::hover(),
        );
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(4), ui.visuals().faint_bg_color);
        ui.add_space(4.0);
    }
}

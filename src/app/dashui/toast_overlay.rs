//! Toast overlay anchored to the bottom-right corner of the viewport.
//!
//! Opacity follows the toast phase: fully transparent during the entry
//! delay (the toast is laid out but not yet shown), opaque while visible,
//! fading out over the exit window. Multiple toasts stack upward.

use crate::app::toasts::{ToastManager, ToastPhase};
use eframe::egui;
use egui::RichText;
use std::time::Instant;

pub fn show(ctx: &egui::Context, toasts: &mut ToastManager, now: Instant) {
    let mut offset_y = -16.0;

    for toast in toasts.iter_mut() {
        let opacity = match toast.phase() {
            ToastPhase::Raised => 0.0,
            ToastPhase::Visible => 1.0,
            ToastPhase::Exiting => 1.0 - toast.phase_progress(now),
        };

        let mut dismissed = false;
        egui::Area::new(egui::Id::new(("toast", toast.kind)))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, offset_y))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.set_min_width(260.0);
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(toast.kind.title());
                            ui.label(RichText::new(&toast.message).weak());
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                if ui.small_button("✕").clicked() {
                                    dismissed = true;
                                }
                            },
                        );
                    });
                });
            });

        if dismissed {
            toast.dismiss(now);
        }
        offset_y -= 72.0;
    }
}

//! Report generator panel: prompt box, suggestion shortcuts, and submit
//! control.
//!
//! Submission is disabled while a generate is pending; the session also
//! rejects overlapping submissions, so the disabled controls are belt and
//! suspenders rather than the only guard.

use crate::app::fixtures::PROMPT_SUGGESTIONS;
use crate::app::session::Session;
use eframe::egui;
use egui::{RichText, Ui};
use std::time::Instant;

pub fn show(
    ui: &mut Ui,
    prompt: &mut String,
    show_suggestions: &mut bool,
    session: &mut Session,
    now: Instant,
) {
    let generating = session.is_generating();

    ui.horizontal(|ui| {
        ui.label(RichText::new("🎲").weak());
        ui.strong("Report generator");
    });
    ui.add_space(8.0);

    if *show_suggestions {
        for suggestion in PROMPT_SUGGESTIONS {
            if ui
                .add_enabled(!generating, egui::Button::new(suggestion).small())
                .clicked()
            {
                // Shortcut autofills the prompt and submits in one step.
                *prompt = suggestion.to_string();
                if session.generate(suggestion, now) {
                    *show_suggestions = false;
                }
            }
        }
        ui.add_space(4.0);
    }

    let toggle_label = if *show_suggestions {
        "Hide suggestions"
    } else {
        "Show suggestions"
    };
    if ui.link(toggle_label).clicked() {
        *show_suggestions = !*show_suggestions;
    }
    ui.add_space(8.0);

    let response = ui.add_enabled(
        !generating,
        egui::TextEdit::multiline(prompt)
            .desired_rows(2)
            .desired_width(f32::INFINITY)
            .hint_text("Generate me a report with…"),
    );
    let enter_pressed = response.has_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

    ui.horizontal(|ui| {
        if generating {
            ui.spinner();
            ui.label(RichText::new("Generating…").weak());
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_submit = !generating && !prompt.trim().is_empty();
            let submit_clicked = ui.add_enabled(can_submit, egui::Button::new("➡")).clicked();

            if (submit_clicked || (enter_pressed && can_submit))
                && session.generate(prompt, now)
            {
                // Text stays in the box after submission; only the
                // suggestion list collapses.
                *show_suggestions = false;
            }
        });
    });
}

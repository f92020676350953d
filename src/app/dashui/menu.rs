//! Top menu bar: file actions and theme selection.

use crate::app::dashui::app::ThemeChoice;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ExportCsv,
    ThemeChanged,
    Quit,
}

pub fn build_menu(ui: &mut egui::Ui, ctx: &egui::Context, theme: &mut ThemeChoice) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("File", |ui| {
        if ui.button("Export CSV").clicked() {
            menu_action = MenuAction::ExportCsv;
            ui.close();
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    if *theme != original_theme {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}

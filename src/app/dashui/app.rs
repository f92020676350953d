//! Main application state and frame loop.

use crate::app::dashui::{generator_panel, menu, review_panel, table, toast_overlay};
use crate::app::report::ChangeKind;
use crate::app::session::Session;
use eframe::egui;
use std::time::{Duration, Instant};

/// Channel tabs shown above the table. Pure chrome: selection has no effect
/// on the data.
pub const CHANNELS: [&str; 4] = ["All", "Onsite", "Offsite", "SSP"];

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Application state. Only the theme survives restarts; the session and all
/// chrome state are rebuilt fresh each run.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ReportApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub session: Session,
    #[serde(skip)]
    pub prompt: String,
    #[serde(skip)]
    pub active_channel: usize,
    #[serde(skip)]
    pub generator_open: bool,
    #[serde(skip)]
    pub show_suggestions: bool,
    #[serde(skip)]
    pub review_tab: ChangeKind,
}

impl Default for ReportApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            session: Session::new(),
            prompt: String::new(),
            active_channel: 0,
            generator_open: true,
            show_suggestions: true,
            review_tab: ChangeKind::Metric,
        }
    }
}

impl ReportApp {
    /// Create a new ReportApp instance from the creation context, restoring
    /// the persisted theme when available.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Apply the selected theme to the UI context.
    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action = menu::build_menu(ui, ctx, &mut self.theme);
                match menu_action {
                    menu::MenuAction::ExportCsv => match self.session.export_csv() {
                        Ok(path) => tracing::info!("CSV export complete: {}", path.display()),
                        Err(e) => tracing::error!("CSV export failed: {}", e),
                    },
                    menu::MenuAction::ThemeChanged => {
                        tracing::info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.generator_open {
            return;
        }
        egui::SidePanel::right("report_generator_panel")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                generator_panel::show(
                    ui,
                    &mut self.prompt,
                    &mut self.show_suggestions,
                    &mut self.session,
                    now,
                );
                ui.separator();
                review_panel::show(ui, &mut self.session, &mut self.review_tab, now);
            });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Reporting");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                for (idx, channel) in CHANNELS.iter().enumerate() {
                    ui.selectable_value(&mut self.active_channel, idx, *channel);
                }
            });
            ui.separator();

            let filter_count = self.session.current().change_count(ChangeKind::Filter);
            ui.horizontal(|ui| {
                ui.label(format!("Filters ({})", filter_count));
            });
            ui.add_space(4.0);

            table::show(ui, &mut self.session, &mut self.generator_open);
        });
    }
}

impl eframe::App for ReportApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        let now = Instant::now();
        self.session.tick(now);

        self.render_top_menu_bar(ctx);
        self.render_side_panel(ctx, now);
        self.render_central_panel(ctx);
        toast_overlay::show(ctx, &mut self.session.toasts, now);

        // Keep frames coming while deadlines are outstanding; egui only
        // repaints on input otherwise.
        if self.session.is_generating() || !self.session.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

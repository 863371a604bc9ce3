use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct JobDashboardApp {
    pub state: AppState,
}

impl JobDashboardApp {
    /// Build the app and load the configured dataset.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        state.load_source(&config.dataset_path);
        Self { state }
    }
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(12.0);
    ui.heading(title);
    ui.separator();
}

impl eframe::App for JobDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.state;

            ui.heading(RichText::new("Indian Job Market Intelligence Dashboard").size(26.0));

            if state.snapshot.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    let msg = state
                        .status_message
                        .clone()
                        .unwrap_or_else(|| "Open a file to explore postings  (File → Open…)".to_string());
                    ui.heading(msg);
                });
                return;
            }

            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui: &mut Ui| {
                if let Some(snap) = &state.snapshot {
                    section(ui, "Market Overview");
                    panels::market_overview(ui, snap, &state.currency_symbol);

                    section(ui, "Salary Distribution");
                    charts::salary_histogram(ui, &snap.histogram);

                    section(ui, "Salary Growth by Experience");
                    charts::experience_trend(ui, &snap.trend);

                    section(ui, &format!("Top {} Cities by Average Salary", state.settings.top_cities));
                    charts::city_ranking(ui, &snap.ranking, &state.city_colors, &state.currency_symbol);
                }

                section(ui, "Smart Salary Predictor");
                panels::salary_predictor(ui, state);
            });
        });
    }
}

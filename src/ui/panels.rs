use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::estimate::{MarketComparison, MAX_EXPERIENCE_YEARS};
use crate::data::filter::{CityFilter, RoleCategory};
use crate::data::pipeline::{DashboardSnapshot, EstimatorInputs};
use crate::state::AppState;
use crate::ui::format::{currency, currency_or};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Options");
    ui.separator();

    let Some(table) = state.table.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    // ---- City ----
    ui.strong("Select City");
    let mut city = state.inputs.criteria.city.clone();
    egui::ComboBox::from_id_salt("city_filter")
        .selected_text(city.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut city, CityFilter::All, "All");
            for name in table.cities() {
                ui.selectable_value(&mut city, CityFilter::City(name.clone()), name.as_str());
            }
        });
    state.set_city(city);

    ui.add_space(8.0);

    // ---- Role ----
    ui.strong("Role Type");
    let mut role = state.inputs.criteria.role;
    egui::ComboBox::from_id_salt("role_filter")
        .selected_text(role.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in RoleCategory::OPTIONS {
                ui.selectable_value(&mut role, option, option.to_string());
            }
        });
    state.set_role(role);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(table), Some(snap)) = (&state.table, &state.snapshot) {
            ui.label(format!(
                "{} postings loaded, {} matching",
                table.len(),
                snap.metrics.total_jobs
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Market overview
// ---------------------------------------------------------------------------

fn metric_card(ui: &mut Ui, label: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_min_width(ui.available_width());
        ui.label(label);
        ui.label(RichText::new(value).size(24.0).strong());
    });
}

/// Headline numbers, with sentinels for empty subsets.
pub fn market_overview(ui: &mut Ui, snap: &DashboardSnapshot, symbol: &str) {
    let m = &snap.metrics;

    ui.columns(3, |cols: &mut [Ui]| {
        metric_card(&mut cols[0], "Total Jobs", m.total_jobs.to_string());
        metric_card(&mut cols[1], "Average Salary", currency_or(symbol, m.avg_salary, "N/A"));
        metric_card(
            &mut cols[2],
            "Tech Avg Salary",
            currency_or(symbol, m.tech_avg_salary, "No Tech Data"),
        );
    });

    ui.add_space(4.0);
    ui.label(match m.non_tech_avg_salary {
        Some(avg) => format!("Non-Tech Average Salary: {}", currency(symbol, avg)),
        None => "No Non-Tech Data".to_string(),
    });
}

// ---------------------------------------------------------------------------
// Salary predictor
// ---------------------------------------------------------------------------

pub fn salary_predictor(ui: &mut Ui, state: &mut AppState) {
    let mut inputs: EstimatorInputs = state.inputs.estimator;

    ui.add(
        egui::Slider::new(&mut inputs.experience_years, 0..=MAX_EXPERIENCE_YEARS)
            .text("Years of Experience"),
    );

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Is this a Tech Role?");
        egui::ComboBox::from_id_salt("predictor_tech")
            .selected_text(if inputs.is_tech { "Yes" } else { "No" })
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut inputs.is_tech, false, "No");
                ui.selectable_value(&mut inputs.is_tech, true, "Yes");
            });
    });

    state.set_estimator_inputs(inputs);

    let Some(snap) = &state.snapshot else {
        return;
    };

    ui.add_space(6.0);
    ui.label(
        RichText::new(format!(
            "Estimated Salary: {}",
            currency(&state.currency_symbol, snap.predicted_salary)
        ))
        .size(20.0)
        .color(Color32::from_rgb(60, 180, 90)),
    );

    let color = match snap.comparison {
        MarketComparison::Above => Color32::from_rgb(70, 140, 220),
        MarketComparison::Below => Color32::from_rgb(220, 170, 40),
        MarketComparison::NoData => Color32::GRAY,
    };
    ui.label(RichText::new(snap.comparison.to_string()).color(color));
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open job postings")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_source(&path);
    }
}

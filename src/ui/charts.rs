use eframe::egui::{Color32, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, PlotPoints, Points};

use crate::color::CityColors;
use crate::data::views::{CityAverage, SalaryHistogram, TrendPoint};
use crate::ui::format::currency;

const CHART_HEIGHT: f32 = 260.0;

fn no_data(ui: &mut Ui) {
    ui.label("No data for the current filters.");
}

fn base_plot(id: &'static str) -> Plot<'static> {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
}

// ---------------------------------------------------------------------------
// Salary distribution
// ---------------------------------------------------------------------------

pub fn salary_histogram(ui: &mut Ui, histogram: &SalaryHistogram) {
    if histogram.bins.is_empty() {
        no_data(ui);
        return;
    }

    let bars: Vec<Bar> = histogram
        .bins
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{:.0} – {:.0}", bin.lower, bin.upper))
        })
        .collect();

    base_plot("salary_histogram")
        .x_axis_label("Salary")
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE).name("Postings"));
        });
}

// ---------------------------------------------------------------------------
// Experience trend
// ---------------------------------------------------------------------------

pub fn experience_trend(ui: &mut Ui, trend: &[TrendPoint]) {
    if trend.is_empty() {
        no_data(ui);
        return;
    }

    let series: Vec<[f64; 2]> = trend.iter().map(|p| [p.experience, p.mean_salary]).collect();

    base_plot("experience_trend")
        .x_axis_label("Experience (Years)")
        .y_axis_label("Average Salary")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(series.clone()))
                    .name("Average Salary")
                    .color(Color32::LIGHT_BLUE)
                    .width(2.0),
            );
            plot_ui.points(Points::new(PlotPoints::from(series)).radius(3.0).color(Color32::LIGHT_BLUE));
        });
}

// ---------------------------------------------------------------------------
// City ranking
// ---------------------------------------------------------------------------

/// Horizontal bars, highest mean on top, followed by the same rows as a table.
pub fn city_ranking(ui: &mut Ui, ranking: &[CityAverage], colors: &CityColors, symbol: &str) {
    if ranking.is_empty() {
        no_data(ui);
        return;
    }

    let n = ranking.len();
    // Bar i sits at y = n - 1 - i so the first entry is drawn at the top.
    let bars: Vec<Bar> = ranking
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new((n - 1 - i) as f64, c.mean_salary)
                .width(0.7)
                .fill(colors.color_for(&c.city))
                .name(&c.city)
        })
        .collect();

    let labels: Vec<String> = ranking.iter().rev().map(|c| c.city.clone()).collect();

    base_plot("city_ranking")
        .x_axis_label("Average Salary")
        .y_axis_formatter(move |mark: GridMark, _range| city_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Average Salary"));
        });

    ui.add_space(6.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(28.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("City");
            });
            header.col(|ui| {
                ui.strong("Average Salary");
            });
        })
        .body(|mut body| {
            for (i, c) in ranking.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label((i + 1).to_string());
                    });
                    row.col(|ui| {
                        ui.colored_label(colors.color_for(&c.city), c.city.as_str());
                    });
                    row.col(|ui| {
                        ui.label(currency(symbol, c.mean_salary.trunc() as i64));
                    });
                });
            }
        });
}

/// Axis label for an integral bar position, empty between bars.
fn city_label(labels: &[String], value: f64) -> String {
    if value < -1e-6 || (value - value.round()).abs() > 1e-6 {
        return String::new();
    }
    labels.get(value.round() as usize).cloned().unwrap_or_default()
}

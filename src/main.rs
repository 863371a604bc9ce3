use std::path::Path;

use eframe::egui;
use job_market_dashboard::app::JobDashboardApp;
use job_market_dashboard::config::{DashboardConfig, CONFIG_FILE};

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Job Market Intelligence Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(JobDashboardApp::new(&config)))),
    )
}

use eframe::egui;
use log::info;
use maintenance_tracker_backend::source::CsvRequestSource;
use std::sync::Arc;

mod ui;

use ui::app_state::MaintenanceTrackerApp;

/// Default location of the request file when no path is given on the
/// command line.
const DEFAULT_REQUEST_FILE: &str = "data/maintenance_requests.csv";

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Maintenance Tracker egui application");

    let request_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_REQUEST_FILE.to_string());
    info!("Reading maintenance requests from {}", request_file);

    let source = Arc::new(CsvRequestSource::new(request_file));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Maintenance Tracker"),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Maintenance Tracker",
        options,
        Box::new(move |_cc| {
            let today = chrono::Local::now().date_naive();
            Ok(Box::new(MaintenanceTrackerApp::new(source, today)))
        }),
    )
}

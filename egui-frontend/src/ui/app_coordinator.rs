//! # App Coordinator Module
//!
//! The main update loop: polls the outstanding fetch, rebuilds the
//! month grid from (year, month, records, today), and renders the
//! header, grid and any open drill-down overlays.
//!
//! The grid is recomputed every frame rather than cached; at tens to
//! low hundreds of records that costs nothing and there is no stale
//! view to invalidate.

use eframe::egui;

use crate::ui::app_state::MaintenanceTrackerApp;

impl eframe::App for MaintenanceTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();
        if self.fetch.is_some() {
            // Keep polling while the fetch is outstanding; the grid
            // meanwhile renders with an empty activity index.
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        // The clock is read once here and injected everywhere below.
        let today = chrono::Local::now().date_naive();

        let month = self.calendar_service.generate_month(
            self.calendar.selected_year,
            self.calendar.selected_month,
            &self.requests,
            today,
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui, today);
            ui.separator();
            self.render_messages(ui);
            self.render_calendar_grid(ui, &month);
        });

        self.render_drill_overlays(ctx);
    }
}

impl MaintenanceTrackerApp {
    /// Render the error banner, if any. Clicking it dismisses it.
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        if let Some(error) = self.ui.error_message.clone() {
            let banner = ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
            if banner.interact(egui::Sense::click()).clicked() {
                self.ui.clear_messages();
            }
        }
    }
}

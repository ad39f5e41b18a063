//! App header: title plus the month navigation controls
//! (previous / today / next).

use chrono::NaiveDate;
use eframe::egui;

use crate::ui::app_state::MaintenanceTrackerApp;
use crate::ui::components::theme::colors;

impl MaintenanceTrackerApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("🔧 Maintenance Tracker")
                    .font(egui::FontId::proportional(24.0))
                    .strong()
                    .color(colors::PRIMARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Next >").clicked() {
                    self.calendar.navigate_to_next_month();
                }
                if ui.button("Today").clicked() {
                    self.calendar.go_to_today(today);
                }
                if ui.button("< Prev").clicked() {
                    self.calendar.navigate_to_previous_month();
                }

                ui.add_space(16.0);

                let month_year = format!(
                    "{} {}",
                    self.calendar_service.month_name(self.calendar.selected_month),
                    self.calendar.selected_year
                );
                ui.label(
                    egui::RichText::new(month_year)
                        .font(egui::FontId::proportional(18.0))
                        .strong()
                        .color(colors::TEXT_DARK),
                );
            });
        });
    }
}

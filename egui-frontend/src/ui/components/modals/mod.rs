//! Drill-down overlays: the selected day's ticket list (level 1) and a
//! single ticket's detail (level 2).

use eframe::egui;

use crate::ui::app_state::MaintenanceTrackerApp;
use crate::ui::state::DrillState;

pub mod day_list_overlay;
pub mod request_detail;

impl MaintenanceTrackerApp {
    /// Render whichever drill-down layers are open. While a ticket is
    /// open its day list stays visible underneath, inert; only the
    /// topmost layer handles input.
    pub fn render_drill_overlays(&mut self, ctx: &egui::Context) {
        match self.calendar.drill.clone() {
            DrillState::Idle => {}
            DrillState::DaySelected { day } => {
                self.render_day_list_overlay(ctx, day, true);
            }
            DrillState::TicketSelected { day, request } => {
                self.render_day_list_overlay(ctx, day, false);
                self.render_request_detail(ctx, &request);
            }
        }
    }
}

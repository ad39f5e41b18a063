//! Ticket detail overlay (drill level 2).
//!
//! Shown on top of the day list; closing it returns to the day's list,
//! never straight to the month grid.

use eframe::egui;
use shared::{MaintenanceRequest, RequestPriority};

use crate::ui::app_state::MaintenanceTrackerApp;
use crate::ui::components::calendar_renderer::stage_badge_palette;
use crate::ui::components::theme::colors;

const MODAL_SIZE: egui::Vec2 = egui::vec2(420.0, 360.0);

impl MaintenanceTrackerApp {
    pub fn render_request_detail(&mut self, ctx: &egui::Context, request: &MaintenanceRequest) {
        let mut close_requested = false;

        egui::Area::new(egui::Id::new("request_detail_overlay"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(2.0, colors::PRIMARY))
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(egui::Margin::same(24.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(MODAL_SIZE.x, 240.0));
                                ui.set_max_size(MODAL_SIZE);

                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(&request.subject)
                                            .font(egui::FontId::proportional(18.0))
                                            .strong()
                                            .color(colors::TEXT_DARK),
                                    );
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            let close = egui::Button::new(
                                                egui::RichText::new("✕")
                                                    .color(colors::TEXT_LIGHT),
                                            )
                                            .frame(false);
                                            if ui.add(close).clicked() {
                                                close_requested = true;
                                            }
                                        },
                                    );
                                });

                                ui.horizontal(|ui| {
                                    let (badge_fill, badge_text) =
                                        stage_badge_palette(request.stage);
                                    egui::Frame::none()
                                        .fill(badge_fill)
                                        .rounding(egui::Rounding::same(10.0))
                                        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                                        .show(ui, |ui| {
                                            ui.label(
                                                egui::RichText::new(request.stage.as_str())
                                                    .size(11.0)
                                                    .color(badge_text),
                                            );
                                        });

                                    if request.priority == RequestPriority::High {
                                        egui::Frame::none()
                                            .fill(colors::DANGER_LIGHT)
                                            .rounding(egui::Rounding::same(10.0))
                                            .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                                            .show(ui, |ui| {
                                                ui.label(
                                                    egui::RichText::new("High priority")
                                                        .size(11.0)
                                                        .color(colors::DANGER),
                                                );
                                            });
                                    }
                                });

                                ui.separator();
                                self.render_detail_fields(ui, request);
                                ui.add_space(16.0);

                                ui.vertical_centered(|ui| {
                                    if ui.button("Close").clicked() {
                                        close_requested = true;
                                    }
                                });
                            });
                    });
                });

                // Backdrop click closes only this layer, back to the
                // day's list
                if !self.calendar.modal_just_opened
                    && ui.ctx().input(|i| i.pointer.any_click())
                {
                    if let Some(pos) = ui.ctx().input(|i| i.pointer.interact_pos()) {
                        let modal_rect = egui::Rect::from_center_size(
                            ui.ctx().screen_rect().center(),
                            MODAL_SIZE + egui::vec2(50.0, 50.0),
                        );
                        if !modal_rect.contains(pos) {
                            close_requested = true;
                        }
                    }
                }
                self.calendar.modal_just_opened = false;
            });

        if close_requested {
            self.calendar.close_ticket();
        }
    }

    fn render_detail_fields(&self, ui: &mut egui::Ui, request: &MaintenanceRequest) {
        let scheduled = match request.scheduled_date.as_deref() {
            Some(date) => self.calendar_service.format_date_for_display(date),
            None => "Unscheduled".to_string(),
        };
        let requested = self
            .calendar_service
            .format_date_for_display(&request.request_date);

        egui::Grid::new("request_detail_fields")
            .num_columns(2)
            .spacing(egui::vec2(24.0, 6.0))
            .show(ui, |ui| {
                detail_row(ui, "Equipment", request.equipment_id.as_deref().unwrap_or("-"));
                detail_row(ui, "Team", request.team_id.as_deref().unwrap_or("Internal"));
                detail_row(ui, "Category", request.category.as_deref().unwrap_or("-"));
                detail_row(ui, "Company", request.company.as_deref().unwrap_or("Nexora Labs"));
                detail_row(ui, "Scheduled", &scheduled);
                detail_row(ui, "Requested", &requested);
            });
    }
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(colors::TEXT_LIGHT),
    );
    ui.label(egui::RichText::new(value).size(13.0).color(colors::TEXT_DARK));
    ui.end_row();
}

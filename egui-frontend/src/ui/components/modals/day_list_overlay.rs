//! Day ticket-list overlay (drill level 1).
//!
//! Shows every request scheduled on the selected day, in source order,
//! with an explicit empty state. Clicking a row opens the ticket
//! detail on top; the close button and backdrop dismiss the day.

use eframe::egui;
use shared::MaintenanceRequest;

use crate::ui::app_state::MaintenanceTrackerApp;
use crate::ui::components::calendar_renderer::stage_badge_palette;
use crate::ui::components::theme::colors;

const MODAL_SIZE: egui::Vec2 = egui::vec2(450.0, 420.0);

impl MaintenanceTrackerApp {
    /// `interactive` is false while the ticket detail is stacked on
    /// top, leaving this layer visible but inert.
    pub fn render_day_list_overlay(&mut self, ctx: &egui::Context, day: u32, interactive: bool) {
        let requests = self.calendar_service.requests_on_day(
            self.calendar.selected_year,
            self.calendar.selected_month,
            day,
            &self.requests,
        );
        let title = format!(
            "{} {}",
            day,
            self.calendar_service.month_name(self.calendar.selected_month)
        );

        let mut close_requested = false;
        let mut picked: Option<MaintenanceRequest> = None;

        egui::Area::new(egui::Id::new("day_list_overlay"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_rect = ctx.screen_rect();
                ui.painter().rect_filled(
                    screen_rect,
                    egui::Rounding::ZERO,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 80),
                );

                ui.allocate_ui_at_rect(screen_rect, |ui| {
                    ui.centered_and_justified(|ui| {
                        egui::Frame::window(&ui.style())
                            .fill(egui::Color32::WHITE)
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(egui::Margin::same(24.0))
                            .show(ui, |ui| {
                                ui.set_min_size(egui::vec2(MODAL_SIZE.x, 220.0));
                                ui.set_max_size(MODAL_SIZE);

                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(&title)
                                            .font(egui::FontId::proportional(18.0))
                                            .strong()
                                            .color(colors::PRIMARY),
                                    );
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            let close = egui::Button::new(
                                                egui::RichText::new("✕")
                                                    .color(colors::TEXT_LIGHT),
                                            )
                                            .frame(false);
                                            if ui.add_enabled(interactive, close).clicked() {
                                                close_requested = true;
                                            }
                                        },
                                    );
                                });
                                ui.separator();

                                if requests.is_empty() {
                                    ui.add_space(24.0);
                                    ui.vertical_centered(|ui| {
                                        ui.label(
                                            egui::RichText::new("No activity scheduled.")
                                                .color(colors::TEXT_LIGHT),
                                        );
                                    });
                                    ui.add_space(24.0);
                                } else {
                                    egui::ScrollArea::vertical().max_height(340.0).show(
                                        ui,
                                        |ui| {
                                            for request in &requests {
                                                if render_request_row(ui, request, interactive) {
                                                    picked = Some(request.clone());
                                                }
                                                ui.add_space(8.0);
                                            }
                                        },
                                    );
                                }
                            });
                    });
                });

                // Backdrop click closes the day and everything it
                // contains (skip the frame the modal opened on)
                if interactive
                    && !self.calendar.modal_just_opened
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
                if interactive {
                    self.calendar.modal_just_opened = false;
                }
            });

        if let Some(request) = picked {
            // Unreachable from Idle: rows only render inside an open day
            if let Err(e) = self.calendar.select_ticket(request) {
                log::error!("Ignoring ticket selection: {}", e);
            }
        } else if close_requested {
            self.calendar.close_day();
        }
    }
}

/// One ticket row: subject, stage badge, equipment reference.
/// Returns true when clicked.
fn render_request_row(
    ui: &mut egui::Ui,
    request: &MaintenanceRequest,
    interactive: bool,
) -> bool {
    let response = egui::Frame::none()
        .fill(colors::BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(370.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&request.subject)
                        .strong()
                        .color(colors::TEXT_DARK),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (badge_fill, badge_text) = stage_badge_palette(request.stage);
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
                });
            });
            if let Some(equipment) = &request.equipment_id {
                ui.label(
                    egui::RichText::new(equipment)
                        .size(12.0)
                        .color(colors::TEXT_LIGHT),
                );
            }
        })
        .response;

    interactive && response.interact(egui::Sense::click()).clicked()
}

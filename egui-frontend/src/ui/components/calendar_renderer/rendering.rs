//! Month grid rendering: weekday header, leading blanks, day cells
//! with activity chips, the "+ N more" overflow label, and the today
//! highlight. Clicking a day cell opens its ticket list.

use eframe::egui;
use shared::{CalendarDay, CalendarMonth};

use super::types::{chip_palette, CELL_HEIGHT, CHIP_HEIGHT, CHIP_SPACING, WEEKDAY_NAMES};
use crate::ui::app_state::MaintenanceTrackerApp;
use crate::ui::components::theme::colors;

const GRID_SPACING: f32 = 4.0;

impl MaintenanceTrackerApp {
    pub fn render_calendar_grid(&mut self, ui: &mut egui::Ui, month: &CalendarMonth) {
        let cell_width = (ui.available_width() - GRID_SPACING * 6.0) / 7.0;

        // Weekday header row
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = GRID_SPACING;
            for name in WEEKDAY_NAMES {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(cell_width, 24.0),
                    egui::Sense::hover(),
                );
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    name,
                    egui::FontId::proportional(13.0),
                    colors::TEXT_LIGHT,
                );
            }
        });
        ui.add_space(GRID_SPACING);

        // Week rows. The cell sequence starts with the leading blanks,
        // so chunking by 7 lines the columns up with the weekday header.
        let mut clicked_day = None;
        for week in month.days.chunks(7) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = GRID_SPACING;
                for cell in week {
                    if let Some(day) = render_day_cell(ui, cell, cell_width) {
                        clicked_day = Some(day);
                    }
                }
            });
            ui.add_space(GRID_SPACING);
        }

        if let Some(day) = clicked_day {
            self.calendar.select_day(day);
        }
    }
}

/// Paint one cell; returns the day number when the cell was clicked.
fn render_day_cell(ui: &mut egui::Ui, cell: &CalendarDay, width: f32) -> Option<u32> {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(width, CELL_HEIGHT),
        egui::Sense::click(),
    );

    if cell.is_blank() {
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(2.0), colors::PADDING_FILL);
        ui.painter().rect_stroke(
            rect,
            egui::Rounding::same(2.0),
            egui::Stroke::new(0.5, colors::BORDER),
        );
        return None;
    }

    let fill = if cell.is_today {
        colors::TODAY_FILL
    } else if response.hovered() {
        colors::HOVER_FILL
    } else {
        egui::Color32::WHITE
    };
    ui.painter()
        .rect_filled(rect, egui::Rounding::same(2.0), fill);
    ui.painter().rect_stroke(
        rect,
        egui::Rounding::same(2.0),
        egui::Stroke::new(0.5, colors::BORDER),
    );

    // Day number; today gets a filled primary circle with white text
    let number_center = rect.min + egui::vec2(14.0, 14.0);
    if cell.is_today {
        ui.painter()
            .circle_filled(number_center, 10.0, colors::PRIMARY);
        ui.painter().text(
            number_center,
            egui::Align2::CENTER_CENTER,
            cell.day.to_string(),
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    } else {
        ui.painter().text(
            number_center,
            egui::Align2::CENTER_CENTER,
            cell.day.to_string(),
            egui::FontId::proportional(12.0),
            colors::TEXT_DARK,
        );
    }

    // Activity chips, capped; the rest collapses into "+ N more"
    let chip_left = rect.left() + 6.0;
    let chip_width = width - 12.0;
    let mut chip_top = rect.top() + 28.0;

    for request in cell.visible_requests() {
        let chip_rect = egui::Rect::from_min_size(
            egui::pos2(chip_left, chip_top),
            egui::vec2(chip_width, CHIP_HEIGHT),
        );
        let (chip_fill, chip_accent) = chip_palette(request.priority);

        ui.painter()
            .rect_filled(chip_rect, egui::Rounding::same(2.0), chip_fill);
        // Accent bar on the leading edge
        ui.painter().rect_filled(
            egui::Rect::from_min_size(chip_rect.min, egui::vec2(3.0, CHIP_HEIGHT)),
            egui::Rounding::ZERO,
            chip_accent,
        );
        ui.painter()
            .with_clip_rect(chip_rect.shrink2(egui::vec2(4.0, 0.0)))
            .text(
                egui::pos2(chip_rect.left() + 7.0, chip_rect.center().y),
                egui::Align2::LEFT_CENTER,
                &request.subject,
                egui::FontId::proportional(10.0),
                chip_accent,
            );

        chip_top += CHIP_HEIGHT + CHIP_SPACING;
    }

    if cell.overflow_count() > 0 {
        ui.painter().text(
            egui::pos2(chip_left + 2.0, chip_top + CHIP_HEIGHT / 2.0),
            egui::Align2::LEFT_CENTER,
            format!("+ {} more", cell.overflow_count()),
            egui::FontId::proportional(10.0),
            colors::TEXT_LIGHT,
        );
    }

    if response.clicked() {
        Some(cell.day)
    } else {
        None
    }
}

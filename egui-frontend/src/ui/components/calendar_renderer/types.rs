//! Visual vocabulary of the calendar grid: chip and badge palettes
//! keyed by request priority and stage, plus the grid metrics.

use eframe::egui::Color32;
use shared::{RequestPriority, RequestStage};

use crate::ui::components::theme::colors;

/// Weekday header labels, Sunday-first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const CELL_HEIGHT: f32 = 96.0;
pub const CHIP_HEIGHT: f32 = 16.0;
pub const CHIP_SPACING: f32 = 3.0;

/// Fill and accent colors for an activity chip. High priority carries
/// the danger palette; everything else the info palette. Visual weight
/// only.
pub fn chip_palette(priority: RequestPriority) -> (Color32, Color32) {
    match priority {
        RequestPriority::High => (colors::DANGER_LIGHT, colors::DANGER),
        RequestPriority::Normal => (colors::INFO_LIGHT, colors::INFO),
    }
}

/// Fill and text colors for a stage badge.
pub fn stage_badge_palette(stage: RequestStage) -> (Color32, Color32) {
    match stage {
        RequestStage::NewRequest => (colors::INFO_LIGHT, colors::INFO),
        RequestStage::InProgress => (colors::WARNING_LIGHT, colors::WARNING),
        RequestStage::Repaired => (colors::SUCCESS_LIGHT, colors::SUCCESS),
        RequestStage::Scrap => (colors::BACKGROUND, colors::TEXT_LIGHT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_priority_uses_danger_palette() {
        assert_eq!(
            chip_palette(RequestPriority::High),
            (colors::DANGER_LIGHT, colors::DANGER)
        );
        assert_eq!(
            chip_palette(RequestPriority::Normal),
            (colors::INFO_LIGHT, colors::INFO)
        );
    }

    #[test]
    fn test_each_stage_has_a_distinct_badge() {
        let stages = [
            RequestStage::NewRequest,
            RequestStage::InProgress,
            RequestStage::Repaired,
            RequestStage::Scrap,
        ];
        for (i, a) in stages.iter().enumerate() {
            for b in stages.iter().skip(i + 1) {
                assert_ne!(stage_badge_palette(*a), stage_badge_palette(*b));
            }
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of activity chips a calendar day cell shows before the
/// remainder collapses into a "+ N more" overflow count.
pub const MAX_VISIBLE_ACTIVITIES: usize = 3;

/// A single maintenance request as supplied by the record source.
///
/// Timestamps are RFC 3339 strings carrying the scheduler's local offset
/// (e.g. "2026-03-14T09:00:00-04:00"). Only the date portion of
/// `scheduled_date` matters for calendar bucketing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: String,
    /// Short display text shown in lists and calendar chips
    pub subject: String,
    /// Equipment the request is about (display-only reference)
    #[serde(default)]
    pub equipment_id: Option<String>,
    /// Maintenance team assigned to the request (display-only reference)
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub stage: RequestStage,
    pub priority: RequestPriority,
    /// When the work is scheduled (RFC 3339). None means unscheduled and
    /// the request never appears on the calendar.
    #[serde(default)]
    pub scheduled_date: Option<String>,
    /// When the request was filed (RFC 3339). Used for sort order in the
    /// request log, not by the calendar.
    pub request_date: String,
}

/// Lifecycle stage of a maintenance request.
///
/// Serialized with the spellings the record store uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStage {
    #[serde(rename = "New Request")]
    NewRequest,
    #[serde(rename = "In Progress")]
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStage::NewRequest => "New Request",
            RequestStage::InProgress => "In Progress",
            RequestStage::Repaired => "Repaired",
            RequestStage::Scrap => "Scrap",
        }
    }

    /// Parse the record store's stage spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "New Request" => Some(RequestStage::NewRequest),
            "In Progress" => Some(RequestStage::InProgress),
            "Repaired" => Some(RequestStage::Repaired),
            "Scrap" => Some(RequestStage::Scrap),
            _ => None,
        }
    }

}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a maintenance request. Affects visual weight only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestPriority {
    Normal,
    High,
}

impl RequestPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPriority::Normal => "Normal",
            RequestPriority::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Normal" => Some(RequestPriority::Normal),
            "High" => Some(RequestPriority::High),
            _ => None,
        }
    }
}

impl fmt::Display for RequestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of calendar cell for explicit rendering logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Empty padding cell before the 1st of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell in the month grid.
///
/// Cells are rebuilt from (year, month, records, today) on every render
/// and never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day number within the month; 0 for padding cells
    pub day: u32,
    pub is_today: bool,
    pub day_type: CalendarDayType,
    /// Requests scheduled on this day, in the order the source returned them
    pub requests: Vec<MaintenanceRequest>,
}

impl CalendarDay {
    /// A blank leading cell belonging to the previous month's trailing week.
    pub fn padding() -> Self {
        Self {
            day: 0,
            is_today: false,
            day_type: CalendarDayType::PaddingBefore,
            requests: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.day_type == CalendarDayType::PaddingBefore
    }

    /// The requests that fit in the cell, in presentation order.
    pub fn visible_requests(&self) -> &[MaintenanceRequest] {
        let visible = self.requests.len().min(MAX_VISIBLE_ACTIVITIES);
        &self.requests[..visible]
    }

    /// Number of same-day requests beyond the visible cap.
    pub fn overflow_count(&self) -> usize {
        self.requests.len().saturating_sub(MAX_VISIBLE_ACTIVITIES)
    }
}

/// A month grid: leading padding cells followed by one cell per day
/// 1..=days_in_month. No trailing padding is added; squaring off the
/// final week is a rendering concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    /// 1-based month (1 = January)
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    /// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u32,
}

impl CalendarMonth {
    /// Cells that are real days of the month, skipping leading padding.
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| !d.is_blank())
    }

    /// Look up a specific day's cell.
    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.month_days().find(|d| d.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str) -> MaintenanceRequest {
        MaintenanceRequest {
            id: id.to_string(),
            subject: format!("Request {}", id),
            equipment_id: None,
            team_id: None,
            category: None,
            company: None,
            stage: RequestStage::NewRequest,
            priority: RequestPriority::Normal,
            scheduled_date: Some("2026-03-14T09:00:00-04:00".to_string()),
            request_date: "2026-03-01T08:00:00-04:00".to_string(),
        }
    }

    #[test]
    fn stage_uses_record_store_spellings() {
        let json = serde_json::to_string(&RequestStage::NewRequest).unwrap();
        assert_eq!(json, "\"New Request\"");

        let stage: RequestStage = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(stage, RequestStage::InProgress);

        assert_eq!(RequestStage::parse("Scrap"), Some(RequestStage::Scrap));
        assert_eq!(RequestStage::parse("Done"), None);
    }

    #[test]
    fn request_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "r1",
            "subject": "Grease spindle",
            "stage": "New Request",
            "priority": "High",
            "request_date": "2026-03-01T08:00:00-04:00"
        }"#;
        let parsed: MaintenanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.equipment_id, None);
        assert_eq!(parsed.scheduled_date, None);
        assert_eq!(parsed.priority, RequestPriority::High);
    }

    #[test]
    fn day_caps_visible_requests_and_reports_overflow() {
        let day = CalendarDay {
            day: 14,
            is_today: false,
            day_type: CalendarDayType::MonthDay,
            requests: (0..5).map(|i| request(&i.to_string())).collect(),
        };

        assert_eq!(day.visible_requests().len(), 3);
        assert_eq!(day.visible_requests()[0].id, "0");
        assert_eq!(day.overflow_count(), 2);
    }

    #[test]
    fn day_with_few_requests_has_no_overflow() {
        let day = CalendarDay {
            day: 2,
            is_today: false,
            day_type: CalendarDayType::MonthDay,
            requests: vec![request("a")],
        };

        assert_eq!(day.visible_requests().len(), 1);
        assert_eq!(day.overflow_count(), 0);
    }

    #[test]
    fn padding_cells_are_blank() {
        let padding = CalendarDay::padding();
        assert!(padding.is_blank());
        assert!(padding.requests.is_empty());
        assert_eq!(padding.overflow_count(), 0);
    }
}

//! Calendar domain logic for the maintenance tracker.
//!
//! This module contains the business logic for the maintenance-activity
//! calendar: month arithmetic, bucketing of requests onto calendar days,
//! and month grid generation. The UI only handles presentation concerns;
//! all date computations happen here.
//!
//! Bucketing reads the date components of a request's `scheduled_date`
//! exactly as they were written (the scheduler's local wall-clock date).
//! It never round-trips the timestamp through a UTC serialization, which
//! would shift the bucket by a day near midnight in non-UTC zones.

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarDay, CalendarDayType, CalendarMonth, MaintenanceRequest};
use std::collections::HashMap;

/// Calendar service that handles all calendar-related business logic.
///
/// The service is stateless; the displayed month and drill-down state
/// are owned by the view layer and passed in per call.
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate a month grid with request data bucketed onto its days.
    ///
    /// `today` is supplied by the caller so the grid stays a pure
    /// function of its inputs.
    pub fn generate_month(
        &self,
        year: i32,
        month: u32,
        requests: &[MaintenanceRequest],
        today: NaiveDate,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(year, month);
        let first_day = self.first_day_of_month(year, month);
        let requests_by_day = self.index_by_day(year, month, requests);

        debug!(
            "📅 Generating {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_day
        );

        let mut days = Vec::with_capacity((first_day + days_in_month) as usize);

        for _ in 0..first_day {
            days.push(CalendarDay::padding());
        }

        for day in 1..=days_in_month {
            let day_requests = requests_by_day.get(&day).cloned().unwrap_or_default();
            let is_today =
                today.year() == year && today.month() == month && today.day() == day;

            days.push(CalendarDay {
                day,
                is_today,
                day_type: CalendarDayType::MonthDay,
                requests: day_requests,
            });
        }

        CalendarMonth {
            month,
            year,
            days,
            first_day_of_week: first_day,
        }
    }

    /// Number of days in a month, computed as the day preceding the 1st
    /// of the following month. Handles all month lengths and leap years
    /// without a lookup table.
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map(|last_of_month| last_of_month.day())
            .unwrap_or(0)
    }

    /// Weekday of the 1st of the month (0 = Sunday .. 6 = Saturday).
    pub fn first_day_of_month(&self, year: i32, month: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            0
        }
    }

    /// Bucket requests by day-of-month for the given (year, month).
    ///
    /// Within a day, the order the source returned the requests is
    /// preserved. Requests without a parseable `scheduled_date` go in no
    /// bucket; there is no fallback to `request_date`.
    pub fn index_by_day(
        &self,
        year: i32,
        month: u32,
        requests: &[MaintenanceRequest],
    ) -> HashMap<u32, Vec<MaintenanceRequest>> {
        let mut by_day: HashMap<u32, Vec<MaintenanceRequest>> = HashMap::new();

        for request in requests {
            let date_str = match request.scheduled_date.as_deref() {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            if let Some((r_year, r_month, r_day)) = self.parse_request_date(date_str) {
                if r_year == year && r_month == month {
                    by_day.entry(r_day).or_default().push(request.clone());
                }
            }
        }

        by_day
    }

    /// The requests scheduled on one specific day, in source order.
    pub fn requests_on_day(
        &self,
        year: i32,
        month: u32,
        day: u32,
        requests: &[MaintenanceRequest],
    ) -> Vec<MaintenanceRequest> {
        let key = self.bucket_key(year, month, day);
        requests
            .iter()
            .filter(|request| {
                request
                    .scheduled_date
                    .as_deref()
                    .and_then(|s| self.local_bucket_key(s))
                    .map_or(false, |k| k == key)
            })
            .cloned()
            .collect()
    }

    /// The `YYYY-MM-DD` identity of a grid cell.
    pub fn bucket_key(&self, year: i32, month: u32, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", year, month, day)
    }

    /// The `YYYY-MM-DD` bucket key of a scheduled timestamp, built from
    /// the local date components carried by the RFC 3339 string itself.
    pub fn local_bucket_key(&self, date_str: &str) -> Option<String> {
        let (year, month, day) = self.parse_request_date(date_str)?;
        Some(self.bucket_key(year, month, day))
    }

    /// Extract (year, month, day) from an RFC 3339 timestamp string.
    ///
    /// The leading date segment is the scheduler's local wall-clock
    /// date, so no timezone conversion is involved. Returns None for
    /// anything that does not start with a plausible `YYYY-MM-DD`.
    pub fn parse_request_date(&self, date_str: &str) -> Option<(i32, u32, u32)> {
        let date_part = date_str.split('T').next()?;
        let parts: Vec<&str> = date_part.split('-').collect();
        if parts.len() != 3 {
            return None;
        }

        let year = parts[0].parse::<i32>().ok()?;
        let month = parts[1].parse::<u32>().ok()?;
        let day = parts[2].parse::<u32>().ok()?;

        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            Some((year, month, day))
        } else {
            None
        }
    }

    /// Human-readable name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Format a stored timestamp for display, e.g. "March 14, 2026".
    pub fn format_date_for_display(&self, date_str: &str) -> String {
        if let Some((year, month, day)) = self.parse_request_date(date_str) {
            format!("{} {}, {}", self.month_name(month), day, year)
        } else {
            date_str.to_string()
        }
    }

    /// The month before (year, month), rolling the year at January.
    pub fn previous_month(&self, year: i32, month: u32) -> (i32, u32) {
        if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        }
    }

    /// The month after (year, month), rolling the year at December.
    pub fn next_month(&self, year: i32, month: u32) -> (i32, u32) {
        if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{RequestPriority, RequestStage};

    fn create_test_request(id: &str, scheduled_date: Option<&str>) -> MaintenanceRequest {
        MaintenanceRequest {
            id: id.to_string(),
            subject: format!("Request {}", id),
            equipment_id: Some("EQ-100".to_string()),
            team_id: None,
            category: None,
            company: None,
            stage: RequestStage::NewRequest,
            priority: RequestPriority::Normal,
            scheduled_date: scheduled_date.map(|s| s.to_string()),
            request_date: "2026-01-05T08:00:00-05:00".to_string(),
        }
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(2025, 1), 31); // January
        assert_eq!(service.days_in_month(2025, 4), 30); // April
        assert_eq!(service.days_in_month(2023, 2), 28); // February (non-leap)
        assert_eq!(service.days_in_month(2024, 2), 29); // February (leap year)
        assert_eq!(service.days_in_month(1900, 2), 28); // centuries are not leap
        assert_eq!(service.days_in_month(2000, 2), 29); // unless divisible by 400
        assert_eq!(service.days_in_month(2025, 12), 31); // rollover into next year
    }

    #[test]
    fn test_april_always_has_thirty_days() {
        let service = CalendarService::new();
        for year in [1999, 2020, 2024, 2048, 2100] {
            assert_eq!(service.days_in_month(year, 4), 30);
        }
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::new();

        assert_eq!(service.first_day_of_month(2025, 6), 0); // 2025-06-01 was a Sunday
        assert_eq!(service.first_day_of_month(2024, 2), 4); // 2024-02-01 was a Thursday
        assert_eq!(service.first_day_of_month(2026, 3), 0); // 2026-03-01 is a Sunday
    }

    #[test]
    fn test_grid_length_is_offset_plus_days() {
        let service = CalendarService::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        for (year, month) in [
            (2024, 2),
            (2023, 2),
            (2025, 6),
            (2025, 12),
            (2026, 1),
            (2000, 2),
        ] {
            let grid = service.generate_month(year, month, &[], today);
            let expected =
                service.first_day_of_month(year, month) + service.days_in_month(year, month);
            assert_eq!(grid.days.len() as u32, expected, "{}/{}", month, year);
        }
    }

    #[test]
    fn test_grid_has_no_trailing_padding() {
        let service = CalendarService::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let grid = service.generate_month(2026, 3, &[], today);
        let last = grid.days.last().unwrap();
        assert_eq!(last.day_type, CalendarDayType::MonthDay);
        assert_eq!(last.day, 31);
    }

    #[test]
    fn test_parse_request_date() {
        let service = CalendarService::new();

        assert_eq!(
            service.parse_request_date("2026-03-14T09:00:00-04:00"),
            Some((2026, 3, 14))
        );
        assert_eq!(service.parse_request_date("2026-03-14"), Some((2026, 3, 14)));
        assert_eq!(service.parse_request_date("not-a-date"), None);
        assert_eq!(service.parse_request_date("2026-13-01T00:00:00Z"), None);
        assert_eq!(service.parse_request_date(""), None);
    }

    #[test]
    fn test_bucket_key_is_zero_padded() {
        let service = CalendarService::new();

        assert_eq!(service.bucket_key(2026, 3, 4), "2026-03-04");
        assert_eq!(
            service.local_bucket_key("2026-03-04T07:30:00+01:00"),
            Some("2026-03-04".to_string())
        );
    }

    #[test]
    fn test_bucketing_uses_local_date_not_utc() {
        let service = CalendarService::new();

        // Both timestamps fall on April 1 local time in a UTC+2 zone, but
        // their UTC instants straddle the March 31 / April 1 boundary
        // (23:30Z on the 31st vs 21:30Z on the 1st). A UTC round-trip
        // would split them across two days.
        let late_evening = create_test_request("a", Some("2026-04-01T01:30:00+02:00"));
        let next_evening = create_test_request("b", Some("2026-04-01T23:30:00+02:00"));

        let by_day =
            service.index_by_day(2026, 4, &[late_evening.clone(), next_evening.clone()]);

        assert_eq!(by_day.len(), 1);
        let day_one = by_day.get(&1).unwrap();
        assert_eq!(day_one.len(), 2);
        assert_eq!(day_one[0].id, "a");
        assert_eq!(day_one[1].id, "b");
    }

    #[test]
    fn test_late_local_evening_buckets_to_local_day() {
        let service = CalendarService::new();

        // 23:30 local in UTC+10 is 13:30Z the same local day; the bucket
        // must be the local day regardless of the viewer's UTC offset.
        let request = create_test_request("x", Some("2026-06-15T23:30:00+10:00"));
        let by_day = service.index_by_day(2026, 6, &[request]);

        assert!(by_day.contains_key(&15));
    }

    #[test]
    fn test_index_preserves_insertion_order_within_day() {
        let service = CalendarService::new();

        let requests = vec![
            create_test_request("first", Some("2026-03-10T08:00:00-04:00")),
            create_test_request("second", Some("2026-03-10T06:00:00-04:00")),
            create_test_request("third", Some("2026-03-10T22:00:00-04:00")),
        ];

        let by_day = service.index_by_day(2026, 3, &requests);
        let day_ten: Vec<&str> = by_day.get(&10).unwrap().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(day_ten, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unscheduled_and_malformed_requests_are_excluded() {
        let service = CalendarService::new();

        let requests = vec![
            create_test_request("none", None),
            create_test_request("empty", Some("")),
            create_test_request("garbage", Some("soon")),
            create_test_request("ok", Some("2026-03-20T10:00:00-04:00")),
        ];

        let by_day = service.index_by_day(2026, 3, &requests);
        assert_eq!(by_day.len(), 1);
        assert_eq!(by_day.get(&20).unwrap().len(), 1);
        assert_eq!(by_day.get(&20).unwrap()[0].id, "ok");
    }

    #[test]
    fn test_other_months_are_excluded() {
        let service = CalendarService::new();

        let requests = vec![
            create_test_request("in", Some("2026-03-05T10:00:00-04:00")),
            create_test_request("prev-month", Some("2026-02-28T10:00:00-05:00")),
            create_test_request("prev-year", Some("2025-03-05T10:00:00-04:00")),
        ];

        let by_day = service.index_by_day(2026, 3, &requests);
        assert_eq!(by_day.len(), 1);
        assert!(by_day.contains_key(&5));
    }

    #[test]
    fn test_generate_month_marks_injected_today() {
        let service = CalendarService::new();
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        let grid = service.generate_month(2026, 3, &[], today);
        let todays: Vec<u32> = grid
            .month_days()
            .filter(|d| d.is_today)
            .map(|d| d.day)
            .collect();
        assert_eq!(todays, vec![14]);

        // A different displayed month never marks today
        let other = service.generate_month(2026, 4, &[], today);
        assert!(other.month_days().all(|d| !d.is_today));
    }

    #[test]
    fn test_generate_month_caps_visible_requests() {
        let service = CalendarService::new();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let requests: Vec<MaintenanceRequest> = (0..5)
            .map(|i| create_test_request(&i.to_string(), Some("2026-03-14T09:00:00-04:00")))
            .collect();

        let grid = service.generate_month(2026, 3, &requests, today);
        let day = grid.day(14).unwrap();
        assert_eq!(day.requests.len(), 5);
        assert_eq!(day.visible_requests().len(), 3);
        assert_eq!(day.overflow_count(), 2);

        let empty_day = grid.day(15).unwrap();
        assert!(empty_day.requests.is_empty());
    }

    #[test]
    fn test_requests_on_day() {
        let service = CalendarService::new();

        let requests = vec![
            create_test_request("a", Some("2026-03-10T08:00:00-04:00")),
            create_test_request("b", Some("2026-03-11T08:00:00-04:00")),
            create_test_request("c", Some("2026-03-10T18:00:00-04:00")),
            create_test_request("d", None),
        ];

        let on_tenth = service.requests_on_day(2026, 3, 10, &requests);
        let ids: Vec<&str> = on_tenth.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(service.requests_on_day(2026, 3, 12, &requests).is_empty());
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_format_date_for_display() {
        let service = CalendarService::new();

        assert_eq!(
            service.format_date_for_display("2026-03-14T09:00:00-04:00"),
            "March 14, 2026"
        );
        assert_eq!(service.format_date_for_display("whenever"), "whenever");
    }

    #[test]
    fn test_navigation_helpers_wrap_the_year() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(2026, 6), (2026, 5));
        assert_eq!(service.previous_month(2026, 1), (2025, 12));
        assert_eq!(service.next_month(2026, 6), (2026, 7));
        assert_eq!(service.next_month(2026, 12), (2027, 1));

        // Twelve steps forward lands on the same month next year
        let (mut year, mut month) = (2026, 8);
        for _ in 0..12 {
            let next = service.next_month(year, month);
            year = next.0;
            month = next.1;
        }
        assert_eq!((year, month), (2027, 8));
    }
}

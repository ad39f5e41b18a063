//! # App State Module
//!
//! Central application state for the maintenance tracker: the fetched
//! request list, the calendar view state, and the outstanding fetch (if
//! any). All state lives in one struct so the immediate-mode UI can
//! borrow it in a single place.

use chrono::NaiveDate;
use log::info;
use maintenance_tracker_backend::domain::calendar::CalendarService;
use maintenance_tracker_backend::source::MaintenanceRequestSource;
use shared::MaintenanceRequest;
use std::sync::mpsc;
use std::sync::Arc;

use crate::ui::data_loading::{self, FetchOutcome};
use crate::ui::state::{CalendarState, UiState};

/// Main application struct for the egui maintenance tracker.
pub struct MaintenanceTrackerApp {
    pub calendar_service: CalendarService,

    /// The full request collection, fetched once per session and held
    /// immutably afterwards. Empty while the fetch is outstanding or
    /// after a failed fetch.
    pub requests: Vec<MaintenanceRequest>,

    /// Receiver for the one-shot fetch; None once the result arrived.
    pub fetch: Option<mpsc::Receiver<FetchOutcome>>,

    pub calendar: CalendarState,
    pub ui: UiState,
}

impl MaintenanceTrackerApp {
    /// Create the app and kick off the one-shot record fetch.
    ///
    /// `today` determines the initially displayed month; callers pass
    /// the current local date.
    pub fn new(source: Arc<dyn MaintenanceRequestSource>, today: NaiveDate) -> Self {
        info!("🚀 Initializing MaintenanceTrackerApp");

        Self {
            calendar_service: CalendarService::new(),
            requests: Vec::new(),
            fetch: Some(data_loading::spawn_fetch(source)),
            calendar: CalendarState::new(today),
            ui: UiState::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maintenance_tracker_backend::source::MemoryRequestSource;
    use shared::{RequestPriority, RequestStage};
    use std::time::Duration;

    fn scheduled_request(id: &str, scheduled: &str) -> MaintenanceRequest {
        MaintenanceRequest {
            id: id.to_string(),
            subject: "Test".to_string(),
            equipment_id: None,
            team_id: None,
            category: None,
            company: None,
            stage: RequestStage::NewRequest,
            priority: RequestPriority::Normal,
            scheduled_date: Some(scheduled.to_string()),
            request_date: "2026-03-01T08:00:00-04:00".to_string(),
        }
    }

    fn drain_fetch(app: &mut MaintenanceTrackerApp) {
        // The worker thread resolves quickly for in-memory sources, but
        // poll in a loop rather than assuming scheduling order.
        for _ in 0..100 {
            app.poll_fetch();
            if app.fetch.is_none() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("fetch never resolved");
    }

    #[test]
    fn test_starts_with_empty_calendar_until_fetch_resolves() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let source = Arc::new(MemoryRequestSource::new(vec![scheduled_request(
            "r1",
            "2026-03-14T09:00:00-04:00",
        )]));

        let mut app = MaintenanceTrackerApp::new(source, today);
        assert!(app.requests.is_empty());

        drain_fetch(&mut app);
        assert_eq!(app.requests.len(), 1);
        assert!(app.ui.error_message.is_none());

        let month = app.calendar_service.generate_month(
            app.calendar.selected_year,
            app.calendar.selected_month,
            &app.requests,
            today,
        );
        assert_eq!(month.day(14).unwrap().requests.len(), 1);
    }

    #[test]
    fn test_failed_fetch_leaves_empty_list_and_sets_banner() {
        struct BrokenSource;

        #[async_trait::async_trait]
        impl MaintenanceRequestSource for BrokenSource {
            async fn fetch_all(&self) -> anyhow::Result<Vec<MaintenanceRequest>> {
                anyhow::bail!("record store unreachable")
            }
        }

        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let mut app = MaintenanceTrackerApp::new(Arc::new(BrokenSource), today);

        drain_fetch(&mut app);
        assert!(app.requests.is_empty());
        let banner = app.ui.error_message.as_deref().unwrap();
        assert!(banner.contains("record store unreachable"));
    }
}

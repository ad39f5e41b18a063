//! # Calendar State Module
//!
//! State for the calendar view: the displayed month/year and the
//! two-level drill-down (month grid → day's ticket list → single
//! ticket detail).
//!
//! The drill-down is a single tagged enum rather than a pair of
//! nullable selections, so a ticket can never be open without the day
//! that contains it.

use chrono::{Datelike, NaiveDate};
use shared::MaintenanceRequest;
use thiserror::Error;

/// Where the user is in the drill-down.
///
/// `TicketSelected` is only reachable through `DaySelected`; closing a
/// ticket returns to the day's list, never straight to `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrillState {
    /// Month grid only, nothing open
    Idle,
    /// A day's ticket list is open
    DaySelected { day: u32 },
    /// A single ticket's detail is open on top of its day's list
    TicketSelected { day: u32, request: MaintenanceRequest },
}

#[derive(Debug, Error, PartialEq)]
pub enum DrillStateError {
    /// A ticket cannot be opened with no day context to return to.
    #[error("no day is selected")]
    NoDaySelected,
}

/// Calendar-specific state for month navigation and drill-down.
#[derive(Debug)]
pub struct CalendarState {
    /// Currently displayed month (1-12)
    pub selected_month: u32,
    /// Currently displayed year
    pub selected_year: i32,
    pub drill: DrillState,
    /// Prevents backdrop click detection on the same frame a modal opens
    pub modal_just_opened: bool,
}

impl CalendarState {
    /// Create calendar state focused on the month of the given date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_month: today.month(),
            selected_year: today.year(),
            drill: DrillState::Idle,
            modal_just_opened: false,
        }
    }

    /// Navigate to the previous month. Unbounded; drill-down untouched.
    pub fn navigate_to_previous_month(&mut self) {
        if self.selected_month == 1 {
            self.selected_month = 12;
            self.selected_year -= 1;
        } else {
            self.selected_month -= 1;
        }
        log::info!(
            "📅 Navigated to previous month: {}/{}",
            self.selected_month,
            self.selected_year
        );
    }

    /// Navigate to the next month. Unbounded; drill-down untouched.
    pub fn navigate_to_next_month(&mut self) {
        if self.selected_month == 12 {
            self.selected_month = 1;
            self.selected_year += 1;
        } else {
            self.selected_month += 1;
        }
        log::info!(
            "📅 Navigated to next month: {}/{}",
            self.selected_month,
            self.selected_year
        );
    }

    /// Jump the displayed month back to the given date's month.
    /// Drill-down untouched.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.selected_month = today.month();
        self.selected_year = today.year();
        log::info!(
            "📅 Jumped to current month: {}/{}",
            self.selected_month,
            self.selected_year
        );
    }

    /// Open a day's ticket list. Valid from any state; clicking a cell
    /// while another day's list or a ticket is open replaces the whole
    /// selection.
    pub fn select_day(&mut self, day: u32) {
        self.drill = DrillState::DaySelected { day };
        self.modal_just_opened = true;
        log::info!("📅 Selected day: {}", day);
    }

    /// Open a ticket from the current day's list.
    ///
    /// Requires a day context: from `Idle` this is a programming
    /// contract violation and the state is left unchanged rather than a
    /// day being synthesized. While a ticket is already open it is
    /// replaced, preserving the day.
    pub fn select_ticket(&mut self, request: MaintenanceRequest) -> Result<(), DrillStateError> {
        let day = match &self.drill {
            DrillState::DaySelected { day } => *day,
            DrillState::TicketSelected { day, .. } => *day,
            DrillState::Idle => return Err(DrillStateError::NoDaySelected),
        };

        log::info!("📋 Opened ticket {} on day {}", request.id, day);
        self.drill = DrillState::TicketSelected { day, request };
        self.modal_just_opened = true;
        Ok(())
    }

    /// Close the ticket detail, returning to its day's list.
    pub fn close_ticket(&mut self) {
        match &self.drill {
            DrillState::TicketSelected { day, .. } => {
                self.drill = DrillState::DaySelected { day: *day };
            }
            _ => log::warn!("close_ticket called with no ticket open"),
        }
    }

    /// Dismiss all open layers in one step.
    pub fn close_day(&mut self) {
        self.drill = DrillState::Idle;
    }
}

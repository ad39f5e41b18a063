pub mod calendar_state;
pub mod ui_state;

pub use calendar_state::{CalendarState, DrillState, DrillStateError};
pub use ui_state::UiState;

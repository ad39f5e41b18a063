//! General UI state shared across views: error reporting and nothing
//! else for now.

#[derive(Debug, Default)]
pub struct UiState {
    /// Error banner text, shown until dismissed
    pub error_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
    }
}

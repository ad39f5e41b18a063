pub mod calendar_renderer;
pub mod header;
pub mod modals;
pub mod theme;

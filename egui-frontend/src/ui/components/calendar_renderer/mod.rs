pub mod rendering;
pub mod types;

pub use types::*;

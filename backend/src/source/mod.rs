//! # Record Source
//!
//! The calendar does not know how maintenance requests are persisted.
//! It consumes a collaborator exposing a single one-shot fetch, defined
//! here as a trait so different stores can be plugged in (a CSV file for
//! the desktop app, an in-memory list for tests).

use anyhow::Result;
use async_trait::async_trait;
use shared::MaintenanceRequest;

pub mod csv;
pub mod memory;

pub use self::csv::CsvRequestSource;
pub use self::memory::MemoryRequestSource;

/// Contract the record store collaborator exposes.
#[async_trait]
pub trait MaintenanceRequestSource: Send + Sync {
    /// Fetch the full request collection.
    ///
    /// No filtering or pagination; fails as a whole on transport error
    /// (no partial results).
    async fn fetch_all(&self) -> Result<Vec<MaintenanceRequest>>;
}

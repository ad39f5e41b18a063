//! In-memory record source for tests and programmatic use.

use anyhow::Result;
use async_trait::async_trait;
use shared::MaintenanceRequest;

use super::MaintenanceRequestSource;

#[derive(Debug, Clone, Default)]
pub struct MemoryRequestSource {
    requests: Vec<MaintenanceRequest>,
}

impl MemoryRequestSource {
    pub fn new(requests: Vec<MaintenanceRequest>) -> Self {
        Self { requests }
    }
}

#[async_trait]
impl MaintenanceRequestSource for MemoryRequestSource {
    async fn fetch_all(&self) -> Result<Vec<MaintenanceRequest>> {
        Ok(self.requests.clone())
    }
}

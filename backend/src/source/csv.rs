//! CSV-backed record source.
//!
//! Reads the full request collection from a single CSV file with the
//! columns `id,subject,equipment_id,team_id,category,company,stage,
//! priority,scheduled_date,request_date`. The file is read-only to this
//! source; writing requests back is the record store's business, not
//! the calendar's.

use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::Reader;
use log::warn;
use shared::{MaintenanceRequest, RequestPriority, RequestStage};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::MaintenanceRequestSource;

#[derive(Debug, Clone)]
pub struct CsvRequestSource {
    path: PathBuf,
}

impl CsvRequestSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_requests(&self) -> Result<Vec<MaintenanceRequest>> {
        let file = File::open(&self.path)
            .with_context(|| format!("opening request file {}", self.path.display()))?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut requests = Vec::new();

        for result in csv_reader.records() {
            let record = result.with_context(|| {
                format!("reading request record from {}", self.path.display())
            })?;

            let id = record.get(0).unwrap_or("").to_string();
            let stage_str = record.get(6).unwrap_or("");
            let stage = match RequestStage::parse(stage_str) {
                Some(stage) => stage,
                None => {
                    warn!("Unknown stage '{}' for request {}, treating as New Request", stage_str, id);
                    RequestStage::NewRequest
                }
            };
            let priority_str = record.get(7).unwrap_or("");
            let priority = match RequestPriority::parse(priority_str) {
                Some(priority) => priority,
                None => {
                    warn!("Unknown priority '{}' for request {}, treating as Normal", priority_str, id);
                    RequestPriority::Normal
                }
            };

            requests.push(MaintenanceRequest {
                id,
                subject: record.get(1).unwrap_or("").to_string(),
                equipment_id: optional_field(record.get(2)),
                team_id: optional_field(record.get(3)),
                category: optional_field(record.get(4)),
                company: optional_field(record.get(5)),
                stage,
                priority,
                scheduled_date: optional_field(record.get(8)),
                request_date: record.get(9).unwrap_or("").to_string(),
            });
        }

        Ok(requests)
    }
}

/// Blank CSV cells become None rather than empty strings.
fn optional_field(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}

#[async_trait]
impl MaintenanceRequestSource for CsvRequestSource {
    async fn fetch_all(&self) -> Result<Vec<MaintenanceRequest>> {
        self.read_requests()
    }
}

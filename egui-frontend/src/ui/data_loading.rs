//! # Data Loading Module
//!
//! Handles the one-shot maintenance-request fetch performed when the
//! app starts. The async source runs to completion on a worker thread;
//! the UI thread polls the channel each frame and keeps rendering an
//! empty calendar until the result lands.

use anyhow::Result;
use log::{error, info, warn};
use maintenance_tracker_backend::source::MaintenanceRequestSource;
use shared::MaintenanceRequest;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::ui::app_state::MaintenanceTrackerApp;

/// Result of the one-shot fetch, delivered over the channel.
pub enum FetchOutcome {
    Loaded(Vec<MaintenanceRequest>),
    Failed(String),
}

/// Spawn the one-shot fetch on a worker thread.
///
/// If the app is torn down before the source responds, the receiver is
/// dropped and the worker's send fails; the result is discarded rather
/// than cancelled.
pub fn spawn_fetch(source: Arc<dyn MaintenanceRequestSource>) -> mpsc::Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let outcome = match run_fetch(source.as_ref()) {
            Ok(requests) => FetchOutcome::Loaded(requests),
            Err(e) => FetchOutcome::Failed(format!("{:#}", e)),
        };
        let _ = tx.send(outcome);
    });

    rx
}

fn run_fetch(source: &dyn MaintenanceRequestSource) -> Result<Vec<MaintenanceRequest>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(source.fetch_all())
}

impl MaintenanceTrackerApp {
    /// Poll the fetch channel without blocking the UI thread.
    ///
    /// A failed fetch leaves the request list empty: the grid renders
    /// with zero activities until the app is restarted. No retry.
    pub fn poll_fetch(&mut self) {
        let rx = match &self.fetch {
            Some(rx) => rx,
            None => return,
        };

        match rx.try_recv() {
            Ok(FetchOutcome::Loaded(requests)) => {
                info!("📋 Loaded {} maintenance requests", requests.len());
                self.requests = requests;
                self.fetch = None;
            }
            Ok(FetchOutcome::Failed(message)) => {
                error!("Failed to load maintenance requests: {}", message);
                self.ui.error_message = Some(format!("Failed to load requests: {}", message));
                self.requests = Vec::new();
                self.fetch = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                warn!("Request fetch worker exited without a result");
                self.fetch = None;
            }
        }
    }
}

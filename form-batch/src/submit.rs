//! Batch submission
//!
//! A single spawned worker submits records in order. Each call runs inside
//! a [`SubmitGuard`] critical section. With one worker the guard protects
//! nothing; it marks where a pool of workers would serialize submissions.

use crate::client::FormApi;
use crate::error::{BatchError, BatchResult};
use crate::record::{Record, Tag};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

/// Exclusive right to have a submission in flight
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    lock: Arc<Mutex<()>>,
}

/// Held while one submission is in flight; released on drop
pub struct SubmitPermit<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other submission holds the guard
    pub async fn enter(&self) -> SubmitPermit<'_> {
        SubmitPermit {
            _guard: self.lock.lock().await,
        }
    }

    /// Whether a submission currently holds the guard
    pub fn is_held(&self) -> bool {
        self.lock.try_lock().is_err()
    }
}

/// Outcome of a batch where every record was attempted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReport {
    pub attempted: usize,
    /// Tags of records answered with 200
    pub saved: Vec<Tag>,
    /// Tags of records answered with any other status
    pub rejected: Vec<Tag>,
}

impl SubmitReport {
    pub fn all_saved(&self) -> bool {
        self.rejected.is_empty() && self.saved.len() == self.attempted
    }
}

/// Submit `records` one at a time on a spawned worker and wait for it
///
/// A transport error stops the worker before any later record is attempted.
/// Records already saved stay saved.
pub async fn submit_batch<A>(
    api: Arc<A>,
    records: Vec<Record>,
    guard: SubmitGuard,
) -> BatchResult<SubmitReport>
where
    A: FormApi + ?Sized + 'static,
{
    let total = records.len();
    info!(total, "Submitting batch");

    let worker = tokio::spawn(async move {
        let mut report = SubmitReport::default();
        for record in &records {
            let permit = guard.enter().await;
            report.attempted += 1;
            let saved = api.save_form(record).await.map_err(|e| {
                error!(tag = %record.tag(), error = %e, "Submission failed, aborting batch");
                BatchError::from(e)
            })?;
            drop(permit);

            if saved {
                println!("Record saved successfully: {}", record);
                report.saved.push(record.tag());
            } else {
                report.rejected.push(record.tag());
            }
        }
        Ok::<_, BatchError>(report)
    });

    let report = worker
        .await
        .map_err(|e| BatchError::Worker(e.to_string()))??;

    if report.rejected.is_empty() {
        info!(saved = report.saved.len(), "Batch submitted");
    } else {
        warn!(
            saved = report.saved.len(),
            rejected = report.rejected.len(),
            "Batch submitted with rejected records"
        );
    }
    Ok(report)
}

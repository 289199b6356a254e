//! One full run: build, submit, read back, verify

use crate::client::FormApi;
use crate::error::BatchResult;
use crate::record::{Batch, RecordTemplate};
use crate::submit::{SubmitGuard, SubmitReport, submit_batch};
use crate::verify::{Verification, scan_rows};
use rand::Rng;
use std::sync::Arc;
use tracing::{info, warn};

/// Confirmation printed when every submitted record is found again
pub const CONFIRMATION: &str = "All entries are successfully saved.";

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub submit: SubmitReport,
    pub verification: Verification,
}

/// Run one batch against `api`
///
/// Returns `Incomplete` when the read-back finds fewer entries than were
/// submitted; the confirmation is printed only on a complete match.
pub async fn run_batch<A, R>(
    api: Arc<A>,
    template: &RecordTemplate,
    size: usize,
    rng: &mut R,
) -> BatchResult<RunSummary>
where
    A: FormApi + ?Sized + 'static,
    R: Rng,
{
    let batch = Batch::build(template, size, rng);
    let Some(query) = batch.first().map(|r| r.query()) else {
        warn!("Empty batch, nothing to submit");
        return Ok(RunSummary {
            submit: SubmitReport::default(),
            verification: Verification {
                matched: 0,
                expected: 0,
                rows_scanned: 0,
            },
        });
    };
    let expected = batch.expected_comments();

    let submit = submit_batch(api.clone(), batch.into_records(), SubmitGuard::new()).await?;

    let response = api.fetch_forms(&query).await?;
    info!(rows = response.rows().len(), "Fetched saved records");

    let verification = scan_rows(response.rows(), &expected);
    if verification.is_complete() {
        println!("{}", CONFIRMATION);
    } else {
        warn!(
            matched = verification.matched,
            expected = verification.expected,
            "Not all submitted entries were found"
        );
    }

    let verification = verification.into_result()?;
    Ok(RunSummary {
        submit,
        verification,
    })
}


//! Batch controller: run every entry in order, isolating failures.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::job;
use crate::domain::{BatchEntry, BatchRunReport, RowOutcome};
use crate::ports::{ArtifactStore, DocumentCompiler, GenerationClient, SourceReader};

/// Run each entry through the job runner, strictly in input order.
///
/// A failing row is recorded and the loop moves on; no error escapes.
/// `on_outcome` observes each row as soon as it finishes.
pub fn execute<S, G, C, A, F>(
    ctx: &AppContext<S, G, C, A>,
    entries: impl IntoIterator<Item = BatchEntry>,
    mut on_outcome: F,
) -> BatchRunReport
where
    S: SourceReader,
    G: GenerationClient,
    C: DocumentCompiler,
    A: ArtifactStore,
    F: FnMut(&RowOutcome),
{
    let mut report = BatchRunReport::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let row = index + 1;
        let result = entry.spec.and_then(|spec| job::execute(ctx, &spec));

        let outcome = match result {
            Ok(artifacts) => {
                info!(row, job = %entry.label, "Batch row succeeded");
                RowOutcome::succeeded(row, entry.label, artifacts)
            }
            Err(err) => {
                warn!(row, job = %entry.label, kind = %err.kind(), "Batch row failed");
                RowOutcome::failed(row, entry.label, &err)
            }
        };

        on_outcome(&outcome);
        report.push(outcome);
    }

    report
}

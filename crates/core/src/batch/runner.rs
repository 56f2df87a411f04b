//! Batch runner implementation.

use tracing::{error, info, warn};

use crate::config::DuplicateMode;
use crate::extract::{Extraction, FieldExtractor};
use crate::pacer::Pacer;
use crate::portal::StatusPortal;
use crate::progress::{ProgressReport, ProgressSink};
use crate::records::{CaseIdentifier, LookupResult, ResultWriter};

use super::types::{BatchError, BatchSummary, SeenSet};

/// Drives identifiers through fetch, extract and write, one at a time.
///
/// The portal session is borrowed for the whole run and never re-created.
pub struct BatchRunner<'a, P: StatusPortal + ?Sized> {
    portal: &'a P,
    extractor: FieldExtractor,
    writer: ResultWriter,
    pacer: Pacer,
    seen: SeenSet,
}

impl<'a, P: StatusPortal + ?Sized> BatchRunner<'a, P> {
    pub fn new(
        portal: &'a P,
        extractor: FieldExtractor,
        writer: ResultWriter,
        pacer: Pacer,
        duplicates: DuplicateMode,
    ) -> Self {
        Self {
            portal,
            extractor,
            writer,
            pacer,
            seen: SeenSet::new(duplicates),
        }
    }

    /// Process every identifier in order, writing exactly one record each.
    ///
    /// Stops at the first fetch or write failure; records already written stay.
    pub async fn run(
        &mut self,
        identifiers: &[CaseIdentifier],
        progress: &mut dyn ProgressSink,
    ) -> Result<BatchSummary, BatchError> {
        let total = identifiers.len();
        let mut summary = BatchSummary::default();

        info!(
            total = total,
            output = %self.writer.path().display(),
            "Starting batch lookup"
        );
        progress.begin(total);

        for (index, identifier) in identifiers.iter().enumerate() {
            let line = index + 1;

            let result = if self.seen.contains(identifier) {
                warn!(identifier = %identifier, line = line, "Repeated identifier, not looked up");
                progress.duplicate(identifier);
                summary.duplicates += 1;
                LookupResult::already_seen(identifier.clone())
            } else {
                self.lookup(identifier, line, &mut summary).await?
            };

            self.writer
                .append(&result)
                .map_err(|source| BatchError::Write {
                    identifier: identifier.clone(),
                    line,
                    source,
                })?;
            summary.processed += 1;

            progress.item_done(&ProgressReport::compute(line, total, self.pacer.pacing()));

            if line < total {
                self.pacer.pause(progress).await;
            }
        }

        progress.finish();
        info!(
            processed = summary.processed,
            found = summary.found,
            not_found = summary.not_found,
            duplicates = summary.duplicates,
            "Batch lookup complete"
        );

        Ok(summary)
    }

    /// Fetch and extract one identifier. Only a found status marks it as seen.
    async fn lookup(
        &mut self,
        identifier: &CaseIdentifier,
        line: usize,
        summary: &mut BatchSummary,
    ) -> Result<LookupResult, BatchError> {
        let page = match self.portal.fetch_status(identifier).await {
            Ok(page) => page,
            Err(source) => {
                error!(
                    identifier = %identifier,
                    line = line,
                    error = %source,
                    "Status fetch failed; rerun from this line to resume"
                );
                return Err(BatchError::Fetch {
                    identifier: identifier.clone(),
                    line,
                    source,
                });
            }
        };

        let extraction = self.extractor.extract(&page);
        if matches!(extraction, Extraction::Status { .. }) {
            summary.found += 1;
            self.seen.record(identifier);
        } else {
            summary.not_found += 1;
        }

        Ok(self.extractor.result_for(identifier.clone(), extraction))
    }
}

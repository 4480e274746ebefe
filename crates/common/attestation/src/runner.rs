use auditor_api_types::attestation::{AttestationRecord, ClassifiedAttestation};
use auditor_explorer_client::explorer::ExplorerApi;
use futures::{StreamExt, stream};
use tracing::info;

use crate::classifier::{AttestationClassifier, ClassificationResult};

/// Validators processed concurrently by default.
pub const DEFAULT_WORKERS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub workers: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Totals across every validator of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateReport {
    pub total_attestations: usize,
    pub missed_attestations: Vec<ClassifiedAttestation>,
    pub late_attestations: Vec<ClassifiedAttestation>,
    pub missed_with_missed_block: usize,
    pub late_with_missed_block: usize,
    pub indeterminate_block_lookups: usize,
    pub validators_processed: usize,
    pub validators_skipped: usize,
}

impl AggregateReport {
    pub fn accumulate(&mut self, result: ClassificationResult) {
        self.validators_processed += 1;
        self.total_attestations += result.attestation_count;
        self.indeterminate_block_lookups += result.indeterminate_block_lookups;
        self.missed_with_missed_block += count_missed_blocks(&result.missed_attestations);
        self.late_with_missed_block += count_missed_blocks(&result.late_attestations);
        self.missed_attestations.extend(result.missed_attestations);
        self.late_attestations.extend(result.late_attestations);
    }

    pub fn skip(&mut self) {
        self.validators_skipped += 1;
    }
}

fn count_missed_blocks(attestations: &[ClassifiedAttestation]) -> usize {
    attestations
        .iter()
        .filter(|attestation| attestation.block_missed)
        .count()
}

/// Runs the classifier over a list of validators, `workers` at a time.
///
/// Results are folded in input order regardless of the number of workers.
pub struct BatchRunner<A> {
    classifier: AttestationClassifier<A>,
    config: RunnerConfig,
}

impl<A: ExplorerApi> BatchRunner<A> {
    pub fn new(classifier: AttestationClassifier<A>, config: RunnerConfig) -> Self {
        Self { classifier, config }
    }

    fn workers(&self) -> usize {
        self.config.workers.max(1)
    }

    /// Included attestations of `epoch` for every validator in `validator_indexes`.
    pub async fn epoch_attestations(
        &self,
        validator_indexes: &[u64],
        epoch: u64,
    ) -> Vec<AttestationRecord> {
        let results: Vec<_> = stream::iter(validator_indexes)
            .map(|validator_index| self.classifier.epoch_attestations(*validator_index, epoch))
            .buffered(self.workers())
            .collect()
            .await;

        let attestations: Vec<_> = results.into_iter().flatten().flatten().collect();
        info!(
            "Found {} included attestations for epoch {epoch} across {} validators",
            attestations.len(),
            validator_indexes.len()
        );
        attestations
    }

    pub async fn missed_and_late(&self, validator_indexes: &[u64]) -> AggregateReport {
        let results: Vec<_> = stream::iter(validator_indexes)
            .map(|validator_index| self.classifier.missed_and_late(*validator_index))
            .buffered(self.workers())
            .collect()
            .await;

        let mut report = AggregateReport::default();
        for result in results {
            match result {
                Some(result) => report.accumulate(result),
                None => report.skip(),
            }
        }

        info!(
            "Processed {} validators ({} skipped): {} attestations, {} missed, {} late",
            report.validators_processed,
            report.validators_skipped,
            report.total_attestations,
            report.missed_attestations.len(),
            report.late_attestations.len()
        );
        report
    }
}

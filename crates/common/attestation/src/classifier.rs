use auditor_api_types::attestation::{
    AttestationRecord, AttestationStatus, ClassifiedAttestation,
};
use auditor_explorer_client::explorer::ExplorerApi;
use tracing::{error, info, warn};

use crate::LATE_ATT_INCLUSION_DELAY;

/// What to assume about the block at N + 1 when the slot lookup itself fails.
///
/// A failed lookup says nothing about the chain, so the choice is recorded and every such
/// lookup is counted in [`ClassificationResult::indeterminate_block_lookups`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotErrorPolicy {
    #[default]
    AssumeMissed,
    AssumeProposed,
}

impl SlotErrorPolicy {
    pub fn block_missed(&self) -> bool {
        matches!(self, SlotErrorPolicy::AssumeMissed)
    }
}

/// Missed and late attestations of one validator. On-time attestations only count towards
/// `attestation_count`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassificationResult {
    pub attestation_count: usize,
    pub missed_attestations: Vec<ClassifiedAttestation>,
    pub late_attestations: Vec<ClassifiedAttestation>,
    pub indeterminate_block_lookups: usize,
}

/// The most recent epoch in `attestations`. Its duties may not be finalized yet.
pub fn pending_epoch(attestations: &[AttestationRecord]) -> Option<u64> {
    attestations.iter().map(|attestation| attestation.epoch).max()
}

/// Attestations of `epoch` that made it on chain.
pub fn included_in_epoch(
    attestations: Vec<AttestationRecord>,
    epoch: u64,
) -> Vec<AttestationRecord> {
    attestations
        .into_iter()
        .filter(|attestation| attestation.epoch == epoch && attestation.is_included())
        .collect()
}

/// Whether an attestation included `inclusion_delay` slots late counts as late.
///
/// A missed block at N + 1 is not held against the attester: no attestation can be included
/// in a slot without a block, so one slot is taken off the delay.
pub fn is_late(inclusion_delay: u64, block_missed: bool) -> bool {
    let optimal_inclusion_delay = if block_missed {
        inclusion_delay.saturating_sub(1)
    } else {
        inclusion_delay
    };
    optimal_inclusion_delay >= LATE_ATT_INCLUSION_DELAY
}

pub struct AttestationClassifier<A> {
    api: A,
    slot_error_policy: SlotErrorPolicy,
}

impl<A: ExplorerApi> AttestationClassifier<A> {
    pub fn new(api: A, slot_error_policy: SlotErrorPolicy) -> Self {
        Self {
            api,
            slot_error_policy,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    async fn fetch_attestations(&self, validator_index: u64) -> Option<Vec<AttestationRecord>> {
        info!("Processing validator index: {validator_index}");
        match self.api.get_validator_attestations(validator_index).await {
            Ok(attestations) => Some(attestations),
            Err(err) => {
                error!("Failed to fetch validator attestations: {err}");
                None
            }
        }
    }

    /// Attestations of `validator_index` included for `epoch`.
    ///
    /// Returns `None` if the attestation history could not be fetched.
    pub async fn epoch_attestations(
        &self,
        validator_index: u64,
        epoch: u64,
    ) -> Option<Vec<AttestationRecord>> {
        let attestations = self.fetch_attestations(validator_index).await?;
        Some(included_in_epoch(attestations, epoch))
    }

    /// Missed and late attestations over the history the explorer keeps for
    /// `validator_index`.
    ///
    /// Returns `None` if the attestation history could not be fetched.
    pub async fn missed_and_late(&self, validator_index: u64) -> Option<ClassificationResult> {
        let attestations = self.fetch_attestations(validator_index).await?;
        Some(self.classify(attestations).await)
    }

    pub async fn classify(&self, attestations: Vec<AttestationRecord>) -> ClassificationResult {
        let mut result = ClassificationResult {
            attestation_count: attestations.len(),
            ..Default::default()
        };
        let pending_epoch = pending_epoch(&attestations);

        for attestation in attestations {
            if attestation.status == AttestationStatus::Missed
                && Some(attestation.epoch) != pending_epoch
            {
                let block_missed = self.block_missed(&attestation, &mut result).await;
                result
                    .missed_attestations
                    .push(ClassifiedAttestation::new(attestation, block_missed));
            } else if let Some(inclusion_delay) = attestation
                .inclusion_delay()
                .filter(|delay| *delay >= LATE_ATT_INCLUSION_DELAY)
            {
                let block_missed = self.block_missed(&attestation, &mut result).await;
                if is_late(inclusion_delay, block_missed) {
                    result
                        .late_attestations
                        .push(ClassifiedAttestation::new(attestation, block_missed));
                }
            }
        }

        result
    }

    async fn block_missed(
        &self,
        attestation: &AttestationRecord,
        result: &mut ClassificationResult,
    ) -> bool {
        let slot = attestation.next_slot();
        match self.api.get_slot(slot).await {
            Ok(lookup) => lookup.block_missed(),
            Err(err) => {
                result.indeterminate_block_lookups += 1;
                warn!(
                    "Failed to fetch slot {slot} details: {err}. Assuming block missed: {}",
                    self.slot_error_policy.block_missed()
                );
                self.slot_error_policy.block_missed()
            }
        }
    }
}

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use anyhow::anyhow;
use async_trait::async_trait;
use auditor_api_types::{
    attestation::{AttestationRecord, AttestationStatus},
    error::ExplorerError,
    slot::{SlotLookup, SlotStatus},
};
use auditor_explorer_client::explorer::ExplorerApi;

/// In-memory explorer. Slots are proposed unless marked missed or failing.
#[derive(Debug, Default)]
pub struct MockExplorer {
    attestations: HashMap<u64, Vec<AttestationRecord>>,
    failing_validators: HashSet<u64>,
    missed_slots: HashSet<u64>,
    failing_slots: HashSet<u64>,
    slot_requests: Mutex<Vec<u64>>,
}

impl MockExplorer {
    pub fn with_attestations(
        mut self,
        validator_index: u64,
        records: Vec<AttestationRecord>,
    ) -> Self {
        self.attestations.insert(validator_index, records);
        self
    }

    pub fn with_failing_validator(mut self, validator_index: u64) -> Self {
        self.failing_validators.insert(validator_index);
        self
    }

    pub fn with_missed_slot(mut self, slot: u64) -> Self {
        self.missed_slots.insert(slot);
        self
    }

    pub fn with_failing_slot(mut self, slot: u64) -> Self {
        self.failing_slots.insert(slot);
        self
    }

    pub fn slot_requests(&self) -> Vec<u64> {
        self.slot_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ExplorerApi for MockExplorer {
    async fn get_validator_attestations(
        &self,
        validator_index: u64,
    ) -> Result<Vec<AttestationRecord>, ExplorerError> {
        if self.failing_validators.contains(&validator_index) {
            return Err(ExplorerError::Anyhow(anyhow!(
                "validator {validator_index} unavailable"
            )));
        }
        Ok(self
            .attestations
            .get(&validator_index)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_slot(&self, slot: u64) -> Result<SlotLookup, ExplorerError> {
        if let Ok(mut requests) = self.slot_requests.lock() {
            requests.push(slot);
        }
        if self.failing_slots.contains(&slot) {
            return Err(ExplorerError::Anyhow(anyhow!("slot {slot} unavailable")));
        }
        if self.missed_slots.contains(&slot) {
            return Ok(SlotLookup::NotFound);
        }
        Ok(SlotLookup::Found(SlotStatus {
            slot,
            status: "OK".to_string(),
        }))
    }
}

pub fn attestation(
    validator_index: u64,
    epoch: u64,
    attester_slot: u64,
    inclusion_slot: u64,
) -> AttestationRecord {
    let status = if inclusion_slot == 0 {
        AttestationStatus::Missed
    } else {
        AttestationStatus::Included
    };
    AttestationRecord::new(validator_index, epoch, attester_slot, inclusion_slot, status)
}

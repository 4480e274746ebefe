use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttestationStatus {
    Missed,
    Included,
    /// Any status code the explorer reports that is neither missed nor included, e.g. pending.
    Other(u8),
}

impl AttestationStatus {
    pub fn code(&self) -> u8 {
        match self {
            AttestationStatus::Missed => 0,
            AttestationStatus::Included => 1,
            AttestationStatus::Other(code) => *code,
        }
    }
}

impl From<u8> for AttestationStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => AttestationStatus::Missed,
            1 => AttestationStatus::Included,
            other => AttestationStatus::Other(other),
        }
    }
}

impl Serialize for AttestationStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for AttestationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u8::deserialize(deserializer).map(AttestationStatus::from)
    }
}

/// A single attestation duty as reported by the explorer's
/// `/api/v1/validator/{index}/attestations` endpoint.
///
/// # Example
/// {
///   "attesterslot": 7612766,
///   "committeeindex": 12,
///   "epoch": 237898,
///   "inclusionslot": 7612767,
///   "status": 1,
///   "validatorindex": 1234,
///   "week": 3397,
///   "week_start": "2023-10-23T00:00:00Z",
///   "week_end": "2023-10-30T00:00:00Z"
/// }
///
/// Fields not modelled here are kept in `extra` so reports mirror the upstream record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttestationRecord {
    #[serde(rename = "validatorindex")]
    pub validator_index: u64,
    pub epoch: u64,
    #[serde(rename = "attesterslot")]
    pub attester_slot: u64,
    /// Zero when the attestation was never included on chain.
    #[serde(rename = "inclusionslot")]
    pub inclusion_slot: u64,
    pub status: AttestationStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttestationRecord {
    pub fn new(
        validator_index: u64,
        epoch: u64,
        attester_slot: u64,
        inclusion_slot: u64,
        status: AttestationStatus,
    ) -> Self {
        Self {
            validator_index,
            epoch,
            attester_slot,
            inclusion_slot,
            status,
            extra: Map::new(),
        }
    }

    pub fn is_included(&self) -> bool {
        self.status == AttestationStatus::Included
    }

    /// Slots between the earliest possible inclusion (`attester_slot + 1`) and the actual one.
    ///
    /// Returns `None` if the attestation was not included.
    pub fn inclusion_delay(&self) -> Option<u64> {
        if self.inclusion_slot == 0 || self.inclusion_slot <= self.attester_slot {
            return None;
        }
        Some(self.inclusion_slot - self.attester_slot - 1)
    }

    /// The slot whose proposal would have been the first chance to include this attestation.
    pub fn next_slot(&self) -> u64 {
        self.attester_slot + 1
    }
}

/// An attestation annotated with whether the block at `attester_slot + 1` was missed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedAttestation {
    #[serde(flatten)]
    pub record: AttestationRecord,
    #[serde(rename = "blockMissed")]
    pub block_missed: bool,
}

impl ClassifiedAttestation {
    pub fn new(record: AttestationRecord, block_missed: bool) -> Self {
        Self {
            record,
            block_missed,
        }
    }
}

use serde_json::Value;

use crate::responses::StatusResponse;

/// Body status the explorer answers with when it has no block for the requested slot.
pub const SLOT_NOT_FOUND_STATUS: &str = "ERROR: could not retrieve db results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotStatus {
    pub slot: u64,
    pub status: String,
}

/// Outcome of probing a slot on the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotLookup {
    Found(SlotStatus),
    NotFound,
}

impl SlotLookup {
    pub fn from_response(slot: u64, response: StatusResponse<Value>) -> Self {
        if response.status == SLOT_NOT_FOUND_STATUS {
            return SlotLookup::NotFound;
        }
        SlotLookup::Found(SlotStatus {
            slot,
            status: response.status,
        })
    }

    pub fn block_missed(&self) -> bool {
        matches!(self, SlotLookup::NotFound)
    }
}

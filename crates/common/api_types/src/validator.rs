use serde::{Deserialize, Serialize};

use crate::pubkey::ValidatorPubkey;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidatorID {
    Index(u64),
    /// expected to be a 0x-prefixed hex string.
    Pubkey(ValidatorPubkey),
}

impl Serialize for ValidatorID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ValidatorID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.starts_with("0x") {
            s.parse::<ValidatorPubkey>()
                .map(ValidatorID::Pubkey)
                .map_err(serde::de::Error::custom)
        } else if s.chars().all(|c| c.is_ascii_digit()) {
            s.parse::<u64>()
                .map(ValidatorID::Index)
                .map_err(|_| serde::de::Error::custom(format!("Invalid validator index: {s}")))
        } else {
            Err(serde::de::Error::custom(format!(
                "Invalid validator ID: {s}"
            )))
        }
    }
}

impl std::fmt::Display for ValidatorID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidatorID::Index(i) => write!(f, "{i}"),
            ValidatorID::Pubkey(pubkey) => write!(f, "{pubkey}"),
        }
    }
}

/// Entry of the beacon node `/eth/v1/beacon/states/{state_id}/validators` response.
///
/// Only the index is read; the remaining fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorData {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::responses::DataResponse;

    #[test]
    fn test_validators_response_reads_quoted_indexes() -> anyhow::Result<()> {
        let response: DataResponse<Vec<ValidatorData>> = serde_json::from_value(json!({
            "execution_optimistic": false,
            "finalized": false,
            "data": [
                { "index": "1", "balance": "32000000000", "status": "active_ongoing" },
                { "index": "42", "balance": "32000000000", "status": "active_ongoing" }
            ]
        }))?;

        let indexes: Vec<u64> = response.data.iter().map(|data| data.index).collect();
        assert_eq!(indexes, vec![1, 42]);
        Ok(())
    }

    #[test]
    fn test_validator_id_round_trip() -> anyhow::Result<()> {
        let id: ValidatorID = serde_json::from_value(json!("1234"))?;
        assert_eq!(id, ValidatorID::Index(1234));
        assert_eq!(serde_json::to_value(&id)?, json!("1234"));
        assert!(serde_json::from_value::<ValidatorID>(json!("12ab")).is_err());
        Ok(())
    }
}

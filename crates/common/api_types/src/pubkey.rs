use std::{fmt, str::FromStr};

use alloy_primitives::FixedBytes;
use serde::{Deserialize, Serialize};

pub const PUBKEY_BYTES_LEN: usize = 48;

/// A BLS validator public key, rendered as a 0x-prefixed hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatorPubkey(pub FixedBytes<PUBKEY_BYTES_LEN>);

impl FromStr for ValidatorPubkey {
    type Err = String;

    /// Accepts the key with or without the `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        FixedBytes::<PUBKEY_BYTES_LEN>::from_str(hex)
            .map(ValidatorPubkey)
            .map_err(|err| format!("Invalid validator pubkey {s}: {err}"))
    }
}

impl fmt::Display for ValidatorPubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

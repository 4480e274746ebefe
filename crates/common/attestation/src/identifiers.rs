use std::{fs, path::Path, str::FromStr};

use anyhow::Context;
use auditor_api_types::pubkey::ValidatorPubkey;
use tracing::warn;

/// Trimmed, non-empty lines of `contents`.
pub fn parse_lines(contents: &str) -> Vec<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn read_identifier_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parses one validator index per line. Lines that are not an index are logged and skipped.
pub fn parse_validator_indexes(contents: &str) -> Vec<u64> {
    parse_each(contents, "validator index")
}

/// Parses one validator pubkey per line, with or without the `0x` prefix.
pub fn parse_validator_pubkeys(contents: &str) -> Vec<ValidatorPubkey> {
    parse_each(contents, "validator pubkey")
}

fn parse_each<T: FromStr>(contents: &str, kind: &str) -> Vec<T> {
    parse_lines(contents)
        .into_iter()
        .filter_map(|line| match line.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Skipping invalid {kind}: {line}");
                None
            }
        })
        .collect()
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use auditor_api_types::attestation::{AttestationRecord, ClassifiedAttestation};
use auditor_attestation::{classifier::SlotErrorPolicy, runner::AggregateReport};
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use tracing::info;

use crate::{
    ATTESTATIONS_FILE_NAME, LATE_ATTESTATIONS_FILE_NAME, MISSED_ATTESTATIONS_FILE_NAME,
    SUMMARY_FILE_NAME, summary::create_summary_markdown,
};

/// Name of the directory a survey run started at `started_at` writes to, e.g.
/// `2024-03-01T12-30-00`.
pub fn run_directory_name(started_at: DateTime<Utc>) -> String {
    started_at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn read_attestations(path: &Path) -> anyhow::Result<Vec<ClassifiedAttestation>> {
    read_json(path)
}

/// Writes one validator index per line, creating the parent directory if needed.
pub fn write_index_list(path: &Path, indexes: &[u64]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let contents: String = indexes.iter().map(|index| format!("{index}\n")).collect();
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Lays out run artifacts below a common output directory.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn create_run_directory(&self, name: &str) -> anyhow::Result<PathBuf> {
        let directory = self.output_dir.join(name);
        fs::create_dir_all(&directory)
            .with_context(|| format!("Failed to create {}", directory.display()))?;
        Ok(directory)
    }

    /// Writes `attestations-epoch-<epoch>/attestations.json` and returns the run directory.
    pub fn write_epoch_attestations(
        &self,
        epoch: u64,
        attestations: &[AttestationRecord],
    ) -> anyhow::Result<PathBuf> {
        let directory = self.create_run_directory(&format!("attestations-epoch-{epoch}"))?;
        write_json(&directory.join(ATTESTATIONS_FILE_NAME), attestations)?;
        info!("Wrote {} attestations", attestations.len());
        Ok(directory)
    }

    /// Writes the missed and late attestation lists and the Markdown summary of `report`
    /// into a directory named after `started_at`, and returns that directory.
    pub fn write_missed_and_late(
        &self,
        report: &AggregateReport,
        slot_error_policy: SlotErrorPolicy,
        started_at: DateTime<Utc>,
    ) -> anyhow::Result<PathBuf> {
        let directory = self.create_run_directory(&run_directory_name(started_at))?;

        write_json(
            &directory.join(LATE_ATTESTATIONS_FILE_NAME),
            &report.late_attestations,
        )?;
        write_json(
            &directory.join(MISSED_ATTESTATIONS_FILE_NAME),
            &report.missed_attestations,
        )?;

        let summary = create_summary_markdown(report, slot_error_policy);
        let summary_path = directory.join(SUMMARY_FILE_NAME);
        fs::write(&summary_path, summary)
            .with_context(|| format!("Failed to write {}", summary_path.display()))?;

        Ok(directory)
    }
}

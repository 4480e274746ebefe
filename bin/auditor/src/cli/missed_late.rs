use std::path::PathBuf;

use auditor_attestation::{classifier::SlotErrorPolicy, runner::DEFAULT_WORKERS};
use clap::Parser;

use crate::cli::explorer::ExplorerArgs;

#[derive(Debug, Parser)]
pub struct MissedLateConfig {
    #[arg(help = "File with one validator index per line")]
    pub validator_index_file: PathBuf,

    #[command(flatten)]
    pub explorer: ExplorerArgs,

    #[arg(long, help = "Number of validators processed concurrently", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    #[arg(
        long,
        help = "Treat the N + 1 block as proposed when its slot can not be fetched. By default it is treated as missed"
    )]
    pub assume_proposed_on_slot_error: bool,
}

impl MissedLateConfig {
    pub fn slot_error_policy(&self) -> SlotErrorPolicy {
        if self.assume_proposed_on_slot_error {
            SlotErrorPolicy::AssumeProposed
        } else {
            SlotErrorPolicy::AssumeMissed
        }
    }
}

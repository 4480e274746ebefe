use std::path::PathBuf;

use auditor_attestation::runner::DEFAULT_WORKERS;
use clap::Parser;

use crate::cli::explorer::ExplorerArgs;

#[derive(Debug, Parser)]
pub struct EpochAttestationsConfig {
    #[arg(help = "File with one validator index per line")]
    pub validator_index_file: PathBuf,

    #[arg(help = "The epoch to collect included attestations for")]
    pub epoch: u64,

    #[command(flatten)]
    pub explorer: ExplorerArgs,

    #[arg(long, help = "Number of validators processed concurrently", default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,
}

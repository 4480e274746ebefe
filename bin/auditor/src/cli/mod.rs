pub mod constants;
pub mod epoch_attestations;
pub mod explorer;
pub mod missed_late;
pub mod pubkeys_to_indexes;
pub mod verbosity;

use clap::{Parser, Subcommand};

use crate::cli::{
    constants::DEFAULT_VERBOSITY,
    epoch_attestations::EpochAttestationsConfig,
    missed_late::MissedLateConfig,
    pubkeys_to_indexes::PubkeysToIndexesConfig,
    verbosity::{Verbosity, verbosity_parser},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (1=error, 2=warn, 3=info, 4=debug, 5=trace)
    #[arg(short, long, global = true, default_value = DEFAULT_VERBOSITY, value_parser = verbosity_parser)]
    pub verbosity: Verbosity,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Collect the attestations of each validator that were included for one epoch
    #[command(name = "epoch-attestations")]
    EpochAttestations(EpochAttestationsConfig),

    /// Report missed and late attestations over the explorer's attestation history
    #[command(name = "missed-late")]
    MissedLate(MissedLateConfig),

    /// Resolve validator pubkeys to validator indexes
    #[command(name = "pubkeys-to-indexes")]
    PubkeysToIndexes(PubkeysToIndexesConfig),
}

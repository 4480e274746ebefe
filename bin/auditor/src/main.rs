use std::{path::Path, process};

use auditor::cli::{
    Cli, Commands, epoch_attestations::EpochAttestationsConfig, missed_late::MissedLateConfig,
    pubkeys_to_indexes::PubkeysToIndexesConfig, verbosity::Verbosity,
};
use auditor_api_types::validator::ValidatorID;
use auditor_attestation::{
    classifier::{AttestationClassifier, SlotErrorPolicy},
    identifiers::{parse_validator_indexes, parse_validator_pubkeys, read_identifier_file},
    runner::{BatchRunner, RunnerConfig},
};
use auditor_explorer_client::beacon::BeaconApiClient;
use auditor_report::writer::{ReportWriter, write_index_list};
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn setup_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbosity);

    let result = match cli.command {
        Commands::EpochAttestations(config) => run_epoch_attestations(config).await,
        Commands::MissedLate(config) => run_missed_late(config).await,
        Commands::PubkeysToIndexes(config) => run_pubkeys_to_indexes(config).await,
    };

    if let Err(err) = result {
        error!("An error occurred: {err:#}");
        process::exit(1);
    }
}

fn read_validator_indexes(path: &Path) -> anyhow::Result<Vec<u64>> {
    let validator_indexes = parse_validator_indexes(&read_identifier_file(path)?);
    info!(
        "Loaded {} validator indexes from {}",
        validator_indexes.len(),
        path.display()
    );
    Ok(validator_indexes)
}

async fn run_epoch_attestations(config: EpochAttestationsConfig) -> anyhow::Result<()> {
    let validator_indexes = read_validator_indexes(&config.validator_index_file)?;

    let runner = BatchRunner::new(
        AttestationClassifier::new(config.explorer.client()?, SlotErrorPolicy::default()),
        RunnerConfig {
            workers: config.workers,
        },
    );
    let attestations = runner
        .epoch_attestations(&validator_indexes, config.epoch)
        .await;

    let directory = ReportWriter::new(&config.explorer.output_dir)
        .write_epoch_attestations(config.epoch, &attestations)?;

    info!(
        "Process finished. Check the \"{}\" directory for results",
        directory.display()
    );
    Ok(())
}

async fn run_missed_late(config: MissedLateConfig) -> anyhow::Result<()> {
    let started_at = Utc::now();
    let validator_indexes = read_validator_indexes(&config.validator_index_file)?;
    let slot_error_policy = config.slot_error_policy();

    let runner = BatchRunner::new(
        AttestationClassifier::new(config.explorer.client()?, slot_error_policy),
        RunnerConfig {
            workers: config.workers,
        },
    );
    let report = runner.missed_and_late(&validator_indexes).await;

    let directory = ReportWriter::new(&config.explorer.output_dir).write_missed_and_late(
        &report,
        slot_error_policy,
        started_at,
    )?;

    info!(
        "Process finished. Check the \"{}\" directory for results",
        directory.display()
    );
    Ok(())
}

async fn run_pubkeys_to_indexes(config: PubkeysToIndexesConfig) -> anyhow::Result<()> {
    let pubkeys = parse_validator_pubkeys(&read_identifier_file(&config.pubkey_file)?);
    info!("Resolving {} validator pubkeys", pubkeys.len());

    let client = BeaconApiClient::new(config.beacon_api_endpoint, config.request_timeout)?;
    let validators = client
        .get_state_validator_list(
            &config.state_id,
            pubkeys.into_iter().map(ValidatorID::Pubkey).collect(),
        )
        .await?;

    let indexes: Vec<u64> = validators.iter().map(|validator| validator.index).collect();
    write_index_list(&config.output_file, &indexes)?;

    info!(
        "Validator indexes saved to {}",
        config.output_file.display()
    );
    Ok(())
}

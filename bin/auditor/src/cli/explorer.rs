use std::{path::PathBuf, time::Duration};

use auditor_explorer_client::{
    MAX_REQUESTS_COUNT, RETRY_DELAY, explorer::ExplorerApiClient, gate::RequestGate,
    retry::RetryPolicy,
};
use clap::Args;
use url::Url;

use crate::cli::constants::{
    DEFAULT_EXPLORER_API_ENDPOINT, DEFAULT_OUTPUT_DIR, DEFAULT_REQUEST_TIMEOUT,
};

/// Connection settings shared by the commands that query the explorer.
#[derive(Debug, Args)]
pub struct ExplorerArgs {
    #[arg(long, help = "Set HTTP url of the explorer api endpoint", default_value = DEFAULT_EXPLORER_API_ENDPOINT)]
    pub explorer_api_endpoint: Url,

    #[arg(long, help = "Set HTTP request timeout for explorer api calls", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "Seconds to wait before resubmitting a rate limited request", default_value_t = RETRY_DELAY.as_secs())]
    pub retry_delay: u64,

    #[arg(
        long,
        help = "Give up on a request after this many rate limited retries. Retries forever if unset"
    )]
    pub max_retries: Option<u32>,

    #[arg(long, help = "Maximum number of explorer requests in flight", default_value_t = MAX_REQUESTS_COUNT)]
    pub max_in_flight: usize,

    #[arg(long, help = "The directory run results are written to", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl ExplorerArgs {
    pub fn retry_policy(&self) -> RetryPolicy {
        let policy = RetryPolicy::fixed(Duration::from_secs(self.retry_delay));
        match self.max_retries {
            Some(max_retries) => policy.with_max_attempts(max_retries.saturating_add(1)),
            None => policy,
        }
    }

    pub fn client(&self) -> anyhow::Result<ExplorerApiClient> {
        ExplorerApiClient::new(
            self.explorer_api_endpoint.clone(),
            self.request_timeout,
            RequestGate::new(self.max_in_flight),
            self.retry_policy(),
        )
    }
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the duration: {err:?}"),
    )?))
}

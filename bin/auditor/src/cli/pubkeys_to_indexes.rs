use std::{path::PathBuf, time::Duration};

use clap::Parser;
use url::Url;

use crate::cli::{
    constants::{
        DEFAULT_BEACON_API_ENDPOINT, DEFAULT_INDEX_OUTPUT_FILE, DEFAULT_REQUEST_TIMEOUT,
        DEFAULT_STATE_ID,
    },
    explorer::duration_parser,
};

#[derive(Debug, Parser)]
pub struct PubkeysToIndexesConfig {
    #[arg(help = "File with one validator pubkey per line")]
    pub pubkey_file: PathBuf,

    #[arg(help = "Where to write the validator indexes", default_value = DEFAULT_INDEX_OUTPUT_FILE)]
    pub output_file: PathBuf,

    #[arg(long, help = "Set HTTP url of the beacon api endpoint", default_value = DEFAULT_BEACON_API_ENDPOINT)]
    pub beacon_api_endpoint: Url,

    #[arg(long, help = "Set HTTP request timeout for beacon api calls", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "The state to resolve the pubkeys against", default_value = DEFAULT_STATE_ID)]
    pub state_id: String,
}

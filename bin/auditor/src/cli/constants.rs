pub const DEFAULT_BEACON_API_ENDPOINT: &str = "https://lodestar-mainnet.chainsafe.io";
pub const DEFAULT_EXPLORER_API_ENDPOINT: &str = "https://beaconcha.in";
pub const DEFAULT_INDEX_OUTPUT_FILE: &str = "./data/validator_indexes.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "./data";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "60";
pub const DEFAULT_STATE_ID: &str = "head";
pub const DEFAULT_VERBOSITY: &str = "3";

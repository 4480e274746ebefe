pub mod beacon;
pub mod explorer;
pub mod gate;
pub mod http_client;
pub mod retry;
#[cfg(test)]
mod test_server;

use std::time::Duration;

/// Maximum number of requests allowed in flight at once.
pub const MAX_REQUESTS_COUNT: usize = 1;

/// Fixed delay before a throttled request is resubmitted.
pub const RETRY_DELAY: Duration = Duration::from_secs(30);

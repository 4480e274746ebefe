use std::{future::Future, time::Duration};

use auditor_api_types::error::ExplorerError;
use tracing::warn;

use crate::RETRY_DELAY;

/// How throttled requests are resubmitted.
///
/// A request is retried only when an attempt fails with [`ExplorerError::RateLimited`].
/// `max_attempts` counts the first attempt too; `None` retries for as long as the server
/// keeps throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn fixed(delay: Duration) -> Self {
        Self {
            delay,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    pub async fn run<T, F, Fut>(&self, mut attempt: F) -> Result<T, ExplorerError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ExplorerError>>,
    {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            match attempt().await {
                Err(ExplorerError::RateLimited) => {
                    if self.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(ExplorerError::RetriesExhausted { attempts });
                    }
                    warn!(
                        "Rate limit reached. Retrying request in {}s...",
                        self.delay.as_secs()
                    );
                    tokio::time::sleep(self.delay).await;
                }
                result => return result,
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(RETRY_DELAY)
    }
}

use std::sync::Arc;

use auditor_api_types::error::ExplorerError;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::MAX_REQUESTS_COUNT;

/// Caps the number of outbound requests in flight.
///
/// Clones share the same permits, so every client built from one gate is throttled together.
#[derive(Debug, Clone)]
pub struct RequestGate {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl RequestGate {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Waits until a slot is free. The slot is released when the permit is dropped.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, ExplorerError> {
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ExplorerError::GateClosed)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn in_flight(&self) -> usize {
        self.capacity - self.semaphore.available_permits()
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new(MAX_REQUESTS_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_permit_is_released_on_drop() -> anyhow::Result<()> {
        let gate = RequestGate::default();
        assert_eq!(gate.capacity(), 1);

        let permit = gate.acquire().await?;
        assert_eq!(gate.in_flight(), 1);
        drop(permit);
        assert_eq!(gate.in_flight(), 0);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_request_waits_for_first() -> anyhow::Result<()> {
        let gate = RequestGate::new(1);
        let permit = gate.acquire().await?;

        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.acquire().await.map(|_| ()) })
        };

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!waiter.is_finished());

        drop(permit);
        waiter.await??;
        assert_eq!(gate.in_flight(), 0);
        Ok(())
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        assert_eq!(RequestGate::new(0).capacity(), 1);
    }
}

use std::time::Duration;

use async_trait::async_trait;
use auditor_api_types::{
    attestation::AttestationRecord,
    error::ExplorerError,
    responses::{DataResponse, StatusResponse},
    slot::{SLOT_NOT_FOUND_STATUS, SlotLookup},
};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::error;

use crate::{gate::RequestGate, http_client::ClientWithBaseUrl, retry::RetryPolicy};

/// Read access to a beaconcha.in-compatible explorer.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// The attestation history the explorer keeps for `validator_index`.
    async fn get_validator_attestations(
        &self,
        validator_index: u64,
    ) -> Result<Vec<AttestationRecord>, ExplorerError>;

    /// Whether a block was proposed at `slot`.
    async fn get_slot(&self, slot: u64) -> Result<SlotLookup, ExplorerError>;
}

#[derive(Debug, Clone)]
pub struct ExplorerApiClient {
    http_client: ClientWithBaseUrl,
}

impl ExplorerApiClient {
    pub fn new(
        explorer_api_endpoint: Url,
        request_timeout: Duration,
        gate: RequestGate,
        retry_policy: RetryPolicy,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: ClientWithBaseUrl::new(
                explorer_api_endpoint,
                request_timeout,
                gate,
                retry_policy,
            )?,
        })
    }
}

#[async_trait]
impl ExplorerApi for ExplorerApiClient {
    async fn get_validator_attestations(
        &self,
        validator_index: u64,
    ) -> Result<Vec<AttestationRecord>, ExplorerError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get(format!("/api/v1/validator/{validator_index}/attestations"))?
                    .build()?,
            )
            .await?;

        if !response.status().is_success() {
            let status_code = response.status();
            let message = response.text().await.unwrap_or_default();
            error!(
                "Failed to fetch validator {validator_index} attestations: {status_code} {message}"
            );
            return Err(ExplorerError::RequestFailedWithMessage {
                status_code,
                message,
            });
        }

        let response: DataResponse<Vec<AttestationRecord>> = response.json().await?;
        Ok(response.data)
    }

    async fn get_slot(&self, slot: u64) -> Result<SlotLookup, ExplorerError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .get(format!("/api/v1/slot/{slot}"))?
                    .build()?,
            )
            .await?;

        let status_code = response.status();
        if status_code == StatusCode::NOT_FOUND {
            return Ok(SlotLookup::NotFound);
        }

        if !status_code.is_success() {
            let message = response.text().await.unwrap_or_default();
            // The explorer answers unknown slots with an error status and the sentinel body.
            if serde_json::from_str::<StatusResponse<Value>>(&message)
                .is_ok_and(|body| body.status == SLOT_NOT_FOUND_STATUS)
            {
                return Ok(SlotLookup::NotFound);
            }
            error!("Failed to fetch slot {slot} details: {status_code} {message}");
            return Err(ExplorerError::RequestFailedWithMessage {
                status_code,
                message,
            });
        }

        let response: StatusResponse<Value> = response.json().await?;
        Ok(SlotLookup::from_response(slot, response))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_test::traced_test;

    use super::*;
    use crate::test_server::CannedServer;

    const ATTESTATIONS_BODY: &str = r#"{"status":"OK","data":[{"validatorindex":1,"epoch":10,"attesterslot":320,"inclusionslot":321,"status":1}]}"#;
    const SLOT_NOT_FOUND_BODY: &str =
        r#"{"status":"ERROR: could not retrieve db results","data":null}"#;
    const SLOT_FOUND_BODY: &str = r#"{"status":"OK","data":{"slot":321}}"#;

    fn explorer(server: &CannedServer, gate: RequestGate) -> anyhow::Result<ExplorerApiClient> {
        ExplorerApiClient::new(
            server.url.clone(),
            Duration::from_secs(5),
            gate,
            RetryPolicy::fixed(Duration::from_millis(10)),
        )
    }

    #[tokio::test]
    #[traced_test]
    async fn test_rate_limited_request_is_resubmitted_unchanged() -> anyhow::Result<()> {
        let server = CannedServer::start(vec![
            (429, "{}"),
            (429, "{}"),
            (200, ATTESTATIONS_BODY),
        ])
        .await?;
        let gate = RequestGate::new(1);

        let attestations = explorer(&server, gate.clone())?
            .get_validator_attestations(1)
            .await?;

        assert_eq!(attestations.len(), 1);
        assert_eq!(attestations[0].attester_slot, 320);
        assert_eq!(
            server.requests(),
            vec!["GET /api/v1/validator/1/attestations HTTP/1.1".to_string(); 3]
        );
        assert_eq!(gate.in_flight(), 0);
        assert!(logs_contain("Rate limit reached"));
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_attestation_fetch_keeps_status_and_body() -> anyhow::Result<()> {
        let server = CannedServer::start(vec![(500, "oops")]).await?;
        let gate = RequestGate::new(1);

        let result = explorer(&server, gate.clone())?
            .get_validator_attestations(1)
            .await;

        match result {
            Err(ExplorerError::RequestFailedWithMessage {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "oops");
            }
            other => panic!("Expected RequestFailedWithMessage, got {other:?}"),
        }
        assert_eq!(gate.in_flight(), 0);
        Ok(())
    }

    #[rstest]
    #[case(404, "{}", true)]
    #[case(500, SLOT_NOT_FOUND_BODY, true)]
    #[case(200, SLOT_NOT_FOUND_BODY, true)]
    #[case(200, SLOT_FOUND_BODY, false)]
    #[tokio::test]
    async fn test_get_slot_lookup(
        #[case] status: u16,
        #[case] body: &'static str,
        #[case] block_missed: bool,
    ) -> anyhow::Result<()> {
        let server = CannedServer::start(vec![(status, body)]).await?;

        let lookup = explorer(&server, RequestGate::default())?
            .get_slot(321)
            .await?;

        assert_eq!(lookup.block_missed(), block_missed);
        assert_eq!(server.requests(), vec!["GET /api/v1/slot/321 HTTP/1.1"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_slot_error_without_sentinel_fails() -> anyhow::Result<()> {
        let server = CannedServer::start(vec![(503, "oops")]).await?;

        let result = explorer(&server, RequestGate::default())?
            .get_slot(321)
            .await;

        assert!(matches!(
            result,
            Err(ExplorerError::RequestFailedWithMessage { status_code, .. })
                if status_code == StatusCode::SERVICE_UNAVAILABLE
        ));
        Ok(())
    }
}

use std::time::Duration;

use auditor_api_types::{
    error::ExplorerError,
    request::ValidatorsPostRequest,
    validator::{ValidatorData, ValidatorID},
};
use reqwest::Url;
use serde::Deserialize;

use crate::{gate::RequestGate, http_client::ClientWithBaseUrl, retry::RetryPolicy};

#[derive(Debug, Deserialize)]
struct ValidatorListResponse {
    #[serde(default)]
    data: Option<Vec<ValidatorData>>,
}

/// Client for the standard beacon node API.
#[derive(Debug, Clone)]
pub struct BeaconApiClient {
    http_client: ClientWithBaseUrl,
}

/// Attempts for the bulk lookup. It is a single request per run, so the beacon node is not
/// expected to throttle it and a few attempts are enough.
pub const BEACON_MAX_ATTEMPTS: u32 = 3;

fn default_retry_policy() -> RetryPolicy {
    RetryPolicy::default().with_max_attempts(BEACON_MAX_ATTEMPTS)
}

impl BeaconApiClient {
    pub fn new(beacon_api_endpoint: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        Self::with_retry_policy(beacon_api_endpoint, request_timeout, default_retry_policy())
    }

    pub fn with_retry_policy(
        beacon_api_endpoint: Url,
        request_timeout: Duration,
        retry_policy: RetryPolicy,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: ClientWithBaseUrl::new(
                beacon_api_endpoint,
                request_timeout,
                RequestGate::default(),
                retry_policy,
            )?,
        })
    }

    /// Resolves `validator_ids` against `state_id` in a single request.
    pub async fn get_state_validator_list(
        &self,
        state_id: &str,
        validator_ids: Vec<ValidatorID>,
    ) -> Result<Vec<ValidatorData>, ExplorerError> {
        let response = self
            .http_client
            .execute(
                self.http_client
                    .post(format!("/eth/v1/beacon/states/{state_id}/validators"))?
                    .json(&ValidatorsPostRequest { ids: validator_ids })
                    .build()?,
            )
            .await?;

        if !response.status().is_success() {
            let status_code = response.status();
            return Err(ExplorerError::RequestFailedWithMessage {
                status_code,
                message: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json::<ValidatorListResponse>()
            .await?
            .data
            .ok_or(ExplorerError::InvalidResponse)
    }
}

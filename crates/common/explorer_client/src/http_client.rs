use std::time::Duration;

use anyhow::anyhow;
use auditor_api_types::{
    error::ExplorerError,
    responses::{JSON_ACCEPT_PRIORITY, JSON_CONTENT_TYPE},
};
use reqwest::{
    Client, IntoUrl, Request, RequestBuilder, Response, StatusCode, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue},
};
use serde::de::DeserializeOwned;
use tokio::sync::OwnedSemaphorePermit;
use tracing::debug;

use crate::{gate::RequestGate, retry::RetryPolicy};

/// A response that still occupies its slot in the [`RequestGate`] until the body is consumed.
#[derive(Debug)]
pub struct GatedResponse {
    response: Response,
    _permit: OwnedSemaphorePermit,
}

impl GatedResponse {
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    pub async fn json<T: DeserializeOwned>(self) -> Result<T, ExplorerError> {
        let body = self.response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| ExplorerError::JsonDecodeError(err.to_string()))
    }

    pub async fn text(self) -> Result<String, ExplorerError> {
        Ok(self.response.text().await?)
    }
}

#[derive(Debug, Clone)]
pub struct ClientWithBaseUrl {
    client: Client,
    base_url: Url,
    gate: RequestGate,
    retry_policy: RetryPolicy,
}

impl ClientWithBaseUrl {
    pub fn new(
        url: Url,
        request_timeout: Duration,
        gate: RequestGate,
        retry_policy: RetryPolicy,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|err| anyhow!("Failed to build HTTP client {err:?}"))?;

        Ok(Self {
            client,
            base_url: url,
            gate,
            retry_policy,
        })
    }

    pub fn get<U: IntoUrl>(&self, url: U) -> Result<RequestBuilder, ExplorerError> {
        let url = self.base_url.join(url.as_str())?;

        Ok(self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(JSON_ACCEPT_PRIORITY)))
    }

    pub fn post<U: IntoUrl>(&self, url: U) -> Result<RequestBuilder, ExplorerError> {
        let url = self.base_url.join(url.as_str())?;

        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE)))
    }

    /// Sends `request` through the gate, resubmitting it whenever the server answers 429.
    pub async fn execute(&self, request: Request) -> Result<GatedResponse, ExplorerError> {
        self.retry_policy
            .run(|| {
                let request = request.try_clone();
                async move {
                    let request = request.ok_or(ExplorerError::UncloneableRequest)?;
                    let permit = self.gate.acquire().await?;
                    debug!("{} {}", request.method(), request.url());
                    let response = self.client.execute(request).await?;

                    if response.status() == StatusCode::TOO_MANY_REQUESTS {
                        return Err(ExplorerError::RateLimited);
                    }

                    Ok(GatedResponse {
                        response,
                        _permit: permit,
                    })
                }
            })
            .await
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::services::monitor::MonitorError;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Source of homework review statuses. Abstracted so the polling engine can be
/// exercised in tests without a live endpoint.
#[async_trait]
pub trait ReviewApi: Send + Sync {
    async fn fetch(&self, from_date: i64) -> Result<Value, MonitorError>;
}

/// Practicum API client
/// Handles all communication with the homework status endpoint
pub struct PracticumClient {
    client: Client,
    token: String,
    base_url: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            token,
            base_url: ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl ReviewApi for PracticumClient {
    /// One GET per cycle; no retry inside the call.
    async fn fetch(&self, from_date: i64) -> Result<Value, MonitorError> {
        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| MonitorError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MonitorError::BadStatus(response.status()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| MonitorError::MalformedBody(e.to_string()))?;

        Ok(payload)
    }
}

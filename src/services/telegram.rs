use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::services::monitor::MonitorError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Outbound notification channel. The engine only sees this trait, so tests
/// substitute a recording fake for the Bot API adapter.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), MonitorError>;
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

/// A 200 reply with `ok: false` means the Bot API rejected the message
/// (unknown chat, text too long), which is an API failure, not a local
/// misconfiguration.
fn check_bot_response(body: BotApiResponse) -> Result<(), MonitorError> {
    if body.ok {
        return Ok(());
    }

    Err(MonitorError::Api(
        body.description
            .unwrap_or_else(|| "Bot API rejected the message".to_string()),
    ))
}

/// Telegram Bot API adapter for the `Notifier` seam.
pub struct TelegramNotifier {
    client: Client,
    url: String,
}

impl TelegramNotifier {
    pub fn new(token: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: format!("https://api.telegram.org/bot{}/sendMessage", token),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), MonitorError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({
                "chat_id": chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| MonitorError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MonitorError::BadStatus(response.status()));
        }

        let body: BotApiResponse = response
            .json()
            .await
            .map_err(|e| MonitorError::MalformedBody(e.to_string()))?;

        check_bot_response(body)?;

        tracing::debug!("delivered notification to chat {}", chat_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bot_response_ok() {
        let body = BotApiResponse {
            ok: true,
            description: None,
        };

        assert!(check_bot_response(body).is_ok());
    }

    #[test]
    fn test_check_bot_response_rejection_is_api_error() {
        let body = BotApiResponse {
            ok: false,
            description: Some("Bad Request: chat not found".to_string()),
        };

        match check_bot_response(body) {
            Err(MonitorError::Api(description)) => {
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_bot_response_rejection_without_description() {
        let body = BotApiResponse {
            ok: false,
            description: None,
        };

        assert!(matches!(check_bot_response(body), Err(MonitorError::Api(_))));
    }
}

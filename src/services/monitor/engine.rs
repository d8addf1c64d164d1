use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::modules::homework::{check_response, current_date, parse_status};
use crate::services::monitor::MonitorError;
use crate::services::practicum::ReviewApi;
use crate::services::telegram::Notifier;

/// The polling loop: fetch, validate, parse, notify, sleep, forever.
///
/// The cursor is the start of the next poll window. It advances to the
/// server-reported `current_date` only when a cycle completes; a failed cycle
/// re-requests the same window on the next tick. Duplicate notifications are
/// tolerated, not deduplicated.
pub struct PollEngine {
    api: Arc<dyn ReviewApi>,
    notifier: Arc<dyn Notifier>,
    chat_id: String,
    poll_interval: Duration,
    cursor: i64,
    last_error: Option<String>,
}

impl PollEngine {
    pub fn new(
        api: Arc<dyn ReviewApi>,
        notifier: Arc<dyn Notifier>,
        chat_id: String,
        poll_interval: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            chat_id,
            poll_interval,
            cursor: Utc::now().timestamp(),
            last_error: None,
        }
    }

    /// Start the cursor at a known timestamp instead of the current time.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run the polling loop. Never returns; every cycle error is logged,
    /// reported to the chat best-effort, and followed by the fixed delay.
    pub async fn run(&mut self) {
        let mut interval = tokio::time::interval(self.poll_interval);

        loop {
            interval.tick().await;

            match self.run_cycle().await {
                Ok(sent) => {
                    self.last_error = None;
                    tracing::debug!("cycle complete, {} notification(s) sent", sent);
                }
                Err(error) => self.report_failure(&error).await,
            }
        }
    }

    /// One full cycle. Returns the number of notifications delivered. The
    /// cursor moves only if every stage before it succeeded; delivery
    /// failures are logged and swallowed, they never fail the cycle.
    pub async fn run_cycle(&mut self) -> Result<usize, MonitorError> {
        let payload = self.api.fetch(self.cursor).await?;

        let homeworks = check_response(&payload)?;

        let mut messages = Vec::with_capacity(homeworks.len());
        for record in &homeworks {
            messages.push(parse_status(record)?);
        }

        let next_cursor = current_date(&payload)?;

        let mut sent = 0;
        for message in &messages {
            match self.notifier.send(&self.chat_id, message).await {
                Ok(()) => {
                    sent += 1;
                    tracing::info!("sent review status notification");
                }
                Err(error) => {
                    tracing::error!("failed to deliver notification: {}", error);
                }
            }
        }

        self.cursor = next_cursor;
        Ok(sent)
    }

    /// Log a cycle failure and forward it to the chat. Repeats of the same
    /// error text are suppressed until a cycle succeeds again; the report
    /// itself is allowed to fail silently.
    async fn report_failure(&mut self, error: &MonitorError) {
        let text = format!("Polling cycle failed: {}", error);
        tracing::error!("{}", text);

        if self.last_error.as_deref() == Some(text.as_str()) {
            return;
        }

        match self.notifier.send(&self.chat_id, &text).await {
            Ok(()) => self.last_error = Some(text),
            Err(report_error) => {
                tracing::warn!("could not report failure to chat: {}", report_error);
            }
        }
    }
}

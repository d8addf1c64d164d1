use std::env;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub poll_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let practicum_token = env::var("PRAKTIKUM_TOKEN")
            .map_err(|_| "PRAKTIKUM_TOKEN must be set".to_string())?;

        let telegram_token = env::var("TELEGRAM_TOKEN")
            .map_err(|_| "TELEGRAM_TOKEN must be set".to_string())?;

        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID")
            .map_err(|_| "TELEGRAM_CHAT_ID must be set".to_string())?;

        let poll_interval_secs = match env::var("POLL_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| "POLL_INTERVAL_SECS must be an integer number of seconds".to_string())?,
            Err(_) => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            poll_interval_secs,
        })
    }

    /// All three secrets present and non-empty. Checked once by the entry
    /// point before the loop is started.
    pub fn check_tokens(&self) -> bool {
        !self.practicum_token.is_empty()
            && !self.telegram_token.is_empty()
            && !self.telegram_chat_id.is_empty()
    }
}

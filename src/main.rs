use std::sync::Arc;
use std::time::Duration;

use homework_notifier::config::environment::Config;
use homework_notifier::services::monitor::PollEngine;
use homework_notifier::services::practicum::PracticumClient;
use homework_notifier::services::telegram::TelegramNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_notifier=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing secret is the only fatal error.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(message) => {
            tracing::error!("failed to load environment configuration: {}", message);
            std::process::exit(1);
        }
    };

    if !config.check_tokens() {
        tracing::error!("one or more required tokens are empty, refusing to start");
        std::process::exit(1);
    }

    let api = Arc::new(PracticumClient::new(config.practicum_token.clone()));
    let notifier = Arc::new(TelegramNotifier::new(&config.telegram_token));

    tracing::info!(
        "polling homework statuses every {} seconds",
        config.poll_interval_secs
    );

    let mut engine = PollEngine::new(
        api,
        notifier,
        config.telegram_chat_id.clone(),
        Duration::from_secs(config.poll_interval_secs),
    );

    engine.run().await;
}

use homework_notifier::config::environment::Config;
use serial_test::serial;
use std::env;

fn set_required_vars() {
    env::set_var("PRAKTIKUM_TOKEN", "practicum-secret");
    env::set_var("TELEGRAM_TOKEN", "bot-secret");
    env::set_var("TELEGRAM_CHAT_ID", "123456");
}

fn clear_vars() {
    env::remove_var("PRAKTIKUM_TOKEN");
    env::remove_var("TELEGRAM_TOKEN");
    env::remove_var("TELEGRAM_CHAT_ID");
    env::remove_var("POLL_INTERVAL_SECS");
}

#[test]
#[serial]
fn test_from_env_loads_all_secrets() {
    clear_vars();
    set_required_vars();

    let config = Config::from_env().unwrap();

    assert_eq!(config.practicum_token, "practicum-secret");
    assert_eq!(config.telegram_token, "bot-secret");
    assert_eq!(config.telegram_chat_id, "123456");
    assert!(config.check_tokens());

    clear_vars();
}

#[test]
#[serial]
fn test_from_env_names_missing_variable() {
    clear_vars();
    env::set_var("TELEGRAM_TOKEN", "bot-secret");
    env::set_var("TELEGRAM_CHAT_ID", "123456");

    let error = Config::from_env().unwrap_err();

    assert!(error.contains("PRAKTIKUM_TOKEN"));

    clear_vars();
}

#[test]
#[serial]
fn test_poll_interval_defaults_to_600() {
    clear_vars();
    set_required_vars();

    let config = Config::from_env().unwrap();

    assert_eq!(config.poll_interval_secs, 600);

    clear_vars();
}

#[test]
#[serial]
fn test_poll_interval_override() {
    clear_vars();
    set_required_vars();
    env::set_var("POLL_INTERVAL_SECS", "10");

    let config = Config::from_env().unwrap();

    assert_eq!(config.poll_interval_secs, 10);

    clear_vars();
}

#[test]
#[serial]
fn test_poll_interval_rejects_garbage() {
    clear_vars();
    set_required_vars();
    env::set_var("POLL_INTERVAL_SECS", "soon");

    let error = Config::from_env().unwrap_err();

    assert!(error.contains("POLL_INTERVAL_SECS"));

    clear_vars();
}

#[test]
#[serial]
fn test_check_tokens_rejects_empty_secret() {
    clear_vars();
    set_required_vars();
    env::set_var("TELEGRAM_CHAT_ID", "");

    let config = Config::from_env().unwrap();

    assert!(!config.check_tokens());

    clear_vars();
}

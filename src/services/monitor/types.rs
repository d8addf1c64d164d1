use reqwest::StatusCode;

/// Everything that can go wrong inside one polling cycle. All variants are
/// caught at the loop boundary; none of them terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API returned status {0}")]
    BadStatus(StatusCode),
    #[error("API error: {0}")]
    Api(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("unexpected payload shape: {0}")]
    Validation(&'static str),
    #[error("missing field `{0}` in API response")]
    MissingField(&'static str),
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}

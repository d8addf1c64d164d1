use serde_json::Value;

use crate::services::monitor::MonitorError;

/// Review status codes recognized by the API. Any other code in a payload is
/// an error, not a variant to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Fixed human-readable verdict for the status code.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The reviewer liked everything. Hooray!",
            Self::Reviewing => "The work was taken for review.",
            Self::Rejected => "The reviewer has remarks.",
        }
    }
}

/// Validate the API payload shape and return the homework entries unchanged.
/// The list may be empty; no filtering happens here.
pub fn check_response(payload: &Value) -> Result<Vec<Value>, MonitorError> {
    let object = payload
        .as_object()
        .ok_or(MonitorError::Validation("API response is not a JSON object"))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(MonitorError::MissingField("homeworks"))?;

    let list = homeworks
        .as_array()
        .ok_or(MonitorError::Validation("`homeworks` is not an array"))?;

    Ok(list.clone())
}

/// Server-reported current time, used to advance the poll cursor.
pub fn current_date(payload: &Value) -> Result<i64, MonitorError> {
    let current = payload
        .get("current_date")
        .ok_or(MonitorError::MissingField("current_date"))?;

    current
        .as_i64()
        .ok_or(MonitorError::Validation("`current_date` is not an integer timestamp"))
}

/// Turn one homework entry into the notification text. Pure function.
pub fn parse_status(record: &Value) -> Result<String, MonitorError> {
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(MonitorError::MissingField("homework_name"))?;

    let code = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(MonitorError::MissingField("status"))?;

    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| MonitorError::UnknownStatus(code.to_string()))?;

    Ok(format!(
        "Changed review status for \"{}\": {}",
        name,
        status.verdict()
    ))
}

use strum_macros::Display;

/// User-actionable buckets for a failed model-list refresh.
///
/// Derived on demand from the failure text; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorCategory {
    NetworkUnreachable,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Timeout,
    Unknown,
}

/// Map the failure text that crossed the process boundary to a category and
/// the message shown next to the model selector.
///
/// Never fails: anything unrecognized lands in [`ErrorCategory::Unknown`],
/// and an empty detail gets the generic message.
pub fn classify_failure(detail: &str) -> (ErrorCategory, String) {
    let detail = detail.trim();
    if detail.is_empty() {
        return (
            ErrorCategory::Unknown,
            "Failed to load models. Please check your Base URL and API Key.".to_string(),
        );
    }

    let lowered = detail.to_lowercase();
    let category = if detail.contains("401") {
        ErrorCategory::Unauthorized
    } else if detail.contains("403") {
        ErrorCategory::Forbidden
    } else if detail.contains("404") {
        ErrorCategory::NotFound
    } else if has_server_error_status(detail) {
        ErrorCategory::ServerError
    } else if ["connect", "network error", "unreachable", "dns"]
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        ErrorCategory::NetworkUnreachable
    } else if lowered.contains("timeout") || lowered.contains("timed out") {
        ErrorCategory::Timeout
    } else {
        ErrorCategory::Unknown
    };

    let message = match category {
        ErrorCategory::NetworkUnreachable => {
            "Network Error: Unable to connect to the API. Please verify your Base URL.".to_string()
        }
        ErrorCategory::Unauthorized => {
            "Authentication Error (401): Invalid API Key. Please check your credentials."
                .to_string()
        }
        ErrorCategory::Forbidden => {
            "Access Forbidden (403): Your API Key doesn't have permission to access this endpoint."
                .to_string()
        }
        ErrorCategory::NotFound => {
            "Not Found (404): The API endpoint doesn't exist. Please verify your Base URL."
                .to_string()
        }
        ErrorCategory::ServerError => {
            "Server Error (500): The API server encountered an error. Please try again later."
                .to_string()
        }
        ErrorCategory::Timeout => {
            "Request Timeout: The server took too long to respond. Please try again.".to_string()
        }
        ErrorCategory::Unknown => format!("Error: {detail}"),
    };

    (category, message)
}

/// A standalone three-digit token in 500..=599 counts as a server error;
/// digits embedded in longer runs (request ids, ports, keys) do not.
fn has_server_error_status(detail: &str) -> bool {
    detail
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| token.len() == 3)
        .filter_map(|token| token.parse::<u16>().ok())
        .any(|code| (500..=599).contains(&code))
}

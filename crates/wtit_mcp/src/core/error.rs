use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_FORMAT_FAILURE: &str = "format_failure";
const ERROR_SERIALIZATION: &str = "serialization_failure";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";

const UNKNOWN_ERROR: &str = "Unknown error";

/// Failures raised while rendering a point in time.
///
/// These are the only two outcomes a formatting call can fail with. Their
/// messages are safe to hand back to tool callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeFormatError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Failed to format date: {message}")]
    FormatFailure { message: String },
}

impl TimeFormatError {
    pub fn invalid_timezone(timezone: impl Into<String>) -> Self {
        Self::InvalidTimezone {
            timezone: timezone.into(),
        }
    }

    /// Wrap an underlying failure message, substituting "Unknown error" when
    /// the cause carried none.
    pub fn format_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };
        Self::FormatFailure { message }
    }
}

/// Server-level errors
#[derive(Debug, thiserror::Error)]
pub enum TimeServerError {
    #[error(transparent)]
    Format(#[from] TimeFormatError),
    #[error("Failed to serialize time snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
}

/// Errors that stop the server before it starts serving
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration validation failed: {message}")]
    InvalidConfiguration { message: String },
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl TimeServerError {
    /// Message shown to a tool caller.
    ///
    /// Formatting failures pass through unchanged, anything else is replaced
    /// with `fallback` so internals never leak into tool output.
    pub fn client_message(&self, fallback: &str) -> String {
        match self {
            TimeServerError::Format(err) => err.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<TimeServerError> for McpError {
    fn from(err: TimeServerError) -> Self {
        match err {
            TimeServerError::Format(TimeFormatError::InvalidTimezone { timezone }) => {
                McpError::invalid_params(
                    ERROR_INVALID_TIMEZONE,
                    Some(json!({"timezone": timezone})),
                )
            }
            TimeServerError::Format(TimeFormatError::FormatFailure { message }) => {
                McpError::internal_error(ERROR_FORMAT_FAILURE, Some(json!({"message": message})))
            }
            TimeServerError::Serialization(e) => McpError::internal_error(
                ERROR_SERIALIZATION,
                Some(json!({"message": e.to_string()})),
            ),
            TimeServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES
                })),
            ),
        }
    }
}

pub type TimeFormatResult<T> = Result<T, TimeFormatError>;
pub type TimeServerResult<T> = Result<T, TimeServerError>;
pub type StartupResult<T> = Result<T, StartupError>;
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::{TimeFormatError, TimeServerError};
    use crate::core::error::McpError;

    #[test]
    fn test_error_conversion() {
        let error = TimeServerError::from(TimeFormatError::invalid_timezone("Invalid/Zone"));
        let mcp_error: McpError = error.into();

        // Should convert to proper MCP error format
        assert!(mcp_error.to_string().contains("invalid_timezone"));
    }

    #[test]
    fn test_invalid_timezone_message_names_identifier() {
        let error = TimeFormatError::invalid_timezone("Invalid/Timezone");
        assert_eq!(error.to_string(), "Invalid timezone: Invalid/Timezone");
    }

    #[test]
    fn test_format_failure_without_message() {
        let error = TimeFormatError::format_failure("");
        assert_eq!(error.to_string(), "Failed to format date: Unknown error");

        let error = TimeFormatError::format_failure("year out of range");
        assert_eq!(error.to_string(), "Failed to format date: year out of range");
    }

    #[test]
    fn test_client_message_masks_non_format_errors() {
        let fallback = "An unexpected error occurred";

        let error = TimeServerError::from(TimeFormatError::invalid_timezone("Mars/Olympus"));
        assert_eq!(
            error.client_message(fallback),
            "Invalid timezone: Mars/Olympus"
        );

        let error = TimeServerError::ResourceNotFound {
            uri: "time://nowhere".to_string(),
        };
        assert_eq!(error.client_message(fallback), fallback);
    }

    #[test]
    fn test_resource_not_found_conversion() {
        let error = TimeServerError::ResourceNotFound {
            uri: "time://nowhere".to_string(),
        };
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("resource_not_found"));
    }

    #[test]
    fn test_serialization_conversion() {
        let cause = serde_json::from_str::<i64>("not json").unwrap_err();
        let mcp_error: McpError = TimeServerError::from(cause).into();

        assert!(mcp_error.to_string().contains("serialization_failure"));
    }
}

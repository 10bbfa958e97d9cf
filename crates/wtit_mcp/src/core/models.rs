use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::utils::UTC_TIMEZONE;

/// Keep a boolean argument only when it really is a JSON boolean
fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(Some(b)),
        _ => Ok(None),
    }
}

/// Keep a string argument only when it really is a JSON string, trimmed
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s.trim().to_string())),
        _ => Ok(None),
    }
}

/// Point-in-time result returned by `get_current_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    /// ISO 8601 datetime string
    pub iso8601: String,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "timestamp")]
    pub timestamp_millis: i64,
    /// Timezone the datetime was rendered in
    pub timezone: String,
}

/// Formatting options supplied with a time query
///
/// Both tools accept this shape. Unknown fields are ignored, and a known field
/// carrying the wrong JSON type is treated as if it had been left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Include milliseconds in the ISO 8601 output (default: true)
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    #[schemars(with = "Option<bool>", extend("default" = true))]
    pub include_milliseconds: Option<bool>,
    /// IANA timezone name (default: UTC). Examples: "UTC", "America/New_York", "Asia/Tokyo"
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    #[schemars(with = "Option<String>", extend("default" = "UTC"))]
    pub timezone: Option<String>,
}

impl FormatOptions {
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_milliseconds(mut self, include_milliseconds: bool) -> Self {
        self.include_milliseconds = Some(include_milliseconds);
        self
    }
}

/// Server-wide defaults that caller options are merged over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDefaults {
    pub include_milliseconds: bool,
    /// Empty means "use the host's local timezone"
    pub timezone: String,
}

impl Default for FormatDefaults {
    fn default() -> Self {
        Self {
            include_milliseconds: true,
            timezone: UTC_TIMEZONE.to_string(),
        }
    }
}

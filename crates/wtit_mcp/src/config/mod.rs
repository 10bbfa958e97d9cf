use crate::core::{
    error::{StartupError, StartupResult},
    formatter::parse_timezone,
    models::FormatDefaults,
    utils::{UTC_TIMEZONE, non_blank},
};

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Timezone used when a caller does not pass one; empty selects the host's
    pub default_timezone: String,
    pub include_milliseconds: bool,
}

impl Config {
    /// Reject a default timezone the IANA database does not know
    pub fn validate(&self) -> StartupResult<()> {
        if let Some(timezone) = non_blank(Some(self.default_timezone.as_str())) {
            parse_timezone(timezone).map_err(|e| StartupError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn format_defaults(&self) -> FormatDefaults {
        FormatDefaults {
            include_milliseconds: self.include_milliseconds,
            timezone: self.default_timezone.trim().to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_timezone: UTC_TIMEZONE.to_string(),
            include_milliseconds: true,
        }
    }
}

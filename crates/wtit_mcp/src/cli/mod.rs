use clap::Parser;

use crate::config::Config;
use crate::core::{error::StartupResult, utils::UTC_TIMEZONE};

/// WTIT ("what time is it") MCP Server
///
/// A Model Context Protocol server that reports the current time as ISO 8601
/// strings with exact UTC offsets for any IANA timezone.
///
/// ## Features
/// - **Tools**: `get_current_time` (snapshot with epoch timestamp) and
///   `get_iso8601_time` (bare ISO 8601 string)
/// - **Resources**: Server status and help documentation
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-wtit
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "wtit": {
///       "command": "mcp-server-wtit",
///       "args": ["--timezone", "Europe/London"],
///       "env": {
///         "RUST_LOG": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `WTIT_DEFAULT_TIMEZONE`: Same as `--timezone`
/// - `WTIT_NO_MILLISECONDS`: Same as `--no-milliseconds`
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-wtit")]
#[command(about = "An MCP server that tells the current time in ISO 8601 format")]
#[command(version)]
#[command(
    long_about = "A Model Context Protocol (MCP) server that provides the current time. \nResults are ISO 8601 strings in UTC or any IANA timezone, with optional milliseconds."
)]
pub struct Cli {
    /// Timezone used when a tool call does not name one.
    ///
    /// Pass an empty string to use the host's local timezone.
    #[arg(
        long,
        env = "WTIT_DEFAULT_TIMEZONE",
        value_name = "TIMEZONE",
        default_value = UTC_TIMEZONE,
        help = "Default IANA timezone for tool calls"
    )]
    pub timezone: String,

    /// Leave milliseconds out unless a tool call asks for them.
    #[arg(long, env = "WTIT_NO_MILLISECONDS")]
    pub no_milliseconds: bool,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> StartupResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> StartupResult<Config> {
        let config = Config {
            default_timezone: self.timezone,
            include_milliseconds: !self.no_milliseconds,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_build_config() {
        let cli = Cli::try_parse_from([
            "mcp-server-wtit",
            "--timezone",
            "Asia/Kolkata",
            "--no-milliseconds",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.default_timezone, "Asia/Kolkata");
        assert!(!config.include_milliseconds);
    }

    #[test]
    fn test_invalid_timezone_flag_is_rejected() {
        let cli =
            Cli::try_parse_from(["mcp-server-wtit", "--timezone", "Invalid/Timezone"]).unwrap();

        assert!(cli.into_config().is_err());
    }
}

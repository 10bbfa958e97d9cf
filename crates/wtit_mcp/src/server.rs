use rmcp::{
    RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::config::Config;
use crate::core::{
    error::{McpResult, TimeServerError, TimeServerResult},
    formatter::TimeFormatter,
    models::FormatOptions,
};

const CURRENT_TIME_UNEXPECTED: &str =
    "An unexpected error occurred while retrieving the current time";
const ISO8601_TIME_UNEXPECTED: &str =
    "An unexpected error occurred while retrieving the ISO8601 time";

/// WTIT MCP Server exposing current-time tools
#[derive(Clone)]
pub struct TimeService {
    formatter: TimeFormatter,
    tool_router: ToolRouter<TimeService>,
}

impl TimeService {
    pub fn new(formatter: TimeFormatter) -> Self {
        Self {
            formatter,
            tool_router: Self::tool_router(),
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    fn default_timezone_label(&self) -> String {
        match self.formatter.defaults().timezone.as_str() {
            "" => format!("{} (host)", self.formatter.local_timezone_name()),
            timezone => timezone.to_string(),
        }
    }

    fn generate_status_content(&self) -> McpResult<String> {
        let snapshot = self
            .formatter
            .current_snapshot(&FormatOptions::default())
            .map_err(TimeServerError::from)?;
        let snapshot_json =
            serde_json::to_string_pretty(&snapshot).map_err(TimeServerError::from)?;

        Ok(format!(
            r#"WTIT MCP Server Status

Server: Running
Local Timezone: {}
Default Timezone: {}
Milliseconds By Default: {}
Current Time: {}
Epoch Milliseconds: {}
Tools Available: 2
Resources Available: 2

Snapshot:
{}"#,
            self.formatter.local_timezone_name(),
            self.default_timezone_label(),
            self.formatter.defaults().include_milliseconds,
            snapshot.iso8601,
            snapshot.timestamp_millis,
            snapshot_json,
        ))
    }

    fn generate_help_content(&self) -> String {
        format!(
            r#"WTIT MCP Server Help

TOOLS:
- get_current_time: Current time as ISO 8601, epoch milliseconds and timezone
  - includeMilliseconds: Include .sss in the output (optional, default: {})
  - timezone: IANA timezone name (optional, default: {})
  - Example: {{"timezone": "America/New_York"}}

- get_iso8601_time: Current time as a bare ISO 8601 string
  - Same arguments as get_current_time
  - Example: {{"includeMilliseconds": false}}

RESOURCES:
- time://status: Current server status and time
- time://help: This help documentation

OUTPUT FORMAT:
- UTC: 2024-01-15T10:30:45.123Z
- Other zones: 2024-01-15T16:00:45.123+05:30
- Offsets are exact for half-hour and 45-minute zones

ARGUMENTS:
- Unknown fields are ignored
- A field with the wrong type is treated as missing
- An empty timezone means "use the default"

LOCAL TIMEZONE: {}"#,
            self.formatter.defaults().include_milliseconds,
            self.default_timezone_label(),
            self.formatter.local_timezone_name()
        )
    }
}

impl Default for TimeService {
    fn default() -> Self {
        Self::new(TimeFormatter::default())
    }
}

/// Wrap a tool outcome in the MCP result envelope
fn tool_result(outcome: TimeServerResult<String>, fallback: &str) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            tracing::warn!("Time query failed: {}", err);
            CallToolResult::error(vec![Content::text(format!(
                "Error: {}",
                err.client_message(fallback)
            ))])
        }
    }
}

#[tool_router]
impl TimeService {
    #[tool(
        description = "Get the current time with detailed information including ISO8601 format, timestamp, and timezone"
    )]
    pub(crate) async fn get_current_time(
        &self,
        Parameters(options): Parameters<FormatOptions>,
    ) -> McpResult<CallToolResult> {
        tracing::debug!(?options, "get_current_time");

        let outcome = self
            .formatter
            .current_snapshot(&options)
            .map_err(TimeServerError::from)
            .and_then(|snapshot| Ok(serde_json::to_string_pretty(&snapshot)?));

        Ok(tool_result(outcome, CURRENT_TIME_UNEXPECTED))
    }

    #[tool(description = "Get the current time as an ISO8601 string")]
    pub(crate) async fn get_iso8601_time(
        &self,
        Parameters(options): Parameters<FormatOptions>,
    ) -> McpResult<CallToolResult> {
        tracing::debug!(?options, "get_iso8601_time");

        let outcome = self
            .formatter
            .current_iso8601(&options)
            .map_err(TimeServerError::from);

        Ok(tool_result(outcome, ISO8601_TIME_UNEXPECTED))
    }
}

#[tool_handler]
impl ServerHandler for TimeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "MCP server that provides the current time in ISO8601 format. Tools: get_current_time, get_iso8601_time. Default timezone: {}. Use IANA timezone names.",
                self.default_timezone_label()
            )),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("time://status", "server-status"),
                self.create_resource_text("time://help", "help-documentation"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        match uri.as_str() {
            "time://status" => {
                let status = self.generate_status_content()?;
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(status, uri)],
                })
            }
            "time://help" => {
                let help = self.generate_help_content();
                Ok(ReadResourceResult {
                    contents: vec![ResourceContents::text(help, uri)],
                })
            }
            _ => Err(TimeServerError::ResourceNotFound {
                uri: uri.to_string(),
            }
            .into()),
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("WTIT MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

/// Resolve once SIGINT or SIGTERM arrives
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                tracing::info!("Received SIGINT");
            }
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            }
        }
        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let formatter = TimeFormatter::new(config.format_defaults());
    tracing::info!(
        local_timezone = formatter.local_timezone_name(),
        default_timezone = %config.default_timezone,
        include_milliseconds = config.include_milliseconds,
        "Starting WTIT MCP server"
    );

    let service = TimeService::new(formatter)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    tokio::select! {
        quit = service.waiting() => {
            let reason = quit?;
            tracing::info!("Client disconnected: {:?}", reason);
        }
        signal = shutdown_signal() => {
            signal?;
            tracing::info!("Shutting down WTIT MCP server");
        }
    }

    Ok(())
}

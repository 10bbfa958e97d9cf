use mcp_server_wtit::{cli::Cli, server, utils::logging};

/// WTIT MCP Server
///
/// Reports the current time as ISO 8601 through two tools:
/// - get_current_time: ISO 8601 string, epoch milliseconds and timezone
/// - get_iso8601_time: ISO 8601 string only
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-wtit
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    // Initialize logging based on environment
    logging::init_logging()?;

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running WTIT MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}

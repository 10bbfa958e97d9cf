//! WTIT ("what time is it") MCP server.
//!
//! Exposes `get_current_time` and `get_iso8601_time` tools over the Model
//! Context Protocol. The formatting logic lives in [`core`]; [`server`] adapts
//! it to MCP tool calls.

pub mod cli;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

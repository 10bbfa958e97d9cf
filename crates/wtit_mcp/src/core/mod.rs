//! # WTIT MCP Server Core
//!
//! Timezone-aware "what time is it" formatting for the MCP server.
//!
//! ## Features
//! - ISO 8601 output with optional milliseconds
//! - Exact `±HH:MM` offsets for any IANA timezone, including half-hour and
//!   45-minute zones
//! - Epoch millisecond timestamps
//! - Local timezone detection
//!
//! ## Modules
//! - `clock`: Sources of the current instant
//! - `error`: Error taxonomy and MCP error conversion
//! - `formatter`: ISO 8601 rendering and offset computation
//! - `models`: Snapshots, options and defaults
//! - `utils`: Format constants and offset helpers

pub mod clock;
pub mod error;
pub mod formatter;
pub mod models;
pub mod utils;

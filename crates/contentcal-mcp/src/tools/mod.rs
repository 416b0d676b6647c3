//! MCP tool implementations.

pub mod generate_calendar;
pub mod registry;

pub use registry::ToolRegistry;

//! ContentCal MCP server — exposes the `generateCalendar` tool over
//! JSON-RPC/HTTP.

pub mod config;
pub mod protocol;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::{GatewayConfig, GatewayState};
pub use protocol::ProtocolHandler;
pub use transport::HttpTransport;

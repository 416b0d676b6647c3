//! Transport layer for MCP communication.

pub mod http;

pub use http::HttpTransport;

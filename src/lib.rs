//! # smartlead-mcp
//!
//! MCP (Model Context Protocol) server for the Smartlead campaign API.
//!
//! This crate exposes Smartlead's campaign-management REST endpoints as MCP
//! tools for AI agents. Each tool is a stateless one-shot translation of
//! typed arguments into an authenticated HTTP call; results and errors come
//! back as strings the agent can consume directly. The protocol runs as
//! JSON-RPC 2.0 over stdio or TCP.
//!
//! ## Features
//!
//! - **12 tools** covering campaigns (list, get, create, schedule, settings,
//!   status, analytics, lead export), sequences (save, fetch, analytics),
//!   and leads (campaign membership)
//! - **One error channel**: remote API errors and transport failures are
//!   normalized into the same structured error and rendered to text at the
//!   tool boundary
//! - **Omit-if-unset semantics**: optional arguments left out of a call are
//!   left out of the outgoing request, never sent as null
//!
//! ## Usage
//!
//! The server is typically run as an executable and configured in AI tools
//! like Claude Desktop:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "smartlead": {
//!       "command": "/path/to/smartlead-mcp",
//!       "env": { "SMARTLEAD_API_KEY": "your-key" }
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! For testing or embedding, you can use the library API:
//!
//! ```no_run
//! use smartlead_mcp::{ClientConfig, McpServer, McpSession, SmartleadClient};
//!
//! let client = SmartleadClient::new(ClientConfig::new("api-key")).expect("client");
//! let session = McpSession::new(client);
//! let server = McpServer::new(session);
//!
//! // Run the server (reads from stdin, writes to stdout)
//! // server.run_stdio().await.expect("Server error");
//! ```

#![warn(missing_docs)]

mod client;
mod convert;
mod error;
mod server;
mod session;
mod tools;

pub use client::{
    ClientConfig, ScheduleUpdate, SettingsUpdate, SmartleadClient, DEFAULT_API_URL,
    DEFAULT_TIMEOUT_SECS,
};
pub use convert::format_response;
pub use error::{Result, SmartleadError};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use session::McpSession;
pub use tools::{ToolDef, ToolRegistry};

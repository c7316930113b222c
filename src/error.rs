//! Error types for the MCP server.
//!
//! Collapses remote API failures and local transport failures into a single
//! error channel, and maps everything onto MCP-friendly responses.

use serde_json::Value as JsonValue;

/// MCP server errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SmartleadError {
    /// The Smartlead API returned status >= 400, or the request never made it
    /// to the service (network failures are normalized to status 500).
    #[error("Smartlead API error ({status}): {message}")]
    Api {
        /// HTTP status code (500 for transport-level failures)
        status: u16,
        /// Message extracted from the response body
        message: String,
        /// Structured details from the response's `errors` field, if any
        details: Option<JsonValue>,
    },

    /// Required setup (API key, client in session) missing at call time.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown tool requested.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArg(String),

    /// Invalid argument value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// JSON-RPC protocol error.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SmartleadError {
    fn from(err: std::io::Error) -> Self {
        SmartleadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SmartleadError {
    fn from(err: serde_json::Error) -> Self {
        SmartleadError::Protocol(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for SmartleadError {
    fn from(err: reqwest::Error) -> Self {
        // Connection refused, timeout, DNS and friends all surface through the
        // same error type the remote service's own failures use.
        SmartleadError::Api {
            status: 500,
            message: format!("Request error: {}", err),
            details: None,
        }
    }
}

/// JSON-RPC error codes.
pub mod rpc_codes {
    /// Parse error - Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl SmartleadError {
    /// Convert to JSON-RPC error code.
    pub fn rpc_code(&self) -> i32 {
        match self {
            SmartleadError::UnknownTool(_) => rpc_codes::METHOD_NOT_FOUND,
            SmartleadError::MissingArg(_) | SmartleadError::InvalidArg { .. } => {
                rpc_codes::INVALID_PARAMS
            }
            SmartleadError::Protocol(_) => rpc_codes::INVALID_REQUEST,
            _ => rpc_codes::INTERNAL_ERROR,
        }
    }

    /// Render the error as the text a tool call returns.
    ///
    /// Tool invocations never raise past the tool boundary; the agent gets a
    /// readable string for every call. API errors carry the status code and
    /// the service-provided message, plus pretty-printed details when the
    /// service sent any.
    pub fn tool_text(&self) -> String {
        match self {
            SmartleadError::Api {
                status,
                message,
                details,
            } => {
                let mut text = format!("Error ({}): {}", status, message);
                if let Some(details) = details {
                    let empty = match details {
                        JsonValue::Null => true,
                        JsonValue::Object(map) => map.is_empty(),
                        JsonValue::Array(arr) => arr.is_empty(),
                        _ => false,
                    };
                    if !empty {
                        let rendered = serde_json::to_string_pretty(details)
                            .unwrap_or_else(|_| details.to_string());
                        text.push_str("\nDetails: ");
                        text.push_str(&rendered);
                    }
                }
                text
            }
            other => format!("Error: {}", other),
        }
    }
}

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, SmartleadError>;

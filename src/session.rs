//! MCP session context.
//!
//! The session is what a tool call resolves its client from. There is no
//! other cross-call state; every tool invocation is a single request/response
//! transaction.

use crate::client::SmartleadClient;
use crate::error::{Result, SmartleadError};

/// Execution context handed to tool dispatch.
///
/// Holds the shared Smartlead client for the lifetime of the server. A
/// session without a client yields a configuration error from every tool
/// call instead of panicking.
pub struct McpSession {
    client: Option<SmartleadClient>,
}

impl McpSession {
    /// Create a session around an initialized client.
    pub fn new(client: SmartleadClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Create a session with no client attached.
    ///
    /// Tool calls against it fail with a configuration error. Used when
    /// startup validation is deferred, and in tests.
    pub fn uninitialized() -> Self {
        Self { client: None }
    }

    /// Resolve the client, failing with a configuration error if absent.
    pub fn client(&self) -> Result<&SmartleadClient> {
        self.client.as_ref().ok_or_else(|| {
            SmartleadError::Config("Smartlead client not initialized".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_session_yields_config_error() {
        let session = McpSession::uninitialized();
        let err = session.client().unwrap_err();
        assert!(matches!(err, SmartleadError::Config(_)));
        assert!(err.tool_text().contains("configuration error"));
    }
}

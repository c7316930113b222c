//! Lead tools.
//!
//! Tools: smartlead_lead_campaigns

use serde_json::{Map, Value as JsonValue};

use crate::convert::{format_response, get_id_arg};
use crate::error::{Result, SmartleadError};
use crate::schema;
use crate::session::McpSession;
use crate::tools::ToolDef;

/// Get all lead tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![ToolDef::new(
        "smartlead_lead_campaigns",
        "Fetch all campaigns a lead belongs to. Returns an array of {id, status, name}.",
        schema!(object {
            required: { "lead_id": string }
        }),
    )]
}

/// Dispatch a lead tool call.
pub async fn dispatch(
    session: &McpSession,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<String> {
    match name {
        "smartlead_lead_campaigns" => {
            let lead_id = get_id_arg(&args, "lead_id")?;
            let response = session.client()?.get_campaigns_by_lead_id(&lead_id).await?;
            Ok(format_response(&response))
        }

        _ => Err(SmartleadError::UnknownTool(name.to_string())),
    }
}

//! Sequence tools.
//!
//! Tools: smartlead_sequence_save, smartlead_sequence_get, smartlead_sequence_analytics

use serde_json::{Map, Value as JsonValue};

use crate::convert::{format_response, get_array_arg, get_id_arg, get_optional_string, get_string_arg};
use crate::error::{Result, SmartleadError};
use crate::schema;
use crate::session::McpSession;
use crate::tools::ToolDef;

/// Get all sequence tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "smartlead_sequence_save",
            "Save a campaign's email sequence. Each element of sequences needs seq_number \
             and seq_delay_details ({delay_in_days}, nonzero for follow-ups), plus either \
             subject/email_body for a plain step (blank subject keeps the thread) or \
             variant_distribution_type (MANUAL_EQUAL/MANUAL_PERCENTAGE/AI_EQUAL) with \
             seq_variants [{subject, email_body, variant_label, \
             variant_distribution_percentage?}]. AI_EQUAL additionally takes \
             winning_metric_property (OPEN_RATE/CLICK_RATE/REPLY_RATE/POSITIVE_REPLY_RATE) \
             and lead_distribution_percentage (min 20).",
            schema!(object {
                required: { "campaign_id": string, "sequences": array_object }
            }),
        ),
        ToolDef::new(
            "smartlead_sequence_get",
            "Fetch a campaign's sequence data, including per-step subjects, bodies, and \
             A/B variants.",
            schema!(object {
                required: { "campaign_id": string }
            }),
        ),
        ToolDef::new(
            "smartlead_sequence_analytics",
            "Fetch per-step engagement analytics for a campaign's sequence. start_date \
             and end_date are 'YYYY-MM-DD HH:MM:SS'; time_zone (e.g. 'Europe/London') is \
             optional.",
            schema!(object {
                required: { "campaign_id": string, "start_date": string, "end_date": string },
                optional: { "time_zone": string }
            }),
        ),
    ]
}

/// Dispatch a sequence tool call.
pub async fn dispatch(
    session: &McpSession,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<String> {
    match name {
        "smartlead_sequence_save" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let sequences = get_array_arg(&args, "sequences")?;
            let response = session
                .client()?
                .save_campaign_sequence(&campaign_id, &sequences)
                .await?;
            Ok(format_response(&response))
        }

        "smartlead_sequence_get" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let response = session.client()?.get_campaign_sequence(&campaign_id).await?;
            Ok(format_response(&response))
        }

        "smartlead_sequence_analytics" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let start_date = get_string_arg(&args, "start_date")?;
            let end_date = get_string_arg(&args, "end_date")?;
            let time_zone = get_optional_string(&args, "time_zone");
            let response = session
                .client()?
                .get_campaign_sequence_analytics(
                    &campaign_id,
                    &start_date,
                    &end_date,
                    time_zone.as_deref(),
                )
                .await?;
            Ok(format_response(&response))
        }

        _ => Err(SmartleadError::UnknownTool(name.to_string())),
    }
}

//! Campaign tools.
//!
//! Tools: smartlead_campaign_list, smartlead_campaign_get, smartlead_campaign_create,
//!        smartlead_campaign_update_schedule, smartlead_campaign_update_settings,
//!        smartlead_campaign_update_status, smartlead_campaign_analytics,
//!        smartlead_campaign_export_leads

use serde_json::{Map, Value as JsonValue};

use crate::client::{ScheduleUpdate, SettingsUpdate};
use crate::convert::{format_response, get_id_arg, get_object_arg, get_string_arg, parse_args};
use crate::error::{Result, SmartleadError};
use crate::schema;
use crate::session::McpSession;
use crate::tools::ToolDef;

/// Get all campaign tool definitions.
pub fn tools() -> Vec<ToolDef> {
    vec![
        ToolDef::new(
            "smartlead_campaign_list",
            "List all campaigns in the account. Returns an array of campaigns with id, \
             status (DRAFTED/ACTIVE/COMPLETED/STOPPED/PAUSED), name, schedule, and settings.",
            schema!(object {}),
        ),
        ToolDef::new(
            "smartlead_campaign_get",
            "Fetch a single campaign by ID, including its tracking, scheduling, and \
             plain-text settings.",
            schema!(object {
                required: { "campaign_id": string }
            }),
        ),
        ToolDef::new(
            "smartlead_campaign_create",
            "Create a campaign. campaign_data is passed to the service as-is; at minimum \
             it carries a name. Returns {ok, id, name, created_at}.",
            schema!(object {
                required: { "campaign_data": object }
            }),
        ),
        ToolDef::new(
            "smartlead_campaign_update_schedule",
            "Update a campaign's sending schedule. timezone is an IANA name (e.g. \
             'America/Los_Angeles'), days_of_the_week are 0-6, start_hour/end_hour are \
             24-hour HH:MM. Optional fields left out keep their current values \
             (service defaults: min_time_btw_emails 10, max_new_leads_per_day 20).",
            schema!(object {
                required: {
                    "campaign_id": string,
                    "timezone": string,
                    "days_of_the_week": array_integer,
                    "start_hour": string,
                    "end_hour": string,
                },
                optional: {
                    "min_time_btw_emails": integer,
                    "max_new_leads_per_day": integer,
                    "schedule_start_time": string,
                }
            }),
        ),
        ToolDef::new(
            "smartlead_campaign_update_settings",
            "Update a campaign's general settings. Every field is optional and only the \
             fields provided are changed. track_settings values: DONT_TRACK_EMAIL_OPEN, \
             DONT_TRACK_LINK_CLICK. stop_lead_settings values: REPLY_TO_AN_EMAIL, \
             CLICK_ON_A_LINK, OPEN_AN_EMAIL.",
            schema!(object {
                required: { "campaign_id": string },
                optional: {
                    "name": string,
                    "track_settings": array_string,
                    "stop_lead_settings": string,
                    "unsubscribe_text": string,
                    "send_as_plain_text": boolean,
                    "force_plain_text": boolean,
                    "enable_ai_esp_matching": boolean,
                    "follow_up_percentage": integer,
                    "client_id": integer,
                    "add_unsubscribe_tag": boolean,
                    "auto_pause_domain_leads_on_reply": boolean,
                    "ignore_ss_mailbox_sending_limit": boolean,
                    "bounce_autopause_threshold": string,
                    "out_of_office_detection_settings": object,
                    "ai_categorisation_options": array_integer,
                }
            }),
        ),
        ToolDef::new(
            "smartlead_campaign_update_status",
            "Change a campaign's status. status must be exactly one of PAUSED, STOPPED, \
             or START.",
            schema!(object {
                required: { "campaign_id": string, "status": string }
            }),
        ),
        ToolDef::new(
            "smartlead_campaign_analytics",
            "Fetch campaign analytics for a date range. start_date and end_date are \
             YYYY-MM-DD. Returns sent/open/click/reply/bounce counts for the range.",
            schema!(object {
                required: { "campaign_id": string, "start_date": string, "end_date": string }
            }),
        ),
        ToolDef::new(
            "smartlead_campaign_export_leads",
            "Export all leads of a campaign. The service returns CSV text (lead contact \
             details plus engagement counts), delivered wrapped as {\"message\": <csv>}.",
            schema!(object {
                required: { "campaign_id": string }
            }),
        ),
    ]
}

/// Dispatch a campaign tool call.
pub async fn dispatch(
    session: &McpSession,
    name: &str,
    args: Map<String, JsonValue>,
) -> Result<String> {
    match name {
        "smartlead_campaign_list" => {
            let response = session.client()?.list_campaigns().await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_get" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let response = session.client()?.get_campaign(&campaign_id).await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_create" => {
            let campaign_data = get_object_arg(&args, "campaign_data")?;
            let response = session.client()?.create_campaign(&campaign_data).await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_update_schedule" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let update: ScheduleUpdate = parse_args(&args)?;
            let response = session
                .client()?
                .update_campaign_schedule(&campaign_id, &update)
                .await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_update_settings" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let update: SettingsUpdate = parse_args(&args)?;
            let response = session
                .client()?
                .update_campaign_settings(&campaign_id, &update)
                .await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_update_status" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let status = get_string_arg(&args, "status")?;
            let response = session
                .client()?
                .patch_campaign_status(&campaign_id, &status)
                .await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_analytics" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let start_date = get_string_arg(&args, "start_date")?;
            let end_date = get_string_arg(&args, "end_date")?;
            let response = session
                .client()?
                .campaign_analytics_by_date(&campaign_id, &start_date, &end_date)
                .await?;
            Ok(format_response(&response))
        }

        "smartlead_campaign_export_leads" => {
            let campaign_id = get_id_arg(&args, "campaign_id")?;
            let response = session.client()?.export_campaign_leads(&campaign_id).await?;
            Ok(format_response(&response))
        }

        _ => Err(SmartleadError::UnknownTool(name.to_string())),
    }
}

//! Smartlead API client.
//!
//! Single choke-point for all outbound calls to the Smartlead service.
//! Enforces API-key injection, header defaults, and error normalization, and
//! carries one thin wrapper per campaign endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::error::{Result, SmartleadError};

/// Default base URL for the Smartlead API.
pub const DEFAULT_API_URL: &str = "https://server.smartlead.ai/api/v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration. Immutable once the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Smartlead API key. The service's sole auth mechanism.
    pub api_key: String,
    /// Base URL the endpoint paths are joined onto.
    pub api_url: String,
    /// Request timeout, applied when the client owns its HTTP connection.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the base URL.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Campaign schedule update. Optional fields are omitted from the request
/// body entirely when unset; the service distinguishes "not provided" from
/// "explicitly cleared".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleUpdate {
    /// Timezone name in IANA format, e.g. "America/Los_Angeles".
    pub timezone: String,
    /// Days the campaign sends on, 0-6 (Sunday-Saturday).
    pub days_of_the_week: Vec<u8>,
    /// Daily window start in 24-hour HH:MM format.
    pub start_hour: String,
    /// Daily window end in 24-hour HH:MM format.
    pub end_hour: String,
    /// Minutes between successive emails. Service default is 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_time_btw_emails: Option<u32>,
    /// Maximum number of new leads per day. Service default is 20.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_leads_per_day: Option<u32>,
    /// ISO timestamp the schedule takes effect. Service defaults to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start_time: Option<String>,
}

/// Campaign general-settings update. Every field is optional; only the fields
/// actually set are sent, so an unset field never clears a service-side value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    /// Campaign name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Tracking opt-outs: "DONT_TRACK_EMAIL_OPEN", "DONT_TRACK_LINK_CLICK".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_settings: Option<Vec<String>>,
    /// When to stop a lead: "REPLY_TO_AN_EMAIL", "CLICK_ON_A_LINK", "OPEN_AN_EMAIL".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_lead_settings: Option<String>,
    /// Custom unsubscribe text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_text: Option<String>,
    /// Send emails as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_as_plain_text: Option<bool>,
    /// Force plain text even for formatted emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_plain_text: Option<bool>,
    /// Match leads with mailboxes on a similar ESP when possible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_ai_esp_matching: Option<bool>,
    /// Percent of leads allocated to follow-ups (0-100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_percentage: Option<u32>,
    /// Client the campaign is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    /// Add an unsubscribe tag to outgoing emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_unsubscribe_tag: Option<bool>,
    /// Pause all leads on a domain when one replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause_domain_leads_on_reply: Option<bool>,
    /// Ignore the sending limit of shared mailboxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_ss_mailbox_sending_limit: Option<bool>,
    /// Bounce percentage that auto-pauses the campaign, as a string (e.g. "5").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounce_autopause_threshold: Option<String>,
    /// Out-of-office detection options. Opaque to this adapter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_office_detection_settings: Option<JsonValue>,
    /// Category IDs for AI-based reply categorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_categorisation_options: Option<Vec<i64>>,
}

/// Client for the Smartlead API.
///
/// Holds the API key, base URL, and a `reqwest::Client`. The HTTP connection
/// is either built by [`SmartleadClient::new`] (with the configured timeout)
/// or injected via [`SmartleadClient::with_http_client`], in which case its
/// lifecycle and timeout policy belong to the owner. Cheap to clone and safe
/// for concurrent in-flight calls; connection pooling is reqwest's concern.
#[derive(Debug, Clone)]
pub struct SmartleadClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl SmartleadClient {
    /// Create a client that owns its HTTP connection.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SmartleadError::Config(format!("failed to build HTTP client: {}", e)))?;
        Self::with_http_client(config, http)
    }

    /// Create a client around a caller-owned HTTP connection.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SmartleadError::Config(
                "Smartlead API key is empty".to_string(),
            ));
        }
        Ok(Self { config, http })
    }

    /// The configured base URL.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Make a request to the Smartlead API.
    ///
    /// The API key is appended to the query string of every call, POST
    /// included. Default JSON headers are merged with `extra_headers`, the
    /// caller's values winning on conflict. Bodies that fail to parse as JSON
    /// are wrapped as `{"message": <text>}`; status >= 400 raises an
    /// [`SmartleadError::Api`] carrying the parsed message and details.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<&JsonValue>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<JsonValue> {
        let url = join_url(&self.config.api_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(extra) = extra_headers {
            for (key, value) in extra.iter() {
                headers.insert(key, value.clone());
            }
        }

        let mut request = self
            .http
            .request(method.clone(), &url)
            .query(query)
            .query(&[("api_key", self.config.api_key.as_str())])
            .headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "Smartlead request");

        let response = request.send().await.map_err(|e| {
            tracing::error!(%url, error = %e, "Request error");
            SmartleadError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        let data: JsonValue =
            serde_json::from_str(&text).unwrap_or_else(|_| json!({ "message": text }));

        if status.as_u16() >= 400 {
            let message = match data.get("message") {
                Some(JsonValue::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => "Unknown error".to_string(),
            };
            let details = data.get("errors").filter(|v| !v.is_null()).cloned();
            return Err(SmartleadError::Api {
                status: status.as_u16(),
                message,
                details,
            });
        }

        Ok(data)
    }

    /// List all campaigns in the account.
    pub async fn list_campaigns(&self) -> Result<JsonValue> {
        self.request(Method::GET, "campaigns/", &[], None, None).await
    }

    /// Fetch a campaign by ID.
    pub async fn get_campaign(&self, campaign_id: &str) -> Result<JsonValue> {
        self.request(
            Method::GET,
            &format!("campaigns/{}", campaign_id),
            &[],
            None,
            None,
        )
        .await
    }

    /// Create a campaign. `campaign_data` is passed through to the service.
    pub async fn create_campaign(&self, campaign_data: &JsonValue) -> Result<JsonValue> {
        self.request(Method::POST, "campaigns/create", &[], Some(campaign_data), None)
            .await
    }

    /// Update a campaign's sending schedule.
    pub async fn update_campaign_schedule(
        &self,
        campaign_id: &str,
        update: &ScheduleUpdate,
    ) -> Result<JsonValue> {
        let body = serde_json::to_value(update)?;
        self.request(
            Method::POST,
            &format!("campaigns/{}/schedule", campaign_id),
            &[],
            Some(&body),
            None,
        )
        .await
    }

    /// Update a campaign's general settings. Unset fields are not sent.
    pub async fn update_campaign_settings(
        &self,
        campaign_id: &str,
        update: &SettingsUpdate,
    ) -> Result<JsonValue> {
        let body = serde_json::to_value(update)?;
        self.request(
            Method::POST,
            &format!("campaigns/{}/settings", campaign_id),
            &[],
            Some(&body),
            None,
        )
        .await
    }

    /// Save the email sequence of a campaign. Each sequence step is an opaque
    /// document with `seq_number`, `seq_delay_details`, and either a plain
    /// `subject`/`email_body` pair or `seq_variants` for A/B testing.
    pub async fn save_campaign_sequence(
        &self,
        campaign_id: &str,
        sequences: &[JsonValue],
    ) -> Result<JsonValue> {
        let body = json!({ "sequences": sequences });
        self.request(
            Method::POST,
            &format!("campaigns/{}/sequences", campaign_id),
            &[],
            Some(&body),
            None,
        )
        .await
    }

    /// Change a campaign's status. The service accepts "PAUSED", "STOPPED",
    /// or "START"; the value is passed through unvalidated.
    pub async fn patch_campaign_status(
        &self,
        campaign_id: &str,
        status: &str,
    ) -> Result<JsonValue> {
        let body = json!({ "status": status });
        self.request(
            Method::POST,
            &format!("campaigns/{}/status", campaign_id),
            &[],
            Some(&body),
            None,
        )
        .await
    }

    /// Fetch campaign analytics for a date range (YYYY-MM-DD bounds).
    pub async fn campaign_analytics_by_date(
        &self,
        campaign_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<JsonValue> {
        self.request(
            Method::GET,
            &format!("campaigns/{}/analytics-by-date", campaign_id),
            &[("start_date", start_date), ("end_date", end_date)],
            None,
            None,
        )
        .await
    }

    /// Fetch a campaign's sequence data, variants included.
    pub async fn get_campaign_sequence(&self, campaign_id: &str) -> Result<JsonValue> {
        self.request(
            Method::GET,
            &format!("campaigns/{}/sequences", campaign_id),
            &[],
            None,
            None,
        )
        .await
    }

    /// Fetch per-step engagement analytics for a campaign's sequence.
    /// `time_zone` is omitted from the query when unset.
    pub async fn get_campaign_sequence_analytics(
        &self,
        campaign_id: &str,
        start_date: &str,
        end_date: &str,
        time_zone: Option<&str>,
    ) -> Result<JsonValue> {
        let mut query = vec![("start_date", start_date), ("end_date", end_date)];
        if let Some(tz) = time_zone {
            query.push(("time_zone", tz));
        }
        self.request(
            Method::GET,
            &format!("campaigns/{}/sequence-analytics", campaign_id),
            &query,
            None,
            None,
        )
        .await
    }

    /// Fetch all campaigns a lead belongs to.
    pub async fn get_campaigns_by_lead_id(&self, lead_id: &str) -> Result<JsonValue> {
        self.request(
            Method::GET,
            &format!("leads/{}/campaigns", lead_id),
            &[],
            None,
            None,
        )
        .await
    }

    /// Export all leads of a campaign.
    ///
    /// The service answers with CSV text. `request` still tries JSON first
    /// and wraps the raw body as `{"message": <csv>}` when that fails, which
    /// is the path this endpoint actually takes.
    pub async fn export_campaign_leads(&self, campaign_id: &str) -> Result<JsonValue> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        self.request(
            Method::GET,
            &format!("campaigns/{}/leads-export", campaign_id),
            &[],
            None,
            Some(headers),
        )
        .await
    }
}

/// Join the base URL and an endpoint path, normalizing slashes on the seam.
fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("https://api.test/v1", "campaigns/"),
            "https://api.test/v1/campaigns/"
        );
        assert_eq!(
            join_url("https://api.test/v1/", "/campaigns/12"),
            "https://api.test/v1/campaigns/12"
        );
        assert_eq!(
            join_url("https://api.test/v1/", "campaigns/12/status"),
            "https://api.test/v1/campaigns/12/status"
        );
    }

    #[test]
    fn test_schedule_update_omits_unset_fields() {
        let update = ScheduleUpdate {
            timezone: "Australia/Sydney".to_string(),
            days_of_the_week: vec![1, 2, 3, 4, 5],
            start_hour: "10:00".to_string(),
            end_hour: "23:00".to_string(),
            min_time_btw_emails: None,
            max_new_leads_per_day: None,
            schedule_start_time: None,
        };
        let body = serde_json::to_value(&update).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        for key in ["timezone", "days_of_the_week", "start_hour", "end_hour"] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert!(!obj.contains_key("min_time_btw_emails"));
    }

    #[test]
    fn test_schedule_update_keeps_set_fields() {
        let update = ScheduleUpdate {
            timezone: "Europe/Helsinki".to_string(),
            days_of_the_week: vec![0, 6],
            start_hour: "01:11".to_string(),
            end_hour: "02:22".to_string(),
            min_time_btw_emails: Some(15),
            max_new_leads_per_day: None,
            schedule_start_time: Some("2023-04-25T07:29:25.978Z".to_string()),
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["min_time_btw_emails"], 15);
        assert_eq!(body["schedule_start_time"], "2023-04-25T07:29:25.978Z");
        assert!(body.get("max_new_leads_per_day").is_none());
    }

    #[test]
    fn test_settings_update_default_is_empty_body() {
        let update = SettingsUpdate::default();
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_settings_update_partial_body() {
        let update = SettingsUpdate {
            name: Some("Renamed".to_string()),
            follow_up_percentage: Some(40),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], "Renamed");
        assert_eq!(obj["follow_up_percentage"], 40);
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = SmartleadClient::new(ClientConfig::new("  ")).unwrap_err();
        assert!(matches!(err, SmartleadError::Config(_)));
    }

    #[test]
    fn test_schedule_update_deserializes_from_tool_args() {
        // Tool arguments carry campaign_id alongside the body fields; unknown
        // fields are ignored on the way in.
        let args = serde_json::json!({
            "campaign_id": "123",
            "timezone": "Australia/Sydney",
            "days_of_the_week": [1, 2, 3],
            "start_hour": "10:00",
            "end_hour": "23:00"
        });
        let update: ScheduleUpdate = serde_json::from_value(args).unwrap();
        assert_eq!(update.timezone, "Australia/Sydney");
        assert!(update.min_time_btw_emails.is_none());
    }
}

//! External health-data gateway.
//!
//! Fetches live topic summaries and disease statistics from public REST
//! endpoints. Calls are synchronous and blocking with bounded timeouts, one
//! attempt each - no retries, no caching. Every failure maps to a
//! `GatewayError` variant so callers must take the fallback branch
//! explicitly; a gateway error is never shown raw to the user.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

/// Timeout for the topic-summary endpoint.
const SUMMARY_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for the statistics endpoints.
const STATS_TIMEOUT: Duration = Duration::from_secs(8);

/// Descriptive client identifier sent with every request.
const USER_AGENT: &str = "ArogyaAssistant/0.3 (+https://github.com/arogya-assistant/arogya)";

/// Summaries at or below this length are treated as stub responses.
const SUMMARY_MIN_CHARS: usize = 80;
/// Longer summaries are truncated with an ellipsis.
const SUMMARY_MAX_CHARS: usize = 500;

/// Endpoint configuration, injected so tests and deployments can repoint it.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Topic-summary service (MedlinePlus Connect shape).
    pub summary_url: String,
    /// Statistics service base (disease.sh v3 covid-19 shape).
    pub stats_base_url: String,
    /// Region used for per-country statistics and vaccination coverage.
    pub region: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            summary_url: "https://connect.medlineplus.gov/service".to_string(),
            stats_base_url: "https://disease.sh/v3/covid-19".to_string(),
            region: "india".to_string(),
        }
    }
}

/// Gateway call failures. All recovered locally by falling back to the
/// knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),

    #[error("no usable entry in response")]
    Empty,
}

/// Blocking client for the public health endpoints.
pub struct HealthGateway {
    config: GatewayConfig,
    summary_client: reqwest::blocking::Client,
    stats_client: reqwest::blocking::Client,
}

impl HealthGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let summary_client = reqwest::blocking::Client::builder()
            .timeout(SUMMARY_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let stats_client = reqwest::blocking::Client::builder()
            .timeout(STATS_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            config,
            summary_client,
            stats_client,
        })
    }

    pub fn with_defaults() -> Result<Self, GatewayError> {
        Self::new(GatewayConfig::default())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Fetch an authoritative summary for a topic key.
    ///
    /// Accepts the result only when the summary is long enough to be useful;
    /// near-empty stubs come back as `GatewayError::Empty` so the caller
    /// falls through to the knowledge base.
    pub fn fetch_topic_summary(&self, topic: &str) -> Result<String, GatewayError> {
        debug!(topic, "fetching topic summary");

        let body = self.get_json(
            &self.summary_client,
            &self.config.summary_url,
            &[
                ("mainSearchCriteria.v.c", topic),
                ("informationRecipient.languageCode.c", "en"),
                ("knowledgeResponseType", "application/json"),
            ],
        )?;

        format_topic_summary(&body).ok_or(GatewayError::Empty)
    }

    /// Fetch per-country COVID statistics for the configured region.
    pub fn fetch_covid_stats(&self) -> Result<String, GatewayError> {
        let url = format!("{}/countries/{}", self.config.stats_base_url, self.config.region);
        let body = self.get_json(&self.stats_client, &url, &[])?;
        Ok(format_covid_stats(&body, &title_case(&self.config.region)))
    }

    /// Fetch global COVID statistics.
    pub fn fetch_global_stats(&self) -> Result<String, GatewayError> {
        let url = format!("{}/all", self.config.stats_base_url);
        let body = self.get_json(&self.stats_client, &url, &[])?;
        Ok(format_global_stats(&body))
    }

    /// Fetch the latest vaccination-coverage figure for the region.
    pub fn fetch_vaccination_coverage(&self) -> Result<String, GatewayError> {
        let url = format!(
            "{}/vaccine/coverage/countries/{}",
            self.config.stats_base_url, self.config.region
        );
        let body = self.get_json(&self.stats_client, &url, &[("lastdays", "1")])?;
        format_vaccination_coverage(&body).ok_or(GatewayError::Empty)
    }

    /// Single-attempt GET returning parsed JSON.
    fn get_json(
        &self,
        client: &reqwest::blocking::Client,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, GatewayError> {
        let mut request = client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().map_err(|e| {
            warn!(url, error = %e, "gateway request failed");
            GatewayError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "gateway returned non-success");
            return Err(GatewayError::Status(status.as_u16()));
        }

        response
            .json()
            .map_err(|e| GatewayError::Payload(e.to_string()))
    }
}

/// Extract and format the first feed entry of a topic-summary response.
///
/// Returns `None` when no entry exists or the summary is a stub.
pub(crate) fn format_topic_summary(body: &Value) -> Option<String> {
    let entry = body
        .get("feed")?
        .get("entry")?
        .as_array()?
        .first()?;

    let title = text_field(entry.get("title")?);
    let summary = text_field(entry.get("summary")?);

    if title.is_empty() || summary.chars().count() <= SUMMARY_MIN_CHARS {
        return None;
    }

    let summary = if summary.chars().count() > SUMMARY_MAX_CHARS {
        let truncated: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        summary
    };

    let link = entry
        .get("link")
        .and_then(Value::as_array)
        .and_then(|links| {
            links.iter().find_map(|l| {
                if l.get("rel")?.as_str()? == "alternate" {
                    l.get("href")?.as_str().map(str::to_string)
                } else {
                    None
                }
            })
        })
        .unwrap_or_else(|| "https://medlineplus.gov".to_string());

    Some(format!(
        "📚 **{title}**\n\n\
         {summary}\n\n\
         ⚠️ **Source: MedlinePlus (U.S. National Library of Medicine)**\n\
         This is general health information. Not a substitute for professional medical advice.\n\n\
         📞 For diagnosis: Consult doctor or call {}\n\
         🏥 Visit nearest PHC/Government hospital\n\n\
         🔗 Read more: {link}",
        crate::HELPLINE,
    ))
}

/// MedlinePlus fields come either as `{"_value": "..."}` or as plain strings.
fn text_field(value: &Value) -> String {
    match value.get("_value") {
        Some(inner) => inner.as_str().unwrap_or_default().to_string(),
        None => value.as_str().unwrap_or_default().to_string(),
    }
}

/// Format per-country statistics. Missing fields render as "N/A".
pub(crate) fn format_covid_stats(body: &Value, scope: &str) -> String {
    format!(
        "📊 **COVID-19 Statistics - {scope}**\n\n\
         **Current Status:**\n\
         • Total Cases: {}\n\
         • Active Cases: {}\n\
         • Recovered: {}\n\
         • Deaths: {}\n\
         • Today's Cases: {}\n\n\
         **Resources:**\n\
         📱 CoWIN: cowin.gov.in\n\
         📞 COVID Helpline: 1800-11-4377\n\
         🏥 Free testing at Government hospitals\n\
         ⚠️ Follow COVID-appropriate behavior",
        count_field(body, "cases"),
        count_field(body, "active"),
        count_field(body, "recovered"),
        count_field(body, "deaths"),
        count_field(body, "todayCases"),
    )
}

/// Format the global statistics variant.
pub(crate) fn format_global_stats(body: &Value) -> String {
    format!(
        "🌍 **Global COVID-19 Data:**\n\n\
         • Total Cases: {}\n\
         • Deaths: {}\n\
         • Recovered: {}\n\
         • Active: {}\n\n\
         📊 Source: Disease.sh (Live Data)",
        count_field(body, "cases"),
        count_field(body, "deaths"),
        count_field(body, "recovered"),
        count_field(body, "active"),
    )
}

/// Format the latest entry of a vaccination-coverage timeline.
pub(crate) fn format_vaccination_coverage(body: &Value) -> Option<String> {
    let timeline = body.get("timeline")?.as_object()?;
    let (date, doses) = timeline.iter().next()?;
    let doses = doses.as_i64().map(group_thousands).unwrap_or_else(|| "N/A".to_string());

    Some(format!(
        "💉 **COVID-19 Vaccination Data:**\n\n\
         • Total Doses: {doses}\n\
         • Date: {date}\n\n\
         📱 Register: CoWIN Portal\n\
         🆓 FREE for all citizens\n\
         📞 Helpline: {}",
        crate::HELPLINE,
    ))
}

/// Numeric field with thousands separators, or "N/A" when absent.
fn count_field(body: &Value, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_i64)
        .map(group_thousands)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Group digits in threes: 44997014 -> "44,997,014".
pub(crate) fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(44_997_014), "44,997,014");
    }

    #[test]
    fn stats_render_missing_fields_as_na() {
        let body = json!({ "cases": 100000, "deaths": 531000 });
        let text = format_covid_stats(&body, "India");
        assert!(text.contains("Total Cases: 100,000"));
        assert!(text.contains("Active Cases: N/A"));
        assert!(text.contains("Today's Cases: N/A"));
    }

    #[test]
    fn summary_accepts_long_entries_only() {
        let stub = json!({
            "feed": { "entry": [
                { "title": {"_value": "Dengue"}, "summary": {"_value": "short"} }
            ]}
        });
        assert!(format_topic_summary(&stub).is_none());

        let long_summary = "Dengue is a mosquito-borne viral infection causing \
            high fever, severe headache, and joint pain. It occurs in tropical \
            climates and requires prompt supportive care.";
        let full = json!({
            "feed": { "entry": [
                {
                    "title": {"_value": "Dengue"},
                    "summary": {"_value": long_summary},
                    "link": [
                        {"rel": "self", "href": "https://example.org/raw"},
                        {"rel": "alternate", "href": "https://medlineplus.gov/dengue.html"}
                    ]
                }
            ]}
        });
        let text = format_topic_summary(&full).unwrap();
        assert!(text.contains("**Dengue**"));
        assert!(text.contains("https://medlineplus.gov/dengue.html"));
        assert!(text.contains("Not a substitute"));
    }

    #[test]
    fn summary_truncated_at_limit() {
        let long = "x".repeat(700);
        let body = json!({
            "feed": { "entry": [
                { "title": {"_value": "Topic"}, "summary": {"_value": long} }
            ]}
        });
        let text = format_topic_summary(&body).unwrap();
        let rendered: String = text
            .lines()
            .find(|l| l.starts_with('x'))
            .unwrap()
            .to_string();
        assert_eq!(rendered.chars().count(), SUMMARY_MAX_CHARS + 3);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn summary_fields_accept_plain_strings() {
        let body = json!({
            "feed": { "entry": [
                {
                    "title": "Plain Title",
                    "summary": "p".repeat(100)
                }
            ]}
        });
        let text = format_topic_summary(&body).unwrap();
        assert!(text.contains("Plain Title"));
    }

    #[test]
    fn missing_feed_is_none() {
        assert!(format_topic_summary(&json!({})).is_none());
        assert!(format_topic_summary(&json!({"feed": {"entry": []}})).is_none());
    }

    #[test]
    fn coverage_reports_latest_dose_count() {
        let body = json!({
            "country": "India",
            "timeline": { "7/30/23": 2206746912_i64 }
        });
        let text = format_vaccination_coverage(&body).unwrap();
        assert!(text.contains("2,206,746,912"));
        assert!(text.contains("7/30/23"));
    }

    #[test]
    fn coverage_without_timeline_is_none() {
        assert!(format_vaccination_coverage(&json!({"country": "India"})).is_none());
    }

    #[test]
    fn unreachable_endpoint_yields_error_not_panic() {
        // Port 9 (discard) refuses connections immediately.
        let gateway = HealthGateway::new(GatewayConfig {
            summary_url: "http://127.0.0.1:9/service".to_string(),
            stats_base_url: "http://127.0.0.1:9/v3".to_string(),
            region: "india".to_string(),
        })
        .unwrap();

        assert!(matches!(
            gateway.fetch_topic_summary("dengue"),
            Err(GatewayError::Network(_))
        ));
        assert!(matches!(gateway.fetch_covid_stats(), Err(GatewayError::Network(_))));
    }
}

//! Notion database source.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};

use acronym_types::{AcronymEntry, NotionSettings};

use super::{GlossarySource, SourceError};

/// Title property holding the acronym
const ACRONYM_PROPERTY: &str = "Acronym";

/// Rich text property holding the expansion
const DESCRIPTION_PROPERTY: &str = "Description";

/// Configuration for the Notion source.
#[derive(Debug, Clone)]
pub struct NotionSourceConfig {
    /// API base URL (e.g., "https://api.notion.com/v1")
    pub base_url: String,

    /// Value of the `Notion-Version` header
    pub api_version: String,

    /// Integration token
    pub api_key: Option<SecretString>,

    /// Database holding the glossary
    pub database_id: Option<String>,

    /// Request timeout
    pub timeout: Duration,
}

impl NotionSourceConfig {
    /// Create config for the public Notion API.
    pub fn new(api_key: impl Into<String>, database_id: impl Into<String>) -> Self {
        let defaults = NotionSettings::default();
        Self {
            base_url: defaults.base_url,
            api_version: defaults.api_version,
            api_key: Some(SecretString::from(api_key.into())),
            database_id: Some(database_id.into()),
            timeout: Duration::from_secs(defaults.timeout_secs),
        }
    }

    pub fn from_settings(settings: &NotionSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            api_version: settings.api_version.clone(),
            api_key: settings.api_key.clone().map(SecretString::from),
            database_id: settings.database_id.clone(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<Page>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    id: String,
    #[serde(default)]
    properties: HashMap<String, PropertyValue>,
}

/// Only the two text-bearing property shapes are read.
#[derive(Debug, Deserialize)]
struct PropertyValue {
    #[serde(default)]
    title: Option<Vec<RichText>>,
    #[serde(default)]
    rich_text: Option<Vec<RichText>>,
}

#[derive(Debug, Deserialize)]
struct RichText {
    plain_text: String,
}

/// Glossary source backed by a Notion database.
///
/// The HTTP client is built once and reused; every fetch still goes to
/// the network.
pub struct NotionSource {
    client: Client,
    config: NotionSourceConfig,
}

impl NotionSource {
    pub fn new(config: NotionSourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Run the database query. Exactly one page is requested.
    async fn query_database(&self) -> Result<QueryResponse, SourceError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| SourceError::Unavailable("Notion API key is not configured".into()))?;
        let database_id = self.config.database_id.as_deref().ok_or_else(|| {
            SourceError::Unavailable("Notion database id is not configured".into())
        })?;

        let url = format!(
            "{}/databases/{}/query",
            self.config.base_url.trim_end_matches('/'),
            database_id
        );
        debug!(url = %url, "Querying glossary database");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .header("Notion-Version", self.config.api_version.as_str())
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unavailable(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| SourceError::Unavailable(format!("Malformed query response: {}", e)))
    }
}

/// First text segment of a title or rich text property.
fn first_segment<'a>(
    page: &'a Page,
    property: &'static str,
    select: fn(&PropertyValue) -> Option<&Vec<RichText>>,
) -> Result<&'a str, SourceError> {
    page.properties
        .get(property)
        .and_then(select)
        .and_then(|segments| segments.first())
        .map(|segment| segment.plain_text.as_str())
        .ok_or_else(|| SourceError::MissingField {
            page_id: page.id.clone(),
            property,
        })
}

fn page_to_entry(page: &Page) -> Result<AcronymEntry, SourceError> {
    let acronym = first_segment(page, ACRONYM_PROPERTY, |p| p.title.as_ref())?;
    let description = first_segment(page, DESCRIPTION_PROPERTY, |p| p.rich_text.as_ref())?;
    Ok(AcronymEntry::new(acronym, description))
}

#[async_trait]
impl GlossarySource for NotionSource {
    async fn fetch_acronyms(&self) -> Result<Vec<AcronymEntry>, SourceError> {
        let response = self.query_database().await?;

        if response.has_more {
            warn!(
                next_cursor = ?response.next_cursor,
                fetched = response.results.len(),
                "Glossary spans more than one page; remaining rows were not fetched"
            );
        }

        let entries = response
            .results
            .iter()
            .map(page_to_entry)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = entries.len(), "Fetched glossary");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn row(id: &str, acronym: &str, description: &str) -> serde_json::Value {
        json!({
            "object": "page",
            "id": id,
            "properties": {
                "Acronym": {
                    "id": "title",
                    "type": "title",
                    "title": [{ "type": "text", "plain_text": acronym }]
                },
                "Description": {
                    "id": "desc",
                    "type": "rich_text",
                    "rich_text": [
                        { "type": "text", "plain_text": description },
                        { "type": "text", "plain_text": " (ignored)" }
                    ]
                }
            }
        })
    }

    fn source_for(server: &MockServer) -> NotionSource {
        let config = NotionSourceConfig::new("test-key", "db-1").with_base_url(server.uri());
        NotionSource::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_reads_first_segments() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/databases/db-1/query"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("Notion-Version", "2022-06-28"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [
                    row("p1", "PR", "Pull Request"),
                    row("p2", "CI", "Continuous Integration")
                ],
                "has_more": false,
                "next_cursor": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let entries = source_for(&server).fetch_acronyms().await.unwrap();
        assert_eq!(
            entries,
            vec![
                AcronymEntry::new("PR", "Pull Request"),
                AcronymEntry::new("CI", "Continuous Integration"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_does_not_follow_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/databases/db-1/query"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [row("p1", "PR", "Pull Request")],
                "has_more": true,
                "next_cursor": "cursor-2"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let entries = source_for(&server).fetch_acronyms().await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_database() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        let entries = source_for(&server).fetch_acronyms().await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_empty_rich_text_is_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "id": "p9",
                    "properties": {
                        "Acronym": { "type": "title", "title": [{ "plain_text": "WIP" }] },
                        "Description": { "type": "rich_text", "rich_text": [] }
                    }
                }]
            })))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch_acronyms().await.unwrap_err();
        match err {
            SourceError::MissingField { page_id, property } => {
                assert_eq!(page_id, "p9");
                assert_eq!(property, "Description");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_property_is_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "id": "p3",
                    "properties": {
                        "Description": { "type": "rich_text", "rich_text": [{ "plain_text": "x" }] }
                    }
                }]
            })))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch_acronyms().await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::MissingField {
                property: "Acronym",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_upstream_error_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .expect(1)
            .mount(&server)
            .await;

        let err = source_for(&server).fetch_acronyms().await.unwrap_err();
        match err {
            SourceError::Unavailable(msg) => assert!(msg.contains("401")),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = source_for(&server).fetch_acronyms().await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "results": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = NotionSourceConfig::new("test-key", "db-1")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(100));
        let source = NotionSource::new(config).unwrap();

        let err = source.fetch_acronyms().await.unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_missing_credentials_fail_at_fetch() {
        let config = NotionSourceConfig::from_settings(&NotionSettings::default());
        let source = NotionSource::new(config).unwrap();

        let err = source.fetch_acronyms().await.unwrap_err();
        match err {
            SourceError::Unavailable(msg) => assert!(msg.contains("API key")),
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_config_from_settings() {
        let settings = NotionSettings {
            api_key: Some("k".to_string()),
            database_id: Some("db".to_string()),
            timeout_secs: 7,
            ..Default::default()
        };
        let config = NotionSourceConfig::from_settings(&settings);
        assert_eq!(config.api_key.unwrap().expose_secret(), "k");
        assert_eq!(config.database_id.as_deref(), Some("db"));
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert!(config.base_url.contains("api.notion.com"));
    }
}

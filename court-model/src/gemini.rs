//! Gemini `generateContent` client.

use std::fmt::Write as _;

use async_trait::async_trait;
use court_core::{CourtError, Result, TextGeneration, Turn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Non-streaming client for the Gemini generateContent endpoint.
///
/// The role instruction travels as the system instruction; the
/// transcript is rendered into a single user content with one
/// speaker-prefixed line per turn.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| CourtError::Service(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, api_key: api_key.into(), model: model.into(), base_url: None })
    }

    /// Override the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn api_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(GEMINI_API_BASE);
        format!("{}/models/{}:generateContent", base.trim_end_matches('/'), self.model)
    }

    fn build_request(instruction: &str, history: &[Turn]) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: ContentBody::text(instruction),
            contents: vec![ContentBody::text(render_history(history)).with_role("user")],
        }
    }
}

fn render_history(history: &[Turn]) -> String {
    if history.is_empty() {
        return "(no prior statements)".to_string();
    }

    let mut rendered = String::new();
    for turn in history {
        let _ = writeln!(rendered, "{}: {}", turn.speaker, turn.text);
    }
    rendered
}

fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let text: String = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content.parts.iter().filter_map(|p| p.text.as_deref()).collect::<Vec<_>>().concat()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(CourtError::Service("Gemini returned no text candidates".to_string()));
    }

    Ok(text)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: ContentBody,
    contents: Vec<ContentBody>,
}

#[derive(Debug, Clone, Serialize)]
struct ContentBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<PartBody>,
}

impl ContentBody {
    fn text(text: impl Into<String>) -> Self {
        Self { role: None, parts: vec![PartBody { text: text.into() }] }
    }

    fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
struct PartBody {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl TextGeneration for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, instruction: &str, history: &[Turn]) -> Result<String> {
        tracing::debug!(model = %self.model, history_len = history.len(), "calling generateContent");
        let request = Self::build_request(instruction, history);

        let response = self
            .http
            .post(self.api_url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| CourtError::Service(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CourtError::Service(format!("Gemini API error ({}): {}", status, body)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CourtError::Service(format!("failed to parse Gemini response: {}", e)))?;

        extract_text(body)
    }
}

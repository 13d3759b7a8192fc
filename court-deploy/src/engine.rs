//! Thin client for the managed Agent Engine control plane.

use court_agent::AgentManifest;
use court_core::{CourtError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Connection settings for one project/location pair.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub project_id: String,
    pub location: String,
    pub access_token: String,
    /// Override the API base URL (tests, proxies).
    pub base_url: Option<String>,
}

impl EngineConfig {
    fn api_base(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com/v1beta1", self.location),
        }
    }

    fn engines_url(&self) -> String {
        format!(
            "{}/projects/{}/locations/{}/reasoningEngines",
            self.api_base(),
            self.project_id,
            self.location
        )
    }
}

/// Handle returned by the control plane.
///
/// Every field the API may omit is an explicit `Option`; `resource()`
/// applies the fallback rule once instead of callers probing fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteAgent {
    pub name: Option<String>,
    pub resource_name: Option<String>,
    pub display_name: Option<String>,
    pub create_time: Option<String>,
}

impl RemoteAgent {
    pub fn resource(&self) -> Option<&str> {
        self.resource_name.as_deref().or(self.name.as_deref())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateEngineRequest<'a> {
    display_name: &'a str,
    spec: EngineSpec<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EngineSpec<'a> {
    agent_manifest: &'a AgentManifest,
    requirements: &'a [String],
}

pub struct AgentEngineClient {
    http: Client,
    config: EngineConfig,
}

impl AgentEngineClient {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| CourtError::Deployment(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Upload a serialized composition; returns the remote handle.
    ///
    /// A handle carrying no identifier at all is treated as a failed
    /// deployment so callers never persist an unusable record.
    pub async fn create(
        &self,
        manifest: &AgentManifest,
        requirements: &[String],
        display_name: &str,
    ) -> Result<RemoteAgent> {
        let request = CreateEngineRequest {
            display_name,
            spec: EngineSpec { agent_manifest: manifest, requirements },
        };

        tracing::debug!(url = %self.config.engines_url(), display_name, "creating reasoning engine");
        let response = self
            .http
            .post(self.config.engines_url())
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| CourtError::Deployment(format!("Agent Engine request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CourtError::Deployment(format!(
                "Agent Engine error ({}): {}",
                status, body
            )));
        }

        let agent: RemoteAgent = response.json().await.map_err(|e| {
            CourtError::Deployment(format!("failed to parse Agent Engine response: {}", e))
        })?;

        if agent.resource().is_none() {
            return Err(CourtError::Deployment(
                "Agent Engine returned a handle with no identifier".to_string(),
            ));
        }

        Ok(agent)
    }

    /// Delete a previously created engine by resource identifier.
    pub async fn delete(&self, resource: &str) -> Result<()> {
        let url = format!("{}/{}", self.config.api_base(), resource.trim_start_matches('/'));

        tracing::debug!(%url, "deleting reasoning engine");
        let response = self
            .http
            .delete(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| CourtError::Deployment(format!("Agent Engine request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CourtError::Deployment(format!(
                "Agent Engine error ({}): {}",
                status, body
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig {
            project_id: "demo-project".to_string(),
            location: "us-central1".to_string(),
            access_token: "token".to_string(),
            base_url: None,
        }
    }

    #[test]
    fn test_engines_url() {
        assert_eq!(
            config().engines_url(),
            "https://us-central1-aiplatform.googleapis.com/v1beta1/projects/demo-project/locations/us-central1/reasoningEngines"
        );

        let config = EngineConfig { base_url: Some("http://localhost:9090/".to_string()), ..config() };
        assert_eq!(
            config.engines_url(),
            "http://localhost:9090/projects/demo-project/locations/us-central1/reasoningEngines"
        );
    }

    #[test]
    fn test_remote_agent_optional_fields() {
        let agent: RemoteAgent = serde_json::from_value(serde_json::json!({
            "name": "projects/demo-project/locations/us-central1/reasoningEngines/123",
            "createTime": "2026-08-07T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            agent.resource(),
            Some("projects/demo-project/locations/us-central1/reasoningEngines/123")
        );
        assert!(agent.resource_name.is_none());
        assert!(agent.display_name.is_none());
        assert_eq!(agent.create_time.as_deref(), Some("2026-08-07T12:00:00Z"));

        let empty: RemoteAgent = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(empty.resource(), None);
    }

    #[test]
    fn test_create_request_shape() {
        let manifest = court_agent::court_manifest(
            "gemini-2.0-flash-001",
            court_agent::DebateConfig::default(),
        );
        let requirements = vec!["google-cloud-aiplatform[agent_engines,adk]".to_string()];
        let request = CreateEngineRequest {
            display_name: "Court_AGENT",
            spec: EngineSpec { agent_manifest: &manifest, requirements: &requirements },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["displayName"], "Court_AGENT");
        assert_eq!(json["spec"]["agentManifest"]["kind"], "root");
        assert_eq!(json["spec"]["requirements"][0], "google-cloud-aiplatform[agent_engines,adk]");
    }
}

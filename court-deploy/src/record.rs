use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use court_core::{CourtError, Result};
use serde::{Deserialize, Serialize};

/// Fixed path of the persisted deployment record.
pub const RECORD_PATH: &str = "deployment_info.json";

/// What `deploy` persists after a confirmed deployment, and what
/// `undeploy` resolves the remote handle from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub project_id: String,
    pub location: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    pub deployed_at: DateTime<Utc>,
}

impl DeploymentRecord {
    /// Identifier used for remote deletion; full resource names win over
    /// bare names.
    pub fn resource(&self) -> Option<&str> {
        self.resource_name.as_deref().or(self.name.as_deref())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CourtError::Config(format!(
                "no deployment record at {}; nothing to undeploy",
                path.display()
            )));
        }

        let json = fs::read_to_string(path)?;
        let record = serde_json::from_str(&json)?;
        Ok(record)
    }

    pub fn remove(path: impl AsRef<Path>) -> Result<()> {
        fs::remove_file(path)?;
        Ok(())
    }
}

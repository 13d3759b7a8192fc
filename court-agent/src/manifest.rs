use serde::{Deserialize, Serialize};

/// Serializable description of a full agent composition.
///
/// This is what the deployment collaborator consumes: the whole tree down
/// to every role prompt, with no runtime state in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentManifest {
    Role {
        name: String,
        description: String,
        instruction: String,
        model: String,
    },
    Loop {
        name: String,
        description: String,
        max_iterations: u32,
        sub_agents: Vec<AgentManifest>,
    },
    Sequential {
        name: String,
        description: String,
        sub_agents: Vec<AgentManifest>,
    },
    Root {
        name: String,
        description: String,
        instruction: String,
        model: String,
        sub_agents: Vec<AgentManifest>,
    },
}

impl AgentManifest {
    pub fn name(&self) -> &str {
        match self {
            AgentManifest::Role { name, .. }
            | AgentManifest::Loop { name, .. }
            | AgentManifest::Sequential { name, .. }
            | AgentManifest::Root { name, .. } => name,
        }
    }

    pub fn sub_agents(&self) -> &[AgentManifest] {
        match self {
            AgentManifest::Role { .. } => &[],
            AgentManifest::Loop { sub_agents, .. }
            | AgentManifest::Sequential { sub_agents, .. }
            | AgentManifest::Root { sub_agents, .. } => sub_agents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AgentManifest {
        AgentManifest::Root {
            name: "RootAgent".to_string(),
            description: "entry point".to_string(),
            instruction: "dispatch".to_string(),
            model: "test-model".to_string(),
            sub_agents: vec![AgentManifest::Sequential {
                name: "Court".to_string(),
                description: String::new(),
                sub_agents: vec![AgentManifest::Loop {
                    name: "DebateLoop".to_string(),
                    description: String::new(),
                    max_iterations: 3,
                    sub_agents: vec![AgentManifest::Role {
                        name: "Prosecutor".to_string(),
                        description: String::new(),
                        instruction: "argue guilt".to_string(),
                        model: "test-model".to_string(),
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_manifest_accessors() {
        let manifest = sample();
        assert_eq!(manifest.name(), "RootAgent");
        assert_eq!(manifest.sub_agents().len(), 1);
        assert_eq!(manifest.sub_agents()[0].name(), "Court");
    }

    #[test]
    fn test_manifest_serialization_is_kind_tagged() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["kind"], "root");
        assert_eq!(json["sub_agents"][0]["kind"], "sequential");
        assert_eq!(json["sub_agents"][0]["sub_agents"][0]["kind"], "loop");
        assert_eq!(json["sub_agents"][0]["sub_agents"][0]["max_iterations"], 3);
    }

    #[test]
    fn test_manifest_roundtrip() {
        let manifest = sample();
        let encoded = serde_json::to_string(&manifest).unwrap();
        let decoded: AgentManifest = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, manifest);
    }
}

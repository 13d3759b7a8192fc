use std::sync::Arc;

use court_core::{Result, RoleSpec, TextGeneration, Transcript};

use crate::manifest::AgentManifest;

/// A named, stateless leaf agent bound to one role prompt.
///
/// Holds no conversation state of its own; every call receives the
/// accumulated transcript from the orchestrator.
pub struct RoleAgent {
    spec: RoleSpec,
    generator: Arc<dyn TextGeneration>,
}

impl std::fmt::Debug for RoleAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleAgent")
            .field("name", &self.spec.name)
            .field("model", &self.generator.name())
            .finish()
    }
}

impl RoleAgent {
    pub fn new(spec: RoleSpec, generator: Arc<dyn TextGeneration>) -> Self {
        Self { spec, generator }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn description(&self) -> &str {
        &self.spec.description
    }

    pub fn spec(&self) -> &RoleSpec {
        &self.spec
    }

    pub fn model_name(&self) -> &str {
        self.generator.name()
    }

    /// One request/response exchange attributed to this role.
    ///
    /// Failures from the generation capability propagate untouched; there
    /// is no internal retry.
    pub async fn generate(&self, transcript: &Transcript) -> Result<String> {
        tracing::debug!(role = %self.spec.name, history_len = transcript.len(), "generating turn");
        self.generator.generate(&self.spec.instruction, transcript.turns()).await
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest::Role {
            name: self.spec.name.clone(),
            description: self.spec.description.clone(),
            instruction: self.spec.instruction.clone(),
            model: self.generator.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use court_core::Turn;

    struct UpperGeneration;

    #[async_trait]
    impl TextGeneration for UpperGeneration {
        fn name(&self) -> &str {
            "upper"
        }

        async fn generate(&self, instruction: &str, _history: &[Turn]) -> Result<String> {
            Ok(instruction.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_role_agent_generates_once() {
        let agent = RoleAgent::new(
            RoleSpec::new("Prosecutor", "argue guilt").with_description("prosecution"),
            Arc::new(UpperGeneration),
        );

        assert_eq!(agent.name(), "Prosecutor");
        assert_eq!(agent.description(), "prosecution");
        assert_eq!(agent.model_name(), "upper");

        let text = agent.generate(&Transcript::new()).await.unwrap();
        assert_eq!(text, "ARGUE GUILT");
    }

    #[test]
    fn test_role_agent_manifest() {
        let agent =
            RoleAgent::new(RoleSpec::new("Judge", "rule on the case"), Arc::new(UpperGeneration));

        let manifest = agent.manifest();
        assert!(matches!(
            manifest,
            AgentManifest::Role { ref name, ref model, .. } if name == "Judge" && model == "upper"
        ));
    }
}

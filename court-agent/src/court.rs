use court_core::{Result, Verdict};

use crate::debate::DebateLoop;
use crate::manifest::AgentManifest;
use crate::role_agent::RoleAgent;

/// Sequential composer: runs the debate to completion, then asks the
/// judge for a verdict over the full transcript, exactly once.
pub struct Court {
    name: String,
    description: String,
    debate: DebateLoop,
    judge: RoleAgent,
}

impl Court {
    pub fn new(debate: DebateLoop, judge: RoleAgent) -> Self {
        Self { name: "Court".to_string(), description: String::new(), debate, judge }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn debate(&self) -> &DebateLoop {
        &self.debate
    }

    pub fn judge(&self) -> &RoleAgent {
        &self.judge
    }

    /// Errors from the debate or the judge propagate as-is; there is no
    /// local recovery.
    pub async fn run(&mut self) -> Result<Verdict> {
        let transcript = self.debate.run().await?;
        let text = self.judge.generate(transcript).await?;
        Ok(Verdict { text, transcript_len: transcript.len() })
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest::Sequential {
            name: self.name.clone(),
            description: self.description.clone(),
            sub_agents: vec![self.debate.manifest(), self.judge.manifest()],
        }
    }
}

/// Single well-known invocation target for the whole composition;
/// forwards to the court and returns its verdict unchanged.
pub struct RootAgent {
    name: String,
    description: String,
    instruction: String,
    court: Court,
}

impl RootAgent {
    pub fn new(court: Court) -> Self {
        Self {
            name: "RootAgent".to_string(),
            description: String::new(),
            instruction: String::new(),
            court,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    /// Run one debate under a fresh invocation id.
    pub async fn handle(&mut self) -> Result<Verdict> {
        let invocation_id = format!("inv-{}", uuid::Uuid::new_v4());
        tracing::info!(%invocation_id, agent = %self.name, "dispatching to court");
        self.court.run().await
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest::Root {
            name: self.name.clone(),
            description: self.description.clone(),
            instruction: self.instruction.clone(),
            model: self.court.judge().model_name().to_string(),
            sub_agents: vec![self.court.manifest()],
        }
    }
}

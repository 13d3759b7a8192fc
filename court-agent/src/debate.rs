use court_core::{CourtError, Result, Transcript, Turn};

use crate::manifest::AgentManifest;
use crate::role_agent::RoleAgent;

/// Rounds argued when the caller does not choose a count.
pub const DEFAULT_ROUNDS: u32 = 3;

/// Fixed parameters of one debate run, known before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebateConfig {
    max_iterations: u32,
}

impl DebateConfig {
    /// Fails with a configuration error for `max_iterations == 0`; a
    /// valid debate always argues at least one full round.
    pub fn new(max_iterations: u32) -> Result<Self> {
        if max_iterations == 0 {
            return Err(CourtError::Config("max_iterations must be at least 1".to_string()));
        }
        Ok(Self { max_iterations })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl Default for DebateConfig {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_ROUNDS }
    }
}

/// Execution state of a debate loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebateState {
    NotStarted,
    /// One-based round currently being argued.
    RunningRound(u32),
    Completed,
}

/// Interleaves the prosecutor and the lawyer for exactly
/// `max_iterations` rounds, in that fixed order within each round,
/// appending every produced turn to the transcript before the next
/// invocation begins.
pub struct DebateLoop {
    name: String,
    description: String,
    prosecutor: RoleAgent,
    lawyer: RoleAgent,
    max_iterations: u32,
    state: DebateState,
    transcript: Transcript,
}

impl DebateLoop {
    pub fn new(prosecutor: RoleAgent, lawyer: RoleAgent, config: DebateConfig) -> Self {
        Self {
            name: "DebateLoop".to_string(),
            description: String::new(),
            prosecutor,
            lawyer,
            max_iterations: config.max_iterations(),
            state: DebateState::NotStarted,
            transcript: Transcript::new(),
        }
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

    pub fn state(&self) -> DebateState {
        self.state
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The transcript accumulated so far; complete once the loop has
    /// reached [`DebateState::Completed`].
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Drive the loop to completion.
    ///
    /// Each round invokes the prosecutor and then the lawyer; the lawyer
    /// always sees the prosecutor's turn from the same round in its
    /// input. A generation failure aborts the run as-is, without
    /// appending a partial turn. A loop can only run once; reruns use a
    /// fresh loop.
    pub async fn run(&mut self) -> Result<&Transcript> {
        if self.state != DebateState::NotStarted {
            return Err(CourtError::Config(format!("debate loop {} already started", self.name)));
        }

        for round in 1..=self.max_iterations {
            self.state = DebateState::RunningRound(round);
            let index = round - 1;

            let text = self.prosecutor.generate(&self.transcript).await?;
            self.transcript.push(Turn::new(self.prosecutor.name(), text, index));

            let text = self.lawyer.generate(&self.transcript).await?;
            self.transcript.push(Turn::new(self.lawyer.name(), text, index));

            tracing::debug!(round = index, turns = self.transcript.len(), "round complete");
        }

        self.state = DebateState::Completed;
        Ok(&self.transcript)
    }

    pub fn manifest(&self) -> AgentManifest {
        AgentManifest::Loop {
            name: self.name.clone(),
            description: self.description.clone(),
            max_iterations: self.max_iterations,
            sub_agents: vec![self.prosecutor.manifest(), self.lawyer.manifest()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use court_core::RoleSpec;
    use court_model::ScriptedGeneration;
    use std::sync::Arc;

    fn scripted_pair(generator: &Arc<ScriptedGeneration>) -> (RoleAgent, RoleAgent) {
        (
            RoleAgent::new(RoleSpec::new("Prosecutor", "argue guilt"), generator.clone()),
            RoleAgent::new(RoleSpec::new("Lawyer", "defend"), generator.clone()),
        )
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = DebateConfig::new(0).unwrap_err();
        assert!(matches!(err, CourtError::Config(_)));
    }

    #[test]
    fn test_default_config() {
        assert_eq!(DebateConfig::default().max_iterations(), DEFAULT_ROUNDS);
    }

    #[tokio::test]
    async fn test_state_transitions() {
        let generator = Arc::new(ScriptedGeneration::new("scripted").with_replies(["p", "l"]));
        let (prosecutor, lawyer) = scripted_pair(&generator);
        let mut debate =
            DebateLoop::new(prosecutor, lawyer, DebateConfig::new(1).unwrap());

        assert_eq!(debate.state(), DebateState::NotStarted);
        debate.run().await.unwrap();
        assert_eq!(debate.state(), DebateState::Completed);
        assert_eq!(debate.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_rerun_rejected() {
        let generator = Arc::new(ScriptedGeneration::new("scripted").with_replies(["p", "l"]));
        let (prosecutor, lawyer) = scripted_pair(&generator);
        let mut debate =
            DebateLoop::new(prosecutor, lawyer, DebateConfig::new(1).unwrap());

        debate.run().await.unwrap();
        let err = debate.run().await.unwrap_err();
        assert!(matches!(err, CourtError::Config(_)));
        assert_eq!(debate.transcript().len(), 2);
    }

    #[test]
    fn test_loop_manifest() {
        let generator = Arc::new(ScriptedGeneration::new("scripted"));
        let (prosecutor, lawyer) = scripted_pair(&generator);
        let debate = DebateLoop::new(prosecutor, lawyer, DebateConfig::default())
            .with_description("prosecutor and lawyer argue");

        match debate.manifest() {
            AgentManifest::Loop { name, max_iterations, sub_agents, .. } => {
                assert_eq!(name, "DebateLoop");
                assert_eq!(max_iterations, DEFAULT_ROUNDS);
                assert_eq!(sub_agents.len(), 2);
            }
            other => panic!("unexpected manifest: {:?}", other),
        }
    }
}

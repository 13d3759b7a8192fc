//! Canonical courtroom composition: the three role prompts and the
//! constructors that wire them into the full agent tree.

use std::sync::Arc;

use court_core::{Result, RoleSpec, TextGeneration};

use crate::court::{Court, RootAgent};
use crate::debate::{DebateConfig, DebateLoop};
use crate::manifest::AgentManifest;
use crate::role_agent::RoleAgent;

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

pub fn prosecutor() -> RoleSpec {
    RoleSpec::new(
        "Prosecutor",
        "You are the prosecutor. Present the claims and evidence of the case \
         and argue that the defendant is guilty.",
    )
    .with_description("Presents the claims and evidence of the case.")
}

pub fn lawyer() -> RoleSpec {
    RoleSpec::new(
        "Lawyer",
        "You are the defense lawyer. Defend the defendant and rebut the \
         prosecutor's claims.",
    )
    .with_description("Defends the defendant and rebuts the prosecution.")
}

pub fn judge() -> RoleSpec {
    RoleSpec::new(
        "Judge",
        "You are the judge. Oversee the debate between the prosecutor and the \
         lawyer, and once the arguments are complete, hand down a final verdict.",
    )
    .with_description("Oversees the debate and hands down the final verdict.")
}

/// Build the live composition around one injected generation capability.
pub fn root_agent(generator: Arc<dyn TextGeneration>, config: DebateConfig) -> Result<RootAgent> {
    let debate = DebateLoop::new(
        RoleAgent::new(prosecutor(), generator.clone()),
        RoleAgent::new(lawyer(), generator.clone()),
        config,
    )
    .with_description("Prosecutor and lawyer argue for a fixed number of rounds.");

    let court = Court::new(debate, RoleAgent::new(judge(), generator))
        .with_description("After the debate, the judge hands down a verdict.");

    Ok(RootAgent::new(court)
        .with_instruction("You are the root agent of the court system.")
        .with_description("Entry point for the court composition."))
}

/// Manifest for the canonical composition, built without a live
/// generator so deploy tooling never needs credentials for the model.
pub fn court_manifest(model: &str, config: DebateConfig) -> AgentManifest {
    let role = |spec: RoleSpec| AgentManifest::Role {
        name: spec.name,
        description: spec.description,
        instruction: spec.instruction,
        model: model.to_string(),
    };

    AgentManifest::Root {
        name: "RootAgent".to_string(),
        description: "Entry point for the court composition.".to_string(),
        instruction: "You are the root agent of the court system.".to_string(),
        model: model.to_string(),
        sub_agents: vec![AgentManifest::Sequential {
            name: "Court".to_string(),
            description: "After the debate, the judge hands down a verdict.".to_string(),
            sub_agents: vec![
                AgentManifest::Loop {
                    name: "DebateLoop".to_string(),
                    description: "Prosecutor and lawyer argue for a fixed number of rounds."
                        .to_string(),
                    max_iterations: config.max_iterations(),
                    sub_agents: vec![role(prosecutor()), role(lawyer())],
                },
                role(judge()),
            ],
        }],
    }
}

//! # court-agent
//!
//! Orchestration layer for the courtroom debate: role agents, the
//! bounded debate loop, the sequential court composer and the root
//! entry point, plus the serializable composition manifest.
//!
//! Control flow is strictly sequential within one run: RootAgent →
//! Court → DebateLoop (N rounds of Prosecutor → Lawyer) → Judge. Each
//! run owns its transcript exclusively, so concurrent runs never share
//! state.

pub mod court;
pub mod debate;
pub mod manifest;
pub mod role_agent;
pub mod roles;

pub use court::{Court, RootAgent};
pub use debate::{DEFAULT_ROUNDS, DebateConfig, DebateLoop, DebateState};
pub use manifest::AgentManifest;
pub use role_agent::RoleAgent;
pub use roles::{DEFAULT_MODEL, court_manifest, judge, lawyer, prosecutor, root_agent};

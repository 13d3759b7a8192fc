//! # court-deploy
//!
//! Deploy/undeploy tooling for the court composition: serializes the
//! agent manifest, uploads it to the managed Agent Engine control plane
//! and keeps a small local record of the result.

pub mod cli;
pub mod engine;
pub mod record;

pub use engine::{AgentEngineClient, EngineConfig, RemoteAgent};
pub use record::{DeploymentRecord, RECORD_PATH};

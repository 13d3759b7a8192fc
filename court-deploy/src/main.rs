use anyhow::{Context, Result};
use clap::Parser;
use court_agent::{DEFAULT_MODEL, DebateConfig, court_manifest};
use court_deploy::cli::{Cli, Commands};
use court_deploy::engine::{AgentEngineClient, EngineConfig};
use court_deploy::record::{DeploymentRecord, RECORD_PATH};

/// Runtime requirements declared to the control plane alongside the
/// manifest.
const REQUIREMENTS: &[&str] = &["google-cloud-aiplatform[agent_engines,adk]"];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Deploy { display_name, rounds } => deploy(display_name, rounds).await,
        Commands::Undeploy => undeploy().await,
    }
}

fn engine_config() -> Result<EngineConfig> {
    let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")
        .context("GOOGLE_CLOUD_PROJECT environment variable must be set")?;
    let location =
        std::env::var("AGENT_ENGINE_LOCATION").unwrap_or_else(|_| "us-central1".to_string());
    let access_token = std::env::var("GOOGLE_CLOUD_TOKEN")
        .context("GOOGLE_CLOUD_TOKEN environment variable must be set")?;

    Ok(EngineConfig { project_id, location, access_token, base_url: None })
}

async fn deploy(display_name: String, rounds: u32) -> Result<()> {
    let config = engine_config()?;
    let model = std::env::var("ADK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let debate = DebateConfig::new(rounds)?;

    println!("Deploying court agent to project: {}", config.project_id);
    println!("Location: {}", config.location);
    println!("Agent name: {}", display_name);

    let manifest = court_manifest(&model, debate);
    let requirements: Vec<String> = REQUIREMENTS.iter().map(|s| s.to_string()).collect();

    let client = AgentEngineClient::new(config.clone())?;
    let remote = client.create(&manifest, &requirements, &display_name).await?;

    println!("Successfully deployed court agent");
    if let Some(resource) = remote.resource() {
        println!("Resource name: {}", resource);
    }

    let record = DeploymentRecord {
        project_id: config.project_id,
        location: config.location,
        display_name,
        name: remote.name.clone(),
        resource_name: remote.resource_name.clone(),
        create_time: remote.create_time.clone(),
        deployed_at: chrono::Utc::now(),
    };
    record.save(RECORD_PATH)?;
    println!("Deployment record written to {}", RECORD_PATH);

    Ok(())
}

async fn undeploy() -> Result<()> {
    let config = engine_config()?;
    let record = DeploymentRecord::load(RECORD_PATH)?;

    println!("Removing court agent deployment from project: {}", config.project_id);

    match record.resource() {
        Some(resource) => {
            let client = AgentEngineClient::new(config)?;
            match client.delete(resource).await {
                Ok(()) => println!("Remote agent deleted"),
                // The local record is still safe to discard.
                Err(e) => {
                    tracing::warn!("failed to delete remote agent: {}", e);
                    println!("Warning: failed to delete remote agent: {}", e);
                }
            }
        }
        None => println!("Warning: no agent identifier found in deployment record"),
    }

    DeploymentRecord::remove(RECORD_PATH)?;
    println!("Successfully removed court agent deployment");

    Ok(())
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "court-deploy")]
#[command(about = "Deploy the court composition to Agent Engine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload the composition and persist the deployment record
    Deploy {
        /// Display name for the remote agent
        #[arg(short, long, default_value = "Court_AGENT")]
        display_name: String,

        /// Debate rounds baked into the uploaded composition
        #[arg(short, long, default_value_t = court_agent::DEFAULT_ROUNDS)]
        rounds: u32,
    },

    /// Delete the remote agent and remove the local record
    Undeploy,
}

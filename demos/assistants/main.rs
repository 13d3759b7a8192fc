use anyhow::Result;
use court_agent::RoleAgent;
use court_core::{RoleSpec, TextGeneration, Transcript, Turn};
use court_model::GeminiClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("GOOGLE_API_KEY")
        .or_else(|_| std::env::var("GEMINI_API_KEY"))
        .expect("GOOGLE_API_KEY or GEMINI_API_KEY must be set");
    let model = std::env::var("ADK_MODEL")
        .unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".to_string());

    let generator: Arc<dyn TextGeneration> = Arc::new(GeminiClient::new(api_key, model)?);

    // Three structurally identical leaf agents with different personas.
    let specs = [
        RoleSpec::new("agent1", "You are a kind assistant.")
            .with_description("Returns kind answers."),
        RoleSpec::new("agent2", "You are a snarky assistant.")
            .with_description("Returns snarky answers."),
        RoleSpec::new("agent3", "You are a logical assistant.")
            .with_description("Returns logical answers."),
    ];

    let mut prompt = Transcript::new();
    prompt.push(Turn::new("User", "Should I learn Rust this year?", 0));

    for spec in specs {
        let agent = RoleAgent::new(spec, generator.clone());
        let answer = agent.generate(&prompt).await?;
        println!("{}: {}", agent.name(), answer);
        println!();
    }

    Ok(())
}

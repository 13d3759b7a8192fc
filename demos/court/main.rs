use anyhow::Result;
use court_agent::{DEFAULT_MODEL, DEFAULT_ROUNDS, DebateConfig, root_agent};
use court_model::GeminiClient;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("GOOGLE_API_KEY")
        .or_else(|_| std::env::var("GEMINI_API_KEY"))
        .expect("GOOGLE_API_KEY or GEMINI_API_KEY must be set");
    let model = std::env::var("ADK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let generator = Arc::new(GeminiClient::new(api_key, model)?);
    let config = DebateConfig::new(DEFAULT_ROUNDS)?;
    let mut root = root_agent(generator, config)?;

    let verdict = root.handle().await?;

    for turn in root.court().debate().transcript().turns() {
        println!("[round {}] {}: {}", turn.round, turn.speaker, turn.text);
        println!();
    }
    println!("Verdict ({} turns considered): {}", verdict.transcript_len, verdict.text);

    Ok(())
}

use crate::{Result, transcript::Turn};
use async_trait::async_trait;

/// The single external boundary the orchestration crosses: one
/// request/response exchange against a text-generation backend.
///
/// Implementations are injected at construction so runs can be driven by
/// deterministic doubles. Retry policy, if any, belongs to the
/// implementation; the orchestration never retries.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Identifier of the backing model.
    fn name(&self) -> &str;

    /// Produce one unit of text for `instruction` given the prior turns.
    async fn generate(&self, instruction: &str, history: &[Turn]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGeneration;

    #[async_trait]
    impl TextGeneration for EchoGeneration {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, instruction: &str, history: &[Turn]) -> Result<String> {
            Ok(format!("{} ({} prior turns)", instruction, history.len()))
        }
    }

    #[tokio::test]
    async fn test_generation_trait() {
        let backend = EchoGeneration;
        assert_eq!(backend.name(), "echo");

        let history = vec![Turn::new("Prosecutor", "opening", 0)];
        let text = backend.generate("respond", &history).await.unwrap();
        assert_eq!(text, "respond (1 prior turns)");
    }
}

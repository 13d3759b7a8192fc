use serde::{Deserialize, Serialize};

/// One generated utterance attributed to a role at a specific round.
///
/// Created exactly once per invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub text: String,
    /// Zero-based round the turn belongs to.
    pub round: u32,
}

impl Turn {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>, round: u32) -> Self {
        Self { speaker: speaker.into(), text: text.into(), round }
    }
}

/// Append-only ordered history of all turns in one debate run.
///
/// Owned exclusively by the run that produces it; turns appear in strict
/// invocation order with non-decreasing rounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append one turn.
    ///
    /// # Panics
    /// Panics if `turn.round` is lower than the last recorded round.
    pub fn push(&mut self, turn: Turn) {
        if let Some(last) = self.turns.last() {
            assert!(
                turn.round >= last.round,
                "turn round {} precedes last recorded round {}",
                turn.round,
                last.round
            );
        }
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// The Judge's single closing output over the full transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub text: String,
    /// Number of turns the judge ruled on.
    pub transcript_len: usize,
}

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use court_core::{CourtError, Result, TextGeneration, Turn};

enum Reply {
    Text(String),
    Failure(String),
}

/// Deterministic stand-in for the generation service.
///
/// Replies are consumed in order, and every invocation records the
/// length of the history it was given so tests can assert call ordering.
pub struct ScriptedGeneration {
    name: String,
    replies: Mutex<VecDeque<Reply>>,
    history_lens: Mutex<Vec<usize>>,
}

impl ScriptedGeneration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            replies: Mutex::new(VecDeque::new()),
            history_lens: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Text(text.into()));
        self
    }

    pub fn with_replies<I, S>(self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut queue = self.replies.lock().unwrap();
            queue.extend(replies.into_iter().map(|text| Reply::Text(text.into())));
        }
        self
    }

    /// Queue a failure; the invocation that reaches it gets a service
    /// error instead of text.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Failure(message.into()));
        self
    }

    /// History length seen by each invocation, in call order.
    pub fn recorded_history_lens(&self) -> Vec<usize> {
        self.history_lens.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGeneration for ScriptedGeneration {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, _instruction: &str, history: &[Turn]) -> Result<String> {
        self.history_lens.lock().unwrap().push(history.len());

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Failure(message)) => Err(CourtError::Service(message)),
            None => Err(CourtError::Service("scripted generation exhausted".to_string())),
        }
    }
}

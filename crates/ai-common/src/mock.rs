use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::inference::{Inference, InferenceError, Message};

/// A scripted collaborator for tests. Hands out pre-defined replies in
/// order and counts invocations so tests can assert whether (and how
/// often) the remote call was made.
pub struct ScriptedInference {
    replies: Mutex<VecDeque<Result<String, InferenceError>>>,
    calls: AtomicUsize,
}

impl ScriptedInference {
    pub fn new(replies: Vec<Result<String, InferenceError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a single successful reply.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    /// How many times `run` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Inference for ScriptedInference {
    async fn run(&self, _messages: &[Message]) -> Result<String, InferenceError> {
        let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let mut replies = match self.replies.lock() {
            Ok(replies) => replies,
            Err(poisoned) => poisoned.into_inner(),
        };
        replies.pop_front().unwrap_or_else(|| {
            Err(InferenceError::Failed(format!(
                "scripted inference exhausted (called {calls} times)"
            )))
        })
    }
}

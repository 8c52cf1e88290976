#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use vibegen::services::llm::{ChatCompletion, ChatMessage, GenerationParams, LlmError};

/// Replays canned replies in order and records every call it receives.
/// Replies given to `new` are returned verbatim.
#[derive(Default)]
pub struct ScriptedChat {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<(Vec<ChatMessage>, GenerationParams)>>,
}

impl ScriptedChat {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Trims each reply, as `ChatCompletion::generate` promises.
    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.trim().to_string())).collect())
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn params(&self) -> Vec<GenerationParams> {
        self.calls.lock().unwrap().iter().map(|(_, p)| p.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedChat {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), params.clone()));

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::InvalidResponse("no scripted reply left".to_string())))
    }
}

pub fn upstream_failure() -> LlmError {
    LlmError::InvalidResponse("upstream unavailable".to_string())
}

/// Names reply followed by one reply per remaining stage.
pub const HAPPY_PATH: [&str; 5] = [
    "A\nB\nC",
    "  TV transcript  ",
    "Facebook transcript\n",
    "\tRadio transcript",
    " Keep away from fire. ",
];

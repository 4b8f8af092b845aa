//! In-memory `TextGenerator` for handler and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

/// Returns a canned reply (or an API error) and records every prompt it receives.
pub struct FakeGenerator {
    reply: Result<String, String>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, parts: &[String]) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(parts.to_vec());
        self.reply.clone().map_err(|message| LlmError::Api {
            status: 500,
            message,
        })
    }
}

//! Mock reply generator.
//!
//! Echoes the first matched domain's skeleton instead of calling a real
//! model. Supports scripted failures so upstream error mapping
//! (rate-limited, payment-required) can be tested.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{GeneratedReply, GenerationError, GenerationRequest, ReplyGenerator};

/// Mock implementation of the `ReplyGenerator` port.
#[derive(Default)]
pub struct MockReplyGenerator {
    next_error: Mutex<Option<GenerationError>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockReplyGenerator {
    /// Creates a generator that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next call fail with the given error.
    pub fn fail_next(&self, error: GenerationError) {
        *self.next_error.lock().unwrap() = Some(error);
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplyGenerator for MockReplyGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedReply, GenerationError> {
        if let Some(err) = self.next_error.lock().unwrap().take() {
            return Err(err);
        }

        let skeleton = request
            .matches
            .first()
            .map(|m| m.reply_skeleton.clone())
            .unwrap_or_else(|| "I'm here.".to_string());
        let reply = GeneratedReply {
            exchange_id: request.exchange_id,
            text: skeleton,
        };
        self.requests.lock().unwrap().push(request);
        Ok(reply)
    }
}

//! Mock transport for testing purposes.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::error::{FeedError, Result};
use crate::sources::Transport;

/// Canned outcome of a mock fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Successful response with this body
    Body(Vec<u8>),
    /// Server answered with this status
    Status(u16),
    /// Server could not be reached
    Unreachable,
}

/// A transport that returns a predefined reply and records requested links
#[derive(Debug)]
pub struct MockTransport {
    reply: Mutex<MockReply>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a mock answering every request with `body`
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self::with_reply(MockReply::Body(body.into()))
    }

    /// Create a mock answering every request with `reply`
    pub fn with_reply(reply: MockReply) -> Self {
        Self {
            reply: Mutex::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replace the configured reply
    pub fn set_reply(&self, reply: MockReply) {
        *self.reply.lock().unwrap_or_else(PoisonError::into_inner) = reply;
    }

    /// Links requested so far, oldest first
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn id(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        let reply = self
            .reply
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match reply {
            MockReply::Body(body) => Ok(body),
            MockReply::Status(status) => {
                Err(FeedError::Api(format!("arXiv returned status: {}", status)))
            }
            MockReply::Unreachable => Err(FeedError::Network("connection refused".to_string())),
        }
    }
}

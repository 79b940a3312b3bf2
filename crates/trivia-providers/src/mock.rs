//! Mock question source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use trivia_core::error::FetchError;
use trivia_core::model::RawQuestion;
use trivia_core::traits::QuestionSource;

/// An in-memory question source that never touches the network.
pub struct MockSource {
    records: Vec<RawQuestion>,
    /// HTTP status to fail with instead of returning records.
    fail_with: Option<u16>,
    call_count: AtomicU32,
}

impl MockSource {
    /// A source that returns these records, ignoring the requested amount.
    pub fn new(records: Vec<RawQuestion>) -> Self {
        Self {
            records,
            fail_with: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// A source that always fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            records: Vec::new(),
            fail_with: Some(status),
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl QuestionSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, _amount: u32) -> anyhow::Result<Vec<RawQuestion>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        if let Some(status) = self.fail_with {
            return Err(FetchError::Status {
                status,
                body: "mock failure".into(),
            }
            .into());
        }

        Ok(self.records.clone())
    }
}

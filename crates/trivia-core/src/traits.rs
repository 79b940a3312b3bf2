//! Seam between the quiz and wherever its questions come from.
//!
//! Implemented by `trivia-providers` for the Open Trivia Database and for the
//! in-memory test double.

use async_trait::async_trait;

use crate::model::RawQuestion;

/// A backend that hands out one batch of encoded question records.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable source name (e.g. "opentdb").
    fn name(&self) -> &str;

    /// Fetch `amount` records, in the order they should be asked.
    ///
    /// Failures are reported as [`crate::error::FetchError`] wrapped in
    /// `anyhow::Error`.
    async fn fetch(&self, amount: u32) -> anyhow::Result<Vec<RawQuestion>>;
}

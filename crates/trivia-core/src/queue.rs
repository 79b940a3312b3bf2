//! Builds the ordered question queue from the API `results` list.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::QuestionError;
use crate::model::{Question, RawQuestion};

/// First-in-first-out sequence of decoded questions.
///
/// Questions come out in API order; answer shuffling happens later, at
/// presentation time.
#[derive(Debug, Clone, Default)]
pub struct QuestionQueue {
    questions: VecDeque<Question>,
}

impl QuestionQueue {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Peek at the next question without removing it.
    pub fn front(&self) -> Option<&Question> {
        self.questions.front()
    }
}

impl Iterator for QuestionQueue {
    type Item = Question;

    fn next(&mut self) -> Option<Question> {
        self.questions.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.questions.len(), Some(self.questions.len()))
    }
}

impl ExactSizeIterator for QuestionQueue {}

impl FromIterator<Question> for QuestionQueue {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self {
            questions: iter.into_iter().collect(),
        }
    }
}

/// Decode each raw record, one question per record, keeping input order.
///
/// The first record that fails to decode aborts the build.
pub fn build_question_queue(raw: &[RawQuestion]) -> Result<QuestionQueue, QuestionError> {
    let queue = raw
        .iter()
        .map(Question::from_raw)
        .collect::<Result<QuestionQueue, _>>()?;
    debug!(questions = queue.len(), "built question queue");
    Ok(queue)
}

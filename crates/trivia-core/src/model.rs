//! Question data model.
//!
//! `RawQuestion` is one record exactly as the API sends it, with every text
//! field still base64-encoded. `Question` is the decoded, read-only value the
//! quiz works with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::{decode_text, encode_text};
use crate::error::QuestionError;

/// One encoded question record from the API `results` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    /// Question type tag (e.g. "multiple", "boolean").
    #[serde(rename = "type")]
    pub kind: String,
    /// Difficulty label.
    pub difficulty: String,
    /// Topic label.
    pub category: String,
    /// The question text.
    pub question: String,
    /// The single correct answer.
    pub correct_answer: String,
    /// Zero or more wrong answers, in API order.
    pub incorrect_answers: Vec<String>,
}

impl RawQuestion {
    /// Build an encoded record from plain text, as the API would send it.
    pub fn encode(
        kind: &str,
        difficulty: &str,
        category: &str,
        question: &str,
        correct_answer: &str,
        incorrect_answers: &[&str],
    ) -> Self {
        Self {
            kind: encode_text(kind),
            difficulty: encode_text(difficulty),
            category: encode_text(category),
            question: encode_text(question),
            correct_answer: encode_text(correct_answer),
            incorrect_answers: incorrect_answers.iter().copied().map(encode_text).collect(),
        }
    }
}

/// Question type as reported by the API. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Multiple,
    Boolean,
    Other(String),
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Multiple => write!(f, "multiple"),
            QuestionKind::Boolean => write!(f, "boolean"),
            QuestionKind::Other(other) => write!(f, "{other}"),
        }
    }
}

impl From<&str> for QuestionKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "multiple" => QuestionKind::Multiple,
            "boolean" => QuestionKind::Boolean,
            _ => QuestionKind::Other(s.to_string()),
        }
    }
}

/// A decoded trivia question.
///
/// Fields are private so a question cannot change after construction.
/// The API is trusted to keep `correct_answer` out of `incorrect_answers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    kind: QuestionKind,
    difficulty: String,
    category: String,
    prompt: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl Question {
    /// Decode every field of a raw record.
    pub fn from_raw(raw: &RawQuestion) -> Result<Self, QuestionError> {
        let kind = decode_field("type", &raw.kind)?;
        let incorrect_answers = raw
            .incorrect_answers
            .iter()
            .map(|answer| decode_field("incorrect_answers", answer))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            kind: QuestionKind::from(kind.as_str()),
            difficulty: decode_field("difficulty", &raw.difficulty)?,
            category: decode_field("category", &raw.category)?,
            prompt: decode_field("question", &raw.question)?,
            correct_answer: decode_field("correct_answer", &raw.correct_answer)?,
            incorrect_answers,
        })
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    /// Number of answer choices shown for this question.
    pub fn choice_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

impl TryFrom<&RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: &RawQuestion) -> Result<Self, Self::Error> {
        Question::from_raw(raw)
    }
}

fn decode_field(field: &'static str, value: &str) -> Result<String, QuestionError> {
    decode_text(value).map_err(|source| QuestionError::Field { field, source })
}

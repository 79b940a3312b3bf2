//! Error types for the trivia pipeline.
//!
//! `FetchError` is defined here rather than in `trivia-providers` so the CLI
//! can downcast and classify fetch failures without string matching.

use thiserror::Error;

/// A text field could not be decoded from its transport encoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The value is not valid padded base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] data_encoding::DecodeError),

    /// The decoded bytes are not valid UTF-8.
    #[error("decoded text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A raw API record could not be turned into a `Question`.
#[derive(Debug, Error)]
pub enum QuestionError {
    /// One of the encoded fields failed to decode.
    #[error("failed to decode field `{field}`: {source}")]
    Field {
        field: &'static str,
        #[source]
        source: DecodeError,
    },
}

/// Errors raised while running the interactive quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Input reached end-of-file while a question was awaiting an answer.
    #[error("input closed before question {number} was answered")]
    InputClosed { number: usize },

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when fetching questions from the trivia API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a status other than 200 OK.
    #[error("API error (HTTP {status}): {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON document.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

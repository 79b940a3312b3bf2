//! trivia-core — question model, quiz loop, and scoring.
//!
//! The pipeline runs encoded API records → [`queue::build_question_queue`] →
//! [`quiz::Quiz::run`] → [`score::Scoreboard`]. Fetching is left to a
//! [`traits::QuestionSource`] implementation.

pub mod decode;
pub mod error;
pub mod model;
pub mod queue;
pub mod quiz;
pub mod score;
pub mod traits;

pub use error::{DecodeError, FetchError, QuestionError, QuizError};
pub use model::{Question, QuestionKind, RawQuestion};
pub use queue::{build_question_queue, QuestionQueue};
pub use quiz::Quiz;
pub use score::{Scoreboard, Verdict};

//! trivia-providers — where questions come from.
//!
//! Implements the `QuestionSource` trait for the Open Trivia Database and an
//! in-memory mock, plus the configuration that picks the API endpoint.

pub mod config;
pub mod mock;
pub mod opentdb;

pub use config::{create_source, load_config_from, TriviaConfig};
pub use opentdb::OpenTdbSource;
pub use trivia_core::error::FetchError;

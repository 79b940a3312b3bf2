//! Score aggregation across one quiz run.

use std::fmt;

/// Outcome of one resolved question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Running correct/incorrect counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    correct: u32,
    incorrect: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one verdict.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Incorrect => self.incorrect += 1,
        }
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn answered(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Incorrect count as reported in the summary, floored to 1.
    ///
    /// A perfect run of N answers therefore reports `N:1` rather than an
    /// infinite ratio. Existing score output depends on this.
    pub fn reported_incorrect(&self) -> u32 {
        self.incorrect.max(1)
    }

    /// `correct / max(incorrect, 1)`.
    pub fn ratio(&self) -> f64 {
        self.correct as f64 / self.reported_incorrect() as f64
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Correct answers: {} Incorrect answers: {}",
            self.correct,
            self.reported_incorrect()
        )?;
        write!(f, "Right/Wrong ratio: {:.2}:1", self.ratio())
    }
}

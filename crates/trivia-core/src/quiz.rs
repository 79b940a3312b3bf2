//! The interactive quiz loop.
//!
//! Each question is rendered, its answers shuffled, and the user is asked for
//! a 0-based choice index. Input that is not an integer, or is not a valid
//! index, is rejected and the prompt repeats with no limit; only a valid index
//! resolves the question. Nothing here knows about the network or the
//! process; the caller supplies the console streams and the RNG.

use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::error::QuizError;
use crate::model::Question;
use crate::queue::QuestionQueue;
use crate::score::{Scoreboard, Verdict};

/// Separator line printed around each question.
pub const DECORATOR: &str = "-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-";

/// All answers for a question in a fresh uniformly random order.
pub fn shuffled_choices<G: Rng + ?Sized>(question: &Question, rng: &mut G) -> Vec<String> {
    let mut choices = question.incorrect_answers().to_vec();
    choices.push(question.correct_answer().to_string());
    choices.shuffle(rng);
    choices
}

/// Parse one line of user input as an index into `choice_count` choices.
///
/// Returns `None` for anything that is not an integer, and for negative or
/// out-of-range integers.
pub fn parse_choice(input: &str, choice_count: usize) -> Option<usize> {
    let index: i64 = input.trim().parse().ok()?;
    usize::try_from(index).ok().filter(|&i| i < choice_count)
}

/// Console quiz over any line-based input and output.
pub struct Quiz<R, W, G> {
    input: R,
    output: W,
    rng: G,
    asked: usize,
}

impl<R: BufRead, W: Write, G: Rng> Quiz<R, W, G> {
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self {
            input,
            output,
            rng,
            asked: 0,
        }
    }

    /// Present one question and block until it is answered.
    pub fn ask(&mut self, question: &Question) -> Result<Verdict, QuizError> {
        self.asked += 1;
        let number = self.asked;

        writeln!(self.output, "{DECORATOR}")?;
        writeln!(self.output, "Difficulty: {}", question.difficulty())?;
        writeln!(self.output, "Category: {}", question.category())?;
        writeln!(self.output, "{DECORATOR}")?;
        writeln!(self.output, "Question: {}", question.prompt())?;
        writeln!(self.output, "{DECORATOR}")?;

        let choices = shuffled_choices(question, &mut self.rng);
        for (idx, choice) in choices.iter().enumerate() {
            writeln!(self.output, "[{idx}] {choice}")?;
        }

        let index = self.read_choice(choices.len(), number)?;
        writeln!(self.output, "{DECORATOR}")?;

        let verdict = if choices[index] == question.correct_answer() {
            writeln!(self.output, "That is the correct answer!\n")?;
            Verdict::Correct
        } else {
            writeln!(self.output, "That is not the correct answer!")?;
            writeln!(
                self.output,
                "The correct answer was: {}.\n",
                question.correct_answer()
            )?;
            Verdict::Incorrect
        };
        self.output.flush()?;

        debug!(number, index, ?verdict, "question resolved");
        Ok(verdict)
    }

    /// Drain the queue in order, one verdict per question.
    pub fn run(&mut self, questions: QuestionQueue) -> Result<Scoreboard, QuizError> {
        let total = questions.len();
        let mut board = Scoreboard::new();
        for question in questions {
            let verdict = self.ask(&question)?;
            board.record(verdict);
        }
        info!(
            total,
            correct = board.correct(),
            incorrect = board.incorrect(),
            "quiz finished"
        );
        Ok(board)
    }

    fn read_choice(&mut self, choice_count: usize, number: usize) -> Result<usize, QuizError> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, ":")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(QuizError::InputClosed { number });
            }

            // Bytes that are not UTF-8 are just another invalid answer.
            let line = String::from_utf8_lossy(&buf);
            match parse_choice(&line, choice_count) {
                Some(index) => return Ok(index),
                None => {
                    debug!(input = line.trim(), "rejected answer input");
                    writeln!(self.output, "That is not a valid input!")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::RawQuestion;
    use crate::queue::build_question_queue;

    const INVALID: &str = "That is not a valid input!";

    fn capital_record() -> RawQuestion {
        RawQuestion::encode(
            "multiple",
            "easy",
            "Geography",
            "What is the capital of France?",
            "Paris",
            &["London", "Berlin"],
        )
    }

    fn capital() -> Question {
        Question::from_raw(&capital_record()).unwrap()
    }

    /// Index of "Paris" in the order a quiz seeded with `seed` will show.
    fn paris_index(seed: u64) -> usize {
        let mut rng = StdRng::seed_from_u64(seed);
        shuffled_choices(&capital(), &mut rng)
            .iter()
            .position(|c| c == "Paris")
            .unwrap()
    }

    fn run_quiz(
        records: &[RawQuestion],
        input: &str,
        seed: u64,
    ) -> (Result<Scoreboard, QuizError>, String) {
        let mut output = Vec::new();
        let result = {
            let queue = build_question_queue(records).unwrap();
            let mut quiz =
                Quiz::new(input.as_bytes(), &mut output, StdRng::seed_from_u64(seed));
            quiz.run(queue)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn choices_contain_every_answer_once() {
        let question = Question::from_raw(&RawQuestion::encode(
            "multiple",
            "hard",
            "History",
            "?",
            "A",
            &["B", "C", "D"],
        ))
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let mut choices = shuffled_choices(&question, &mut rng);
            assert_eq!(choices.len(), 4);
            choices.sort();
            assert_eq!(choices, ["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn single_answer_question_has_one_choice() {
        let question =
            Question::from_raw(&RawQuestion::encode("multiple", "easy", "Misc", "?", "Only", &[]))
                .unwrap();
        let choices = shuffled_choices(&question, &mut rand::thread_rng());
        assert_eq!(choices, ["Only"]);
    }

    #[test]
    fn shuffle_is_not_degenerate() {
        let question = capital();
        let positions: HashSet<usize> = (0..200)
            .map(|seed| {
                shuffled_choices(&question, &mut StdRng::seed_from_u64(seed))
                    .iter()
                    .position(|c| c == "Paris")
                    .unwrap()
            })
            .collect();
        assert_eq!(positions.len(), 3, "correct answer should land everywhere");

        let mut rng = rand::thread_rng();
        let orders: HashSet<Vec<String>> = (0..50)
            .map(|_| shuffled_choices(&question, &mut rng))
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn parse_choice_accepts_valid_indices() {
        assert_eq!(parse_choice("0", 3), Some(0));
        assert_eq!(parse_choice("2\n", 3), Some(2));
        assert_eq!(parse_choice("  1 \r\n", 3), Some(1));
        assert_eq!(parse_choice("+1", 3), Some(1));
    }

    #[test]
    fn parse_choice_rejects_invalid_input() {
        assert_eq!(parse_choice("abc", 3), None);
        assert_eq!(parse_choice("", 3), None);
        assert_eq!(parse_choice("1.5", 3), None);
        assert_eq!(parse_choice("1_0", 20), None);
        assert_eq!(parse_choice("-1", 3), None);
        assert_eq!(parse_choice("3", 3), None);
        assert_eq!(parse_choice("99999999999999999999", 3), None);
        assert_eq!(parse_choice("0", 0), None);
    }

    #[test]
    fn renders_question_and_choices() {
        let input = format!("{}\n", paris_index(3));
        let (result, output) = run_quiz(&[capital_record()], &input, 3);
        result.unwrap();
        assert!(output.contains("Difficulty: easy"));
        assert!(output.contains("Category: Geography"));
        assert!(output.contains("Question: What is the capital of France?"));
        for idx in 0..3 {
            assert!(output.contains(&format!("[{idx}] ")));
        }
        for answer in ["Paris", "London", "Berlin"] {
            assert_eq!(output.matches(answer).count(), 1, "{answer} shown once");
        }
    }

    #[test]
    fn correct_choice_scores_correct() {
        let seed = 7;
        let input = format!("{}\n", paris_index(seed));
        let (result, output) = run_quiz(&[capital_record()], &input, seed);

        let board = result.unwrap();
        assert_eq!((board.correct(), board.incorrect()), (1, 0));
        assert!(output.contains("That is the correct answer!"));
        assert_eq!(
            board.to_string(),
            "Correct answers: 1 Incorrect answers: 1\nRight/Wrong ratio: 1.00:1"
        );
    }

    #[test]
    fn invalid_inputs_reprompt_then_wrong_answer() {
        let seed = 11;
        let wrong = (paris_index(seed) + 1) % 3;
        let input = format!("abc\n5\n-1\n3\n{wrong}\n");
        let (result, output) = run_quiz(&[capital_record()], &input, seed);

        let board = result.unwrap();
        assert_eq!((board.correct(), board.incorrect()), (0, 1));
        assert_eq!(output.matches(INVALID).count(), 4);
        assert!(output.contains("That is not the correct answer!"));
        assert!(output.contains("The correct answer was: Paris."));
        assert!(board.to_string().ends_with("Right/Wrong ratio: 0.00:1"));
    }

    #[test]
    fn invalid_input_never_advances_or_scores() {
        let mut output = Vec::new();
        let question = capital();
        let input = "x\n-1\n3\n".as_bytes();
        let mut quiz = Quiz::new(input, &mut output, StdRng::seed_from_u64(0));
        let err = quiz.ask(&question).unwrap_err();
        assert!(matches!(err, QuizError::InputClosed { number: 1 }));
        drop(quiz);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(INVALID).count(), 3);
        assert!(!output.contains("correct answer"));
    }

    #[test]
    fn non_utf8_input_is_rejected_and_reprompted() {
        let mut output = Vec::new();
        let question =
            Question::from_raw(&RawQuestion::encode("multiple", "easy", "Misc", "?", "Only", &[]))
                .unwrap();
        let input: &[u8] = b"\xff\xfe\n0\n";
        let mut quiz = Quiz::new(input, &mut output, StdRng::seed_from_u64(0));
        let verdict = quiz.ask(&question).unwrap();
        assert_eq!(verdict, Verdict::Correct);
        drop(quiz);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(INVALID).count(), 1);
        let rejected = output.find(INVALID).unwrap();
        let resolved = output.find("That is the correct answer!").unwrap();
        assert!(rejected < resolved);
    }

    #[test]
    fn empty_queue_finishes_immediately() {
        let (result, output) = run_quiz(&[], "", 0);
        let board = result.unwrap();
        assert_eq!(board, Scoreboard::new());
        assert!(output.is_empty());
        assert_eq!(
            board.to_string(),
            "Correct answers: 0 Incorrect answers: 1\nRight/Wrong ratio: 0.00:1"
        );
    }

    #[test]
    fn questions_are_asked_in_order() {
        let records: Vec<RawQuestion> = ["First?", "Second?", "Third?"]
            .iter()
            .map(|prompt| {
                RawQuestion::encode("boolean", "easy", "Misc", prompt, "True", &["False"])
            })
            .collect();
        // Any valid index resolves a two-choice question.
        let (result, output) = run_quiz(&records, "0\n1\n0\n", 5);

        let board = result.unwrap();
        assert_eq!(board.answered(), 3);
        let first = output.find("First?").unwrap();
        let second = output.find("Second?").unwrap();
        let third = output.find("Third?").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn input_closed_mid_run_reports_question_number() {
        let records = vec![capital_record(), capital_record()];
        let (result, _) = run_quiz(&records, "0\n", 2);
        let err = result.unwrap_err();
        assert!(matches!(err, QuizError::InputClosed { number: 2 }));
        assert!(err.to_string().contains("question 2"));
    }
}

//! Quiz engine: question selection and answer evaluation.
//!
//! Landing on a quiz tile suspends the turn until the player answers. A
//! correct answer pays `30 × multiplier` coins; a wrong one costs 2 hearts.

pub mod bank;
pub mod question;

pub use bank::{QuestionId, QuizBank};
pub use question::{QuizQuestion, QuizVerdict, CORRECT_REWARD, WRONG_PENALTY};

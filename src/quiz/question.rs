//! Quiz questions and answer evaluation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::economy::{BalanceDelta, Multiplier};
use crate::error::{GameError, GameResult};

/// Coins per multiplier step for a correct answer.
pub const CORRECT_REWARD: i64 = 30;

/// Hearts lost for a wrong answer.
pub const WRONG_PENALTY: i64 = 2;

/// A multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: SmallVec<[String; 4]>,
    /// Index of the correct option.
    pub correct: usize,
}

impl QuizQuestion {
    /// Create a question.
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
        }
    }

    /// Judge an answer.
    ///
    /// Rejects indices that are not among the options.
    pub fn evaluate(&self, selected: usize, multiplier: Multiplier) -> GameResult<QuizVerdict> {
        if selected >= self.options.len() {
            return Err(GameError::InvalidQuizOption {
                index: selected,
                options: self.options.len(),
            });
        }
        Ok(QuizVerdict::judge(selected == self.correct, multiplier))
    }
}

/// Outcome of an answered question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizVerdict {
    pub correct: bool,
    /// Reward or penalty. The engine records the change actually applied
    /// after flooring the balances.
    pub reward: BalanceDelta,
}

impl QuizVerdict {
    /// Reward for a correct or wrong answer at `multiplier`.
    #[must_use]
    pub fn judge(correct: bool, multiplier: Multiplier) -> Self {
        let reward = if correct {
            BalanceDelta::new(multiplier.scale(CORRECT_REWARD), 0)
        } else {
            BalanceDelta::new(0, -WRONG_PENALTY)
        };
        Self { correct, reward }
    }

    /// Player-facing summary.
    #[must_use]
    pub fn message(&self) -> String {
        if self.correct {
            format!("Correct! +{} coins", self.reward.coins)
        } else {
            format!("Wrong! -{WRONG_PENALTY} hearts")
        }
    }
}

//! Static question pool.

use serde::{Deserialize, Serialize};

use super::question::QuizQuestion;
use crate::core::RandomSource;
use crate::error::SetupError;

/// Identifier of a question within its bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u16);

impl QuestionId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A validated, non-empty pool of questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizBank {
    questions: Vec<QuizQuestion>,
}

impl QuizBank {
    /// Build a bank, checking every question.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, SetupError> {
        if questions.is_empty() {
            return Err(SetupError::EmptyQuizBank);
        }
        if questions.len() > usize::from(u16::MAX) {
            return Err(SetupError::InvalidConfig(format!(
                "quiz bank holds {} questions, at most {} supported",
                questions.len(),
                u16::MAX
            )));
        }

        for (index, q) in questions.iter().enumerate() {
            let invalid = |reason: &str| SetupError::InvalidQuestion {
                index,
                reason: reason.to_string(),
            };
            if q.prompt.trim().is_empty() {
                return Err(invalid("empty prompt"));
            }
            if q.options.len() < 2 {
                return Err(invalid("needs at least two options"));
            }
            if q.correct >= q.options.len() {
                return Err(invalid("correct option out of range"));
            }
        }

        Ok(Self { questions })
    }

    /// The built-in general-knowledge pool.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            questions: vec![
                QuizQuestion::new(
                    "What is the capital of South Korea?",
                    ["Seoul", "Busan", "Daegu", "Incheon"],
                    0,
                ),
                QuizQuestion::new("1 + 1 = ?", ["1", "2", "3", "4"], 1),
                QuizQuestion::new("How many colors are in a rainbow?", ["5", "6", "7", "8"], 2),
                QuizQuestion::new(
                    "What is the largest planet in the solar system?",
                    ["Earth", "Mars", "Jupiter", "Saturn"],
                    2,
                ),
                QuizQuestion::new(
                    "Which king created the Korean alphabet?",
                    ["Taejo", "Sejong", "Seongjong", "Jeongjo"],
                    1,
                ),
            ],
        }
    }

    /// Draw a question uniformly at random.
    pub fn draw(&self, rng: &mut impl RandomSource) -> (QuestionId, &QuizQuestion) {
        let index = rng.pick_index(self.questions.len());
        (QuestionId(index as u16), &self.questions[index])
    }

    /// Look up a question.
    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&QuizQuestion> {
        self.questions.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a validated bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.questions.iter()
    }
}

impl Default for QuizBank {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_standard_bank_is_valid() {
        let bank = QuizBank::standard();
        assert_eq!(bank.len(), 5);
        assert!(QuizBank::new(bank.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_draw_uses_random_source() {
        let bank = QuizBank::standard();
        let mut rng = ScriptedRng::new([3]);

        let (id, question) = bank.draw(&mut rng);

        assert_eq!(id, QuestionId(3));
        assert_eq!(question.options[2], "Jupiter");
        assert_eq!(bank.get(id), Some(question));
    }

    #[test]
    fn test_rejects_empty_bank() {
        assert_eq!(QuizBank::new(vec![]), Err(SetupError::EmptyQuizBank));
    }

    #[test]
    fn test_rejects_bad_correct_index() {
        let q = QuizQuestion::new("Pick one", ["a", "b"], 2);
        assert!(matches!(
            QuizBank::new(vec![q]),
            Err(SetupError::InvalidQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_single_option() {
        let ok = QuizQuestion::new("Fine", ["a", "b"], 0);
        let bad = QuizQuestion::new("Lonely", ["a"], 0);
        assert!(matches!(
            QuizBank::new(vec![ok, bad]),
            Err(SetupError::InvalidQuestion { index: 1, .. })
        ));
    }
}

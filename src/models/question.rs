use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Difficulty;

pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: String,
}

/// Why a question cannot be used in a pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidQuestion {
    #[error("question {prompt:?} repeats option {option:?}")]
    DuplicateOption { prompt: String, option: String },
    #[error("question {prompt:?} has answer {answer:?} which is not one of its options")]
    AnswerNotAnOption { prompt: String, answer: String },
    #[error("prompt {prompt:?} appears more than once in the {difficulty} pool")]
    DuplicatePrompt { prompt: String, difficulty: Difficulty },
}

impl Question {
    pub fn new(prompt: &str, options: [&str; NUM_OPTIONS], correct_answer: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_answer: correct_answer.to_string(),
        }
    }

    /// Exact text comparison against the stored answer.
    pub fn is_correct(&self, selected: &str) -> bool {
        selected == self.correct_answer
    }

    pub fn validate(&self) -> Result<(), InvalidQuestion> {
        for (index, option) in self.options.iter().enumerate() {
            if self.options[..index].contains(option) {
                return Err(InvalidQuestion::DuplicateOption {
                    prompt: self.prompt.clone(),
                    option: option.clone(),
                });
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(InvalidQuestion::AnswerNotAnOption {
                prompt: self.prompt.clone(),
                answer: self.correct_answer.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let q = Question::new("2 + 2?", ["3", "4", "5", "22"], "4");
        assert!(q.is_correct("4"));
        assert!(!q.is_correct(" 4"));
        assert!(!q.is_correct("22"));
    }

    #[test]
    fn test_validate() {
        assert!(Question::new("ok", ["a", "b", "c", "d"], "c").validate().is_ok());

        let dup = Question::new("dup", ["a", "b", "a", "d"], "a");
        assert_eq!(
            dup.validate(),
            Err(InvalidQuestion::DuplicateOption {
                prompt: "dup".to_string(),
                option: "a".to_string(),
            })
        );

        let missing = Question::new("missing", ["a", "b", "c", "d"], "e");
        assert!(matches!(
            missing.validate(),
            Err(InvalidQuestion::AnswerNotAnOption { .. })
        ));
    }
}

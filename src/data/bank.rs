use std::collections::HashSet;

use serde::Deserialize;

use crate::models::{Difficulty, InvalidQuestion, Question};

/// Read-only question pools, one per difficulty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    easy: Vec<Question>,
    #[serde(default)]
    medium: Vec<Question>,
    #[serde(default)]
    hard: Vec<Question>,
}

impl QuestionBank {
    pub fn new(easy: Vec<Question>, medium: Vec<Question>, hard: Vec<Question>) -> Self {
        Self { easy, medium, hard }
    }

    /// The pools compiled into the binary.
    pub fn builtin() -> Self {
        super::builtin::bank()
    }

    pub fn pool(&self, difficulty: Difficulty) -> &[Question] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Checks every question, and that no pool repeats a prompt.
    pub fn validate(&self) -> Result<(), InvalidQuestion> {
        for difficulty in Difficulty::ALL {
            let mut prompts = HashSet::new();
            for question in self.pool(difficulty) {
                question.validate()?;
                if !prompts.insert(question.prompt.as_str()) {
                    return Err(InvalidQuestion::DuplicatePrompt {
                        prompt: question.prompt.clone(),
                        difficulty,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pools_are_valid() {
        let bank = QuestionBank::builtin();
        assert!(bank.validate().is_ok());

        for difficulty in Difficulty::ALL {
            let pool = bank.pool(difficulty);
            assert!(pool.len() >= 20, "{} pool has {} questions", difficulty, pool.len());

            let prompts: HashSet<&str> = pool.iter().map(|q| q.prompt.as_str()).collect();
            assert_eq!(prompts.len(), pool.len(), "{} pool repeats a prompt", difficulty);
        }
    }

    #[test]
    fn test_repeated_prompt_is_invalid() {
        let bank = QuestionBank::new(
            Vec::new(),
            vec![
                Question::new("same", ["a", "b", "c", "d"], "a"),
                Question::new("other", ["a", "b", "c", "d"], "b"),
                Question::new("same", ["w", "x", "y", "z"], "z"),
            ],
            vec![Question::new("same", ["a", "b", "c", "d"], "a")],
        );
        assert_eq!(
            bank.validate(),
            Err(InvalidQuestion::DuplicatePrompt {
                prompt: "same".to_string(),
                difficulty: Difficulty::Medium,
            })
        );

        let across_pools = QuestionBank::new(
            vec![Question::new("same", ["a", "b", "c", "d"], "a")],
            Vec::new(),
            vec![Question::new("same", ["a", "b", "c", "d"], "a")],
        );
        assert!(across_pools.validate().is_ok());
    }

    #[test]
    fn test_missing_pool_deserializes_empty() {
        let bank: QuestionBank = serde_json::from_str(
            r#"{"easy": [{"prompt": "p", "options": ["a","b","c","d"], "correct_answer": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(bank.pool(Difficulty::Easy).len(), 1);
        assert!(bank.pool(Difficulty::Hard).is_empty());
    }
}

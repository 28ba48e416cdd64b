use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Difficulty, Question};

/// One play-through at a single difficulty.
///
/// The head of `drawn` is always the current question; answering or skipping
/// removes it with [`Round::dequeue_current`], which is what moves the round
/// forward.
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    drawn: VecDeque<Question>,
    score: u32,
    question_counter: usize,
}

impl Round {
    /// Shuffles a copy of `pool` and keeps the first `limit` questions.
    pub fn draw<R: Rng + ?Sized>(
        difficulty: Difficulty,
        pool: &[Question],
        limit: usize,
        rng: &mut R,
    ) -> Self {
        let mut questions = pool.to_vec();
        questions.shuffle(rng);
        questions.truncate(limit);

        Self {
            difficulty,
            drawn: questions.into(),
            score: 0,
            question_counter: 1,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the question being shown.
    pub fn question_counter(&self) -> usize {
        self.question_counter
    }

    pub fn remaining(&self) -> usize {
        self.drawn.len()
    }

    pub fn drawn(&self) -> impl Iterator<Item = &Question> {
        self.drawn.iter()
    }

    pub fn current(&self) -> Option<&Question> {
        self.drawn.front()
    }

    pub fn is_complete(&self) -> bool {
        self.drawn.is_empty()
    }

    /// Removes the current question, advancing to the next one.
    pub fn dequeue_current(&mut self) -> Option<Question> {
        let question = self.drawn.pop_front()?;
        self.question_counter += 1;
        Some(question)
    }

    pub fn award_point(&mut self) {
        self.score += 1;
    }
}

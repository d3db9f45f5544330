use crate::library::Track;

use super::model::{AnswerOutcome, Question, ScoringMode};

/// Points for a first-try correct answer.
pub fn points_for(mode: ScoringMode, replays: u32) -> u32 {
    match mode {
        ScoringMode::Basic => 1,
        ScoringMode::Advanced => match replays {
            0 => 3,
            1 => 2,
            _ => 1,
        },
    }
}

/// Session score plus the per-round "already guessed wrong" flag.
#[derive(Debug, Default, Clone)]
pub struct ScoreTracker {
    score: u32,
    completed: u32,
    wrong_attempt: bool,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Questions answered correctly, with or without points.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn has_wrong_attempt(&self) -> bool {
        self.wrong_attempt
    }

    /// Forget the previous round's wrong guesses.
    pub fn start_round(&mut self) {
        self.wrong_attempt = false;
    }

    pub fn answer(
        &mut self,
        question: &Question,
        choice: &Track,
        mode: ScoringMode,
        replays: u32,
    ) -> AnswerOutcome {
        if !question.is_correct(choice) {
            self.wrong_attempt = true;
            return AnswerOutcome::Wrong;
        }

        let awarded = if self.wrong_attempt {
            0
        } else {
            points_for(mode, replays)
        };
        self.score += awarded;
        self.completed += 1;
        AnswerOutcome::Correct { awarded }
    }
}

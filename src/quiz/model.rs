use crate::library::Track;

/// Smallest catalog that can fill a question.
pub const MIN_CATALOG_SIZE: usize = 4;
/// Number of answer options per question, the correct one included.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice round.
#[derive(Debug, Clone)]
pub struct Question {
    pub correct: Track,
    /// `OPTION_COUNT` distinct tracks in display order; contains `correct`.
    pub options: Vec<Track>,
}

impl Question {
    pub fn is_correct(&self, choice: &Track) -> bool {
        *choice == self.correct
    }

    /// Position of the correct answer in `options`.
    #[cfg(test)]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|t| *t == self.correct)
    }
}

/// How points are awarded for a first-try correct answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// One point per first-try answer.
    #[default]
    Basic,
    /// 3/2/1 points for 0/1/2+ replays of the snippet.
    Advanced,
}

impl ScoringMode {
    pub fn from_advanced(advanced: bool) -> Self {
        if advanced { Self::Advanced } else { Self::Basic }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer; `awarded` is 0 when the round already had a wrong guess.
    Correct { awarded: u32 },
    Wrong,
}

//! Application model: `App` and the screens it can show.
//!
//! `App` owns the quiz session (generator, current question, score) plus
//! the small amount of UI state around it. Playback lives in the runtime's
//! `SnippetPlayer`; the two only meet in the event loop.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::library::{LibraryAccess, Track};
use crate::quiz::{AnswerOutcome, OPTION_COUNT, Question, QuizGenerator, ScoreTracker, ScoringMode};

/// What the single screen is currently showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The music directory exists but could not be read.
    PermissionDenied,
    /// Fewer tracks than a question needs.
    NotEnoughSongs { found: usize },
    /// Enough tracks, but too few different titles to fill four options.
    NotEnoughTitles { titles: usize, songs: usize },
    Quiz,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct { awarded: u32 },
    Wrong,
    PlaybackFailed,
}

/// A transient message under the options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub until: Instant,
}

/// The main application model.
pub struct App {
    pub library_dir: String,
    pub access: LibraryAccess,
    generator: QuizGenerator,
    pub question: Option<Question>,
    pub score: ScoreTracker,
    pub advanced: bool,
    /// Cursor over `question.options`.
    pub selected: usize,
    pub feedback: Option<Feedback>,
    feedback_for: Duration,
}

impl App {
    /// Create an `App` over a scanned catalog.
    pub fn new(tracks: Vec<Track>, access: LibraryAccess, library_dir: String) -> Self {
        Self {
            library_dir,
            access,
            generator: QuizGenerator::new(tracks),
            question: None,
            score: ScoreTracker::new(),
            advanced: false,
            selected: 0,
            feedback: None,
            feedback_for: Duration::from_millis(1_500),
        }
    }

    /// How long feedback messages stay visible.
    pub fn set_feedback_duration(&mut self, d: Duration) {
        self.feedback_for = d;
    }

    pub fn screen(&self) -> Screen {
        if self.access == LibraryAccess::Denied {
            Screen::PermissionDenied
        } else if !self.generator.has_enough_tracks() {
            Screen::NotEnoughSongs {
                found: self.catalog_len(),
            }
        } else if self.question.is_none() {
            Screen::NotEnoughTitles {
                titles: self.generator.distinct_titles(),
                songs: self.catalog_len(),
            }
        } else {
            Screen::Quiz
        }
    }

    pub fn catalog_len(&self) -> usize {
        self.generator.catalog_len()
    }

    /// Songs not yet asked in the current pass over the catalog.
    pub fn remaining_in_cycle(&self) -> usize {
        self.generator.remaining_in_cycle()
    }

    pub fn cycles_completed(&self) -> usize {
        self.generator.cycles_completed()
    }

    pub fn mode(&self) -> ScoringMode {
        ScoringMode::from_advanced(self.advanced)
    }

    pub fn toggle_advanced(&mut self) {
        self.advanced = !self.advanced;
        info!(advanced = self.advanced, "scoring mode changed");
    }

    /// Move on to a fresh question and return the track whose snippet should play.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Track> {
        self.question = self.generator.next_question(rng);
        self.score.start_round();
        self.selected = 0;
        self.question.as_ref().map(|q| &q.correct)
    }

    /// The track the current question is about.
    pub fn current_track(&self) -> Option<&Track> {
        self.question.as_ref().map(|q| &q.correct)
    }

    /// Answer with option `index`. `None` when there is no such option.
    pub fn answer(&mut self, index: usize, replays: u32, now: Instant) -> Option<AnswerOutcome> {
        let question = self.question.as_ref()?;
        let choice = question.options.get(index)?;
        let mode = self.mode();

        let outcome = self.score.answer(question, choice, mode, replays);
        match outcome {
            AnswerOutcome::Correct { awarded } => {
                info!(title = %question.correct.title, awarded, score = self.score.score(), "correct answer");
                self.show_feedback(FeedbackKind::Correct { awarded }, now);
            }
            AnswerOutcome::Wrong => {
                info!(guess = %choice.title, "wrong answer");
                self.show_feedback(FeedbackKind::Wrong, now);
            }
        }
        Some(outcome)
    }

    /// Answer with whatever the cursor is on.
    pub fn answer_selected(&mut self, replays: u32, now: Instant) -> Option<AnswerOutcome> {
        self.answer(self.selected, replays, now)
    }

    pub fn show_feedback(&mut self, kind: FeedbackKind, now: Instant) {
        self.feedback = Some(Feedback {
            kind,
            until: now + self.feedback_for,
        });
    }

    /// Feedback still visible at `now`.
    pub fn active_feedback(&self, now: Instant) -> Option<FeedbackKind> {
        self.feedback.filter(|f| now < f.until).map(|f| f.kind)
    }

    fn option_count(&self) -> usize {
        self.question
            .as_ref()
            .map_or(0, |q| q.options.len().min(OPTION_COUNT))
    }

    /// Move the cursor down, wrapping to the first option.
    pub fn next(&mut self) {
        let n = self.option_count();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    /// Move the cursor up, wrapping to the last option.
    pub fn prev(&mut self) {
        let n = self.option_count();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }
}

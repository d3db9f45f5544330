use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::library::Track;

use super::model::{MIN_CATALOG_SIZE, OPTION_COUNT, Question};

/// Draws questions from a fixed catalog.
///
/// Correct answers come from a shuffled queue of the whole catalog, so no
/// track is the answer twice before every other track has had its turn.
pub struct QuizGenerator {
    catalog: Vec<Track>,
    queue: VecDeque<Track>,
    cycles_completed: usize,
}

impl QuizGenerator {
    pub fn new(catalog: Vec<Track>) -> Self {
        Self {
            catalog,
            queue: VecDeque::new(),
            cycles_completed: 0,
        }
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn has_enough_tracks(&self) -> bool {
        self.catalog.len() >= MIN_CATALOG_SIZE
    }

    /// Tracks still waiting to be asked in the current cycle.
    pub fn remaining_in_cycle(&self) -> usize {
        self.queue.len()
    }

    /// Cycles in which every track has been drawn as the answer once.
    pub fn cycles_completed(&self) -> usize {
        self.cycles_completed
    }

    /// Titles that can tell options apart, compared case-insensitively.
    pub fn distinct_titles(&self) -> usize {
        self.catalog
            .iter()
            .map(|t| t.title.to_lowercase())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Build the next question, or `None` when the catalog cannot fill one.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Question> {
        if !self.has_enough_tracks() {
            return None;
        }

        // A track whose title collides with too many others cannot get three
        // distinguishable distractors; give every track in the catalog one try.
        for _ in 0..self.catalog.len() {
            if self.queue.is_empty() {
                self.refill(rng);
            }
            let correct = self.queue.pop_front()?;
            if self.queue.is_empty() {
                self.cycles_completed += 1;
                debug!(cycles = self.cycles_completed, "question cycle completed");
            }

            let mut options = self.distractors(&correct, rng);
            if options.len() < OPTION_COUNT - 1 {
                warn!(title = %correct.title, "not enough distinct titles for distractors, skipping");
                continue;
            }
            options.push(correct.clone());
            options.shuffle(rng);

            return Some(Question { correct, options });
        }

        None
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut fresh = self.catalog.clone();
        fresh.shuffle(rng);
        self.queue = fresh.into();
        debug!(tracks = self.queue.len(), "reshuffled question queue");
    }

    /// Sample up to `OPTION_COUNT - 1` wrong options without replacement.
    /// Titles are compared case-insensitively so no two buttons read the same.
    fn distractors<R: Rng + ?Sized>(&self, correct: &Track, rng: &mut R) -> Vec<Track> {
        let mut pool: Vec<&Track> = self.catalog.iter().filter(|t| *t != correct).collect();
        pool.shuffle(rng);

        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(correct.title.to_lowercase());

        pool.into_iter()
            .filter(|t| seen.insert(t.title.to_lowercase()))
            .take(OPTION_COUNT - 1)
            .cloned()
            .collect()
    }
}

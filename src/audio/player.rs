use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::library::Track;

use super::backend::PlaybackBackend;
use super::snippet::snippet_offset;
use super::types::{AudioError, PlaybackState, PlayerStatus, SnippetTiming, TickEvent, Toggle};

/// Plays one snippet at a time on an exclusively owned backend.
///
/// Driven from the event loop: `start` for each new question, `tick` on
/// every poll, `toggle` for the play/pause control. Dropping the player
/// releases the backend's source.
pub struct SnippetPlayer<B: PlaybackBackend> {
    backend: B,
    timing: SnippetTiming,
    state: PlaybackState,
}

impl<B: PlaybackBackend> SnippetPlayer<B> {
    pub fn new(backend: B, timing: SnippetTiming) -> Self {
        Self {
            backend,
            timing,
            state: PlaybackState::default(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Load `track`, pick a snippet start and begin playing from there.
    ///
    /// On failure the error is logged, the player is back to `Idle` and the
    /// error is returned so the UI can say so.
    pub fn start<R: Rng + ?Sized>(&mut self, track: &Track, rng: &mut R) -> Result<(), AudioError> {
        self.stop();
        self.state.status = PlayerStatus::Preparing;

        let total = match self.backend.load(&track.path) {
            Ok(total) => total.or(track.duration).unwrap_or(Duration::ZERO),
            Err(e) => return Err(self.fail(e)),
        };

        let offset = snippet_offset(total, self.timing.snippet, rng);
        if let Err(e) = self.backend.seek(offset) {
            return Err(self.fail(e));
        }
        self.backend.play();

        info!(title = %track.title, ?offset, ?total, "snippet started");
        self.state = PlaybackState {
            active_path: Some(track.path.clone()),
            snippet_start: offset,
            status: PlayerStatus::Playing,
            position: offset,
            duration: total,
            replay_count: 0,
        };
        Ok(())
    }

    /// Sample playback once. Loops at the end of the track and, in advanced
    /// mode, enforces the audible-time limit.
    pub fn tick(&mut self, advanced: bool) -> Option<TickEvent> {
        if !self.state.is_playing() || self.state.active_path.is_none() {
            return None;
        }

        if self.backend.finished() {
            let mut start = self.state.snippet_start;
            // Ended without advancing past the snippet start: the offset came
            // from a length estimate longer than the decodable audio.
            if self.backend.position() <= start {
                if start.is_zero() {
                    let path = self.state.active_path.clone().unwrap_or_default();
                    self.fail(AudioError::NoAudio { path });
                    return Some(TickEvent::Failed);
                }
                warn!(?start, "snippet start is past the end of the audio, restarting from zero");
                start = Duration::ZERO;
                self.state.snippet_start = start;
            }
            if let Err(e) = self.backend.seek(start) {
                self.fail(e);
                return Some(TickEvent::Failed);
            }
            self.backend.play();
            self.state.position = start;
            debug!(?start, "track ended, looping to snippet start");
            return Some(TickEvent::Looped);
        }

        self.state.position = self.backend.position();

        if advanced {
            if let Some(limit) = self.cutoff() {
                if self.state.elapsed_in_snippet() >= limit {
                    self.backend.pause();
                    self.state.status = PlayerStatus::Paused;
                    debug!(replays = self.state.replay_count, "advanced mode cutoff");
                    return Some(TickEvent::CutOff);
                }
            }
        }

        None
    }

    /// Play/pause control. Resuming while advanced mode is on counts as a replay.
    pub fn toggle(&mut self, advanced: bool) -> Toggle {
        if self.state.active_path.is_none() {
            return Toggle::NeedsStart;
        }

        match self.state.status {
            PlayerStatus::Playing => {
                self.backend.pause();
                self.state.status = PlayerStatus::Paused;
                Toggle::Paused
            }
            PlayerStatus::Paused => {
                if advanced {
                    self.state.replay_count += 1;
                }
                self.backend.play();
                self.state.status = PlayerStatus::Playing;
                Toggle::Resumed
            }
            PlayerStatus::Idle | PlayerStatus::Preparing => Toggle::NeedsStart,
        }
    }

    /// Drop the current source and forget all playback state.
    pub fn stop(&mut self) {
        self.backend.unload();
        self.state = PlaybackState::default();
    }

    /// Audible-time limit for the current replay count; none after the second replay.
    fn cutoff(&self) -> Option<Duration> {
        match self.state.replay_count {
            0 => Some(self.timing.first_cutoff),
            1 => Some(self.timing.second_cutoff),
            _ => None,
        }
    }

    fn fail(&mut self, e: AudioError) -> AudioError {
        warn!(error = %e, "playback failed, resetting");
        self.stop();
        e
    }
}

impl<B: PlaybackBackend> Drop for SnippetPlayer<B> {
    fn drop(&mut self) {
        self.backend.unload();
    }
}

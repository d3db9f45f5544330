//! Audio-related small types.
//!
//! Player status, the observable playback state, snippet timing and the
//! error type shared by playback backends.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::AudioSettings;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    /// Nothing loaded.
    #[default]
    Idle,
    /// A source is being opened and decoded.
    Preparing,
    Playing,
    Paused,
}

/// What the UI sees of the player. Reset at the start of every question.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    /// Track currently loaded for the snippet, if any.
    pub active_path: Option<PathBuf>,
    /// Where the snippet starts; looping seeks back here.
    pub snippet_start: Duration,
    pub status: PlayerStatus,
    /// Last sampled absolute position in the track.
    pub position: Duration,
    /// Total length of the loaded track (zero when unknown).
    pub duration: Duration,
    /// Resumes after a pause while advanced mode was on.
    pub replay_count: u32,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    /// Time heard since the snippet start.
    pub fn elapsed_in_snippet(&self) -> Duration {
        self.position.saturating_sub(self.snippet_start)
    }

    /// Fraction of the whole track played, for the progress bar.
    pub fn progress_ratio(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Timing knobs of the snippet player, taken from `AudioSettings`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SnippetTiming {
    pub snippet: Duration,
    pub first_cutoff: Duration,
    pub second_cutoff: Duration,
}

impl Default for SnippetTiming {
    fn default() -> Self {
        Self::from(&AudioSettings::default())
    }
}

impl From<&AudioSettings> for SnippetTiming {
    fn from(s: &AudioSettings) -> Self {
        Self {
            snippet: Duration::from_millis(s.snippet_ms),
            first_cutoff: Duration::from_millis(s.first_cutoff_ms),
            second_cutoff: Duration::from_millis(s.second_cutoff_ms),
        }
    }
}

/// Something the poll tick did on its own.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickEvent {
    /// The track ended and playback jumped back to the snippet start.
    Looped,
    /// Advanced mode paused playback at its time limit.
    CutOff,
    /// Looping failed, or the track ended without playing anything; the player is idle.
    Failed,
}

/// Result of the play/pause control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Toggle {
    Paused,
    Resumed,
    /// Nothing is loaded; the caller should start the current question's track.
    NeedsStart,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Output(String),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("{path:?} ended before producing any audio")]
    NoAudio { path: PathBuf },
    #[error("nothing loaded")]
    NotLoaded,
}

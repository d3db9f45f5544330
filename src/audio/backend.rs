use std::path::Path;
use std::time::Duration;

use super::types::AudioError;

/// The single playback resource the snippet player drives.
///
/// Implementations own at most one loaded source at a time. Loading a new
/// one discards the previous source.
pub trait PlaybackBackend {
    /// Load `path` paused at the start and report its total length when the
    /// decoder knows it.
    fn load(&mut self, path: &Path) -> Result<Option<Duration>, AudioError>;
    /// Jump to `pos` in the loaded source, keeping the play/pause state.
    fn seek(&mut self, pos: Duration) -> Result<(), AudioError>;
    fn play(&mut self);
    fn pause(&mut self);
    /// Absolute position in the loaded source.
    fn position(&self) -> Duration;
    /// The loaded source has played to its end.
    fn finished(&self) -> bool;
    /// Drop the loaded source, if any.
    fn unload(&mut self);
}

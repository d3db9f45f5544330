//! Scripted backend for exercising the player without an output device.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::backend::PlaybackBackend;
use super::types::AudioError;

#[derive(Debug, Default)]
pub struct FakeBackend {
    /// Length reported by `load`.
    pub duration: Option<Duration>,
    /// Make the next `load` calls fail.
    pub fail_load: bool,
    pub position: Duration,
    pub playing: bool,
    pub finished: bool,
    pub loaded: Option<PathBuf>,
    pub loads: Vec<PathBuf>,
    pub seeks: Vec<Duration>,
    pub unloads: usize,
}

impl FakeBackend {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

impl PlaybackBackend for FakeBackend {
    fn load(&mut self, path: &Path) -> Result<Option<Duration>, AudioError> {
        self.unload();
        self.loads.push(path.to_path_buf());
        if self.fail_load {
            return Err(AudioError::Decode {
                path: path.to_path_buf(),
                reason: "scripted failure".to_string(),
            });
        }
        self.loaded = Some(path.to_path_buf());
        Ok(self.duration)
    }

    fn seek(&mut self, pos: Duration) -> Result<(), AudioError> {
        if self.loaded.is_none() {
            return Err(AudioError::NotLoaded);
        }
        self.seeks.push(pos);
        self.position = pos;
        self.finished = false;
        Ok(())
    }

    fn play(&mut self) {
        self.playing = self.loaded.is_some();
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn finished(&self) -> bool {
        self.finished
    }

    fn unload(&mut self) {
        if self.loaded.take().is_some() {
            self.unloads += 1;
        }
        self.playing = false;
        self.position = Duration::ZERO;
        self.finished = false;
    }
}

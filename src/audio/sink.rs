//! `rodio` playback backend.
//!
//! Owns the output stream and at most one `Sink`. Seeking rebuilds the sink
//! and skips into the file, so it works for every format the decoder reads.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::debug;

use super::backend::PlaybackBackend;
use super::types::AudioError;

pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    /// Offset the current sink was created at; `Sink::get_pos` counts from here.
    base: Duration,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which would land on the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            path: None,
            base: Duration::ZERO,
        })
    }
}

fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
fn create_sink_at(stream: &OutputStream, path: &Path, start_at: Duration) -> Result<Sink, AudioError> {
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    let source = open_source(path)?.skip_duration(start_at);

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}

impl PlaybackBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<Option<Duration>, AudioError> {
        self.unload();

        let source = open_source(path)?;
        let total = source.total_duration();

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();

        debug!(path = %path.display(), ?total, "loaded source");
        self.sink = Some(sink);
        self.path = Some(path.to_path_buf());
        self.base = Duration::ZERO;
        Ok(total)
    }

    fn seek(&mut self, pos: Duration) -> Result<(), AudioError> {
        let Some(path) = self.path.clone() else {
            return Err(AudioError::NotLoaded);
        };

        let was_paused = self.sink.as_ref().is_none_or(Sink::is_paused);
        let new_sink = create_sink_at(&self.stream, &path, pos)?;
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        if !was_paused {
            new_sink.play();
        }

        self.sink = Some(new_sink);
        self.base = pos;
        Ok(())
    }

    fn play(&mut self) {
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map_or(Duration::ZERO, |s| self.base + s.get_pos())
    }

    fn finished(&self) -> bool {
        self.sink.as_ref().is_some_and(Sink::empty)
    }

    fn unload(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.path = None;
        self.base = Duration::ZERO;
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.unload();
    }
}

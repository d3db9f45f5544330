use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, TitleSource};

use super::model::Track;
use super::title::title_for;

/// Result of probing the music directory before scanning it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LibraryAccess {
    Granted,
    /// The directory exists but cannot be listed.
    Denied,
    /// The directory does not exist (or is not a directory).
    Missing,
}

/// Check whether `dir` can be listed. The quiz only scans after `Granted`.
pub fn check_access(dir: &Path) -> LibraryAccess {
    match fs::read_dir(dir) {
        Ok(_) => LibraryAccess::Granted,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => LibraryAccess::Denied,
        Err(_) => LibraryAccess::Missing,
    }
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Build the catalog for `dir`.
///
/// A missing or unreadable directory yields an empty catalog; callers treat
/// that the same as "not enough songs".
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    // Non-recursive = only the root directory.
    if !settings.recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let mut tag_title: Option<String> = None;
        let mut duration: Option<Duration> = None;

        match lofty::read_from_path(path) {
            Ok(tagged) => {
                duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());
                if settings.title_source == TitleSource::Tag {
                    tag_title = tagged
                        .primary_tag()
                        .or_else(|| tagged.first_tag())
                        .and_then(|tag| tag.title().map(|t| t.to_string()));
                }
            }
            Err(e) => debug!(path = %path.display(), error = %e, "could not probe tags"),
        }

        let title = title_for(path, tag_title.as_deref(), settings.title_source);
        tracks.push(Track {
            duration,
            ..Track::new(path, title)
        });
    }

    tracks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
    info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}

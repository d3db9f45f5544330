use std::path::Path;

use crate::config::TitleSource;

/// Pick the title shown on an answer button.
///
/// `Filename` always uses the file stem. `Tag` prefers a non-blank embedded
/// title and falls back to the stem.
pub fn title_for(path: &Path, tag_title: Option<&str>, source: TitleSource) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();

    match source {
        TitleSource::Filename => stem,
        TitleSource::Tag => tag_title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or(stem),
    }
}

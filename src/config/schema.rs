use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/earworm/config.toml` or `~/.config/earworm/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `EARWORM__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub quiz: QuizSettings,
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleSource {
    /// File name without its extension.
    #[serde(alias = "file-name", alias = "file_name", alias = "stem")]
    Filename,
    /// Embedded title tag, falling back to the file name.
    Tag,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Music directory. The first CLI argument wins over this.
    pub dir: Option<PathBuf>,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Where option titles come from.
    pub title_source: TitleSource,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            dir: None,
            extensions: ["mp3", "wav", "m4a", "aac", "ogg", "flac"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: false,
            recursive: false,
            title_source: TitleSource::Filename,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Whether advanced (replay-penalized) scoring starts enabled.
    pub advanced_mode: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Length of the snippet window the random start offset leaves room for (milliseconds).
    pub snippet_ms: u64,
    /// Poll period of the event loop; playback position is sampled this often (milliseconds).
    pub poll_ms: u64,
    /// Advanced mode: audible time before the first forced pause (milliseconds).
    pub first_cutoff_ms: u64,
    /// Advanced mode: audible time after one replay before the second forced pause (milliseconds).
    pub second_cutoff_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            snippet_ms: 15_000,
            poll_ms: 100,
            first_cutoff_ms: 10_000,
            second_cutoff_ms: 15_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// How long "Correct!" / "Wrong" feedback stays on screen (milliseconds).
    pub feedback_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ What song is this? ~ ".to_string(),
            feedback_ms: 1_500,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file path. Defaults to `$XDG_STATE_HOME/earworm/earworm.log`.
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` overrides this.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

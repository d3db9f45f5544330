use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Load settings from environment and optional config file.
    ///
    /// Environment variables (prefix `EARWORM__`) win over the file, which wins
    /// over struct defaults.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("EARWORM")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the player and event loop cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.audio.poll_ms == 0 {
            return Err("audio.poll_ms must be >= 1".to_string());
        }
        if self.audio.snippet_ms == 0 {
            return Err("audio.snippet_ms must be >= 1".to_string());
        }
        if self.audio.first_cutoff_ms > self.audio.second_cutoff_ms {
            return Err("audio.first_cutoff_ms must not exceed audio.second_cutoff_ms".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `EARWORM_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("EARWORM_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/earworm/config.toml`, or `~/.config/earworm/config.toml`
/// when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("earworm").join("config.toml"))
}

/// `$XDG_STATE_HOME/earworm/earworm.log`, or `~/.local/state/earworm/earworm.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("earworm").join("earworm.log"))
}

/// `$HOME/Music`.
pub fn default_music_dir() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join("Music"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}

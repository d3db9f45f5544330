use crate::config::Settings;

/// Settings for this run, plus the reason they fell back to defaults.
///
/// A missing file is fine; a broken or out-of-range one is reported on
/// stderr and the quiz still starts.
pub fn load_settings() -> (Settings, Option<String>) {
    let (settings, fallback) = settings_or_defaults(Settings::load());
    if let Some(reason) = &fallback {
        eprintln!("earworm: {reason}, using defaults");
    }
    (settings, fallback)
}

pub(super) fn settings_or_defaults(
    loaded: Result<Settings, ::config::ConfigError>,
) -> (Settings, Option<String>) {
    let checked = loaded
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        });

    match checked {
        Ok(s) => (s, None),
        Err(reason) => (Settings::default(), Some(reason)),
    }
}

//! Configuration loader and schema types.
//!
//! This module exposes the settings that tune the scanner, the snippet
//! player and the UI, plus helpers to locate config, log and music paths.

mod load;
mod schema;

pub use load::{default_log_path, default_music_dir};
pub use schema::*;

//! Snippet playback.
//!
//! `SnippetPlayer` holds the quiz-facing state machine; `PlaybackBackend`
//! is the seam to the actual output, implemented on `rodio` by
//! `RodioBackend`.

mod backend;
mod player;
mod sink;
mod snippet;
mod types;

pub use backend::PlaybackBackend;
pub use player::SnippetPlayer;
pub use sink::RodioBackend;
pub use snippet::snippet_offset;
pub use types::*;

#[cfg(test)]
pub(crate) mod fake;

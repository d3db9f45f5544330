//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the quiz session and the
//! screen-level state around it.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;

//! Music library: the catalog of tracks the quiz draws from.

mod model;
mod scan;
mod title;

pub use model::Track;
pub use scan::{LibraryAccess, check_access, scan};

#[cfg(test)]
mod tests;

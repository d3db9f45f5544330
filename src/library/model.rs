use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::Duration;

/// One playable file in the catalog. Two tracks are the same track when
/// they point at the same path.
#[derive(Debug, Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    /// Length reported by the file's tags, when it could be probed.
    pub duration: Option<Duration>,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            duration: None,
        }
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

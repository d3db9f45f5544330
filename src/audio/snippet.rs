use std::time::Duration;

use rand::Rng;

/// Random snippet start that still leaves a full `snippet` before the end.
///
/// Tracks no longer than the snippet always start at zero. Otherwise the
/// offset is uniform over `[0, total - snippet]` at millisecond resolution.
pub fn snippet_offset<R: Rng + ?Sized>(total: Duration, snippet: Duration, rng: &mut R) -> Duration {
    if total <= snippet {
        return Duration::ZERO;
    }
    let max_start = (total - snippet).as_millis() as u64;
    Duration::from_millis(rng.random_range(0..=max_start))
}

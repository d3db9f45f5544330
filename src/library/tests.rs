use super::Track;
use super::title::title_for;
use crate::config::TitleSource;
use std::collections::HashSet;
use std::path::Path;

#[test]
fn title_for_filename_uses_stem() {
    let p = Path::new("/music/Song Name.mp3");
    assert_eq!(title_for(p, Some("Tagged"), TitleSource::Filename), "Song Name");
}

#[test]
fn title_for_tag_prefers_non_blank_tag() {
    let p = Path::new("/music/01-track.flac");
    assert_eq!(title_for(p, Some("  Real Title "), TitleSource::Tag), "Real Title");
    assert_eq!(title_for(p, Some("   "), TitleSource::Tag), "01-track");
    assert_eq!(title_for(p, None, TitleSource::Tag), "01-track");
}

#[test]
fn tracks_are_identified_by_path() {
    let a = Track::new("/music/a.mp3", "Same");
    let b = Track::new("/music/b.mp3", "Same");
    let a_again = Track::new("/music/a.mp3", "Renamed");

    assert_ne!(a, b);
    assert_eq!(a, a_again);

    let set: HashSet<Track> = [a, b, a_again].into_iter().collect();
    assert_eq!(set.len(), 2);
}

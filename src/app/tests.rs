use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::library::{LibraryAccess, Track};
use crate::quiz::AnswerOutcome;

fn t(title: &str) -> Track {
    Track::new(format!("/music/{title}.mp3"), title)
}

fn app_with(titles: &[&str]) -> App {
    let tracks = titles.iter().map(|s| t(s)).collect();
    App::new(tracks, LibraryAccess::Granted, "/music".to_string())
}

fn wrong_index(app: &App) -> usize {
    let q = app.question.as_ref().unwrap();
    let correct = q.correct_index().unwrap();
    (correct + 1) % q.options.len()
}

#[test]
fn screen_reports_permission_denied_first() {
    let app = App::new(Vec::new(), LibraryAccess::Denied, "/music".into());
    assert_eq!(app.screen(), Screen::PermissionDenied);
}

#[test]
fn screen_reports_not_enough_songs() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut app = app_with(&["A", "B", "C"]);
    assert!(app.next_question(&mut rng).is_none());
    assert_eq!(app.screen(), Screen::NotEnoughSongs { found: 3 });

    let app = App::new(Vec::new(), LibraryAccess::Missing, "/music".into());
    assert_eq!(app.screen(), Screen::NotEnoughSongs { found: 0 });
}

#[test]
fn screen_reports_too_few_distinct_titles() {
    let mut rng = StdRng::seed_from_u64(4);
    let tracks = vec![
        Track::new("/music/a/x.mp3", "Same"),
        Track::new("/music/b/x.mp3", "same"),
        t("Other"),
        t("Third"),
    ];
    let mut app = App::new(tracks, LibraryAccess::Granted, "/music".into());

    assert!(app.next_question(&mut rng).is_none());
    assert_eq!(app.screen(), Screen::NotEnoughTitles { titles: 3, songs: 4 });
}

#[test]
fn cycle_progress_is_exposed() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut app = app_with(&["A", "B", "C", "D"]);
    app.next_question(&mut rng);
    assert_eq!(app.remaining_in_cycle(), 3);
    assert_eq!(app.cycles_completed(), 0);

    for _ in 0..3 {
        app.next_question(&mut rng);
    }
    assert_eq!(app.remaining_in_cycle(), 0);
    assert_eq!(app.cycles_completed(), 1);
}

#[test]
fn next_question_enters_quiz_and_resets_cursor() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut app = app_with(&["A", "B", "C", "D", "E"]);
    app.selected = 3;

    let track = app.next_question(&mut rng).cloned().unwrap();
    assert_eq!(app.screen(), Screen::Quiz);
    assert_eq!(app.selected, 0);
    assert_eq!(app.current_track(), Some(&track));
}

#[test]
fn correct_first_try_scores_and_shows_feedback() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut app = app_with(&["A", "B", "C", "D", "E"]);
    app.next_question(&mut rng);

    let now = Instant::now();
    let correct = app.question.as_ref().unwrap().correct_index().unwrap();
    assert_eq!(app.answer(correct, 0, now), Some(AnswerOutcome::Correct { awarded: 1 }));
    assert_eq!(app.score.score(), 1);
    assert_eq!(app.score.completed(), 1);
    assert_eq!(
        app.active_feedback(now),
        Some(FeedbackKind::Correct { awarded: 1 })
    );
}

#[test]
fn wrong_then_correct_scores_zero_in_advanced_mode() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut app = app_with(&["A", "B", "C", "D", "E"]);
    app.toggle_advanced();
    app.next_question(&mut rng);
    let now = Instant::now();

    let wrong = wrong_index(&app);
    assert_eq!(app.answer(wrong, 0, now), Some(AnswerOutcome::Wrong));
    assert_eq!(app.active_feedback(now), Some(FeedbackKind::Wrong));

    let correct = app.question.as_ref().unwrap().correct_index().unwrap();
    assert_eq!(app.answer(correct, 0, now), Some(AnswerOutcome::Correct { awarded: 0 }));
    assert_eq!(app.score.score(), 0);
    assert_eq!(app.score.completed(), 1);

    // A fresh round scores again.
    app.next_question(&mut rng);
    let correct = app.question.as_ref().unwrap().correct_index().unwrap();
    assert_eq!(app.answer(correct, 1, now), Some(AnswerOutcome::Correct { awarded: 2 }));
    assert_eq!(app.score.score(), 2);
}

#[test]
fn answer_out_of_range_is_ignored() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut app = app_with(&["A", "B", "C", "D"]);
    let now = Instant::now();
    assert_eq!(app.answer(0, 0, now), None);

    app.next_question(&mut rng);
    assert_eq!(app.answer(4, 0, now), None);
    assert!(!app.score.has_wrong_attempt());
}

#[test]
fn feedback_expires() {
    let mut app = app_with(&["A"]);
    app.set_feedback_duration(Duration::from_millis(500));
    let now = Instant::now();
    app.show_feedback(FeedbackKind::PlaybackFailed, now);

    assert_eq!(app.active_feedback(now), Some(FeedbackKind::PlaybackFailed));
    assert_eq!(app.active_feedback(now + Duration::from_millis(499)), Some(FeedbackKind::PlaybackFailed));
    assert_eq!(app.active_feedback(now + Duration::from_millis(500)), None);
}

#[test]
fn cursor_wraps_over_options() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut app = app_with(&["A", "B", "C", "D"]);

    // No question yet: cursor stays put.
    app.next();
    assert_eq!(app.selected, 0);

    app.next_question(&mut rng);
    app.prev();
    assert_eq!(app.selected, 3);
    app.next();
    assert_eq!(app.selected, 0);
    app.next();
    app.next();
    assert_eq!(app.selected, 2);
}

#[test]
fn answer_selected_uses_cursor() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut app = app_with(&["A", "B", "C", "D", "E", "F"]);
    app.next_question(&mut rng);

    app.selected = wrong_index(&app);
    assert_eq!(app.answer_selected(0, Instant::now()), Some(AnswerOutcome::Wrong));
}

#[test]
fn toggling_advanced_keeps_score() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut app = app_with(&["A", "B", "C", "D"]);
    app.next_question(&mut rng);
    let correct = app.question.as_ref().unwrap().correct_index().unwrap();
    app.answer(correct, 0, Instant::now());

    app.toggle_advanced();
    assert_eq!(app.mode(), crate::quiz::ScoringMode::Advanced);
    assert_eq!(app.score.score(), 1);
    app.toggle_advanced();
    assert_eq!(app.mode(), crate::quiz::ScoringMode::Basic);
}

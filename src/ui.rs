//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the quiz screen using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock, time::Duration, time::Instant};

use crate::app::{App, FeedbackKind, Screen};
use crate::audio::{PlaybackState, PlayerStatus};
use crate::config::UiSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("1-4", "answer");
    map.insert("j/k", "up/down");
    map.insert("enter", "answer selected");
    map.insert("space/p", "play/pause");
    map.insert("a", "advanced mode");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["1-4", "j/k", "enter", "space/p", "a", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn score_text(app: &App) -> String {
    let mode = if app.advanced { "[x]" } else { "[ ]" };
    let forfeit = if app.score.has_wrong_attempt() {
        " (no points this round)"
    } else {
        ""
    };
    format!(
        " Score: {} / {}{} • {} Advanced mode • {} left in cycle, {} done • Dir: {}",
        app.score.score(),
        app.score.completed(),
        forfeit,
        mode,
        app.remaining_in_cycle(),
        app.cycles_completed(),
        app.library_dir
    )
}

fn progress_label(playback: &PlaybackState) -> String {
    let icon = match playback.status {
        PlayerStatus::Playing => "▶",
        PlayerStatus::Paused => "⏸",
        PlayerStatus::Preparing => "…",
        PlayerStatus::Idle => "■",
    };
    format!(
        "{} {} / {}",
        icon,
        format_mmss(playback.position),
        format_mmss(playback.duration)
    )
}

fn feedback_text(kind: FeedbackKind) -> String {
    match kind {
        FeedbackKind::Correct { awarded: 0 } => "Correct! (no points after a wrong guess)".to_string(),
        FeedbackKind::Correct { awarded: 1 } => "Correct! +1 point".to_string(),
        FeedbackKind::Correct { awarded } => format!("Correct! +{} points", awarded),
        FeedbackKind::Wrong => "Wrong, try again".to_string(),
        FeedbackKind::PlaybackFailed => "Could not play this song, press space to retry".to_string(),
    }
}

fn notice_text(app: &App, screen: Screen) -> String {
    match screen {
        Screen::PermissionDenied => format!(
            "Permission denied: cannot read {}.\nGrant read access and restart.",
            app.library_dir
        ),
        Screen::NotEnoughSongs { found } => format!(
            "Not enough songs: need at least 4 in {}, found {}.",
            app.library_dir, found
        ),
        Screen::NotEnoughTitles { titles, songs } => format!(
            "Not enough different titles: need at least 4 in {}, found {} among {} songs.",
            app.library_dir, titles, songs
        ),
        Screen::Quiz => String::new(),
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into `frame`.
pub fn draw(frame: &mut Frame, app: &App, playback: &PlaybackState, ui_settings: &UiSettings, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" earworm ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    match app.screen() {
        Screen::Quiz => draw_quiz(frame, chunks[1], app, playback, now),
        screen => {
            let notice = Paragraph::new(notice_text(app, screen))
                .alignment(Alignment::Center)
                .block(padded(" notice "))
                .wrap(Wrap { trim: true });
            frame.render_widget(notice, chunks[1]);
        }
    }

    let footer = Paragraph::new(controls_text())
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}

fn draw_quiz(frame: &mut Frame, area: Rect, app: &App, playback: &PlaybackState, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    let status = Paragraph::new(score_text(app))
        .block(Block::bordered().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::bordered().title(" What song is this? "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(playback.progress_ratio())
        .label(progress_label(playback));
    frame.render_widget(gauge, chunks[1]);

    let items: Vec<ListItem> = app
        .question
        .as_ref()
        .map(|q| {
            q.options
                .iter()
                .enumerate()
                .map(|(i, t)| ListItem::new(format!("{}. {}", i + 1, t.title)))
                .collect()
        })
        .unwrap_or_default();
    let has_items = !items.is_empty();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" options "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if has_items {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, chunks[2], &mut state);

    let feedback = match app.active_feedback(now) {
        Some(kind @ FeedbackKind::Correct { .. }) => Paragraph::new(feedback_text(kind)).green().bold(),
        Some(kind) => Paragraph::new(feedback_text(kind)).red().bold(),
        None => Paragraph::new(""),
    };
    frame.render_widget(feedback.block(padded(" feedback ")), chunks[3]);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::library::{LibraryAccess, Track};

    #[test]
    fn format_mmss_pads_minutes_and_seconds() {
        assert_eq!(format_mmss(Duration::ZERO), "00:00");
        assert_eq!(format_mmss(Duration::from_millis(65_900)), "01:05");
        assert_eq!(format_mmss(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn controls_text_lists_every_binding_in_order() {
        let text = controls_text();
        assert!(text.starts_with("[1-4] answer"));
        assert!(text.ends_with("[q] quit"));
        assert_eq!(text.matches('[').count(), CONTROLS_MAP.len());
    }

    #[test]
    fn feedback_text_pluralizes_points() {
        assert_eq!(feedback_text(FeedbackKind::Correct { awarded: 1 }), "Correct! +1 point");
        assert_eq!(feedback_text(FeedbackKind::Correct { awarded: 3 }), "Correct! +3 points");
        assert_eq!(feedback_text(FeedbackKind::Wrong), "Wrong, try again");
    }

    #[test]
    fn notice_for_duplicate_titles_does_not_claim_missing_songs() {
        let app = App::new(Vec::new(), LibraryAccess::Granted, "/music".into());
        let text = notice_text(&app, Screen::NotEnoughTitles { titles: 3, songs: 4 });
        assert_eq!(
            text,
            "Not enough different titles: need at least 4 in /music, found 3 among 4 songs."
        );
    }

    #[test]
    fn score_text_marks_a_forfeited_round() {
        let tracks = ["A", "B", "C", "D"]
            .iter()
            .map(|t| Track::new(format!("/music/{t}.mp3"), *t))
            .collect();
        let mut app = App::new(tracks, LibraryAccess::Granted, "/music".into());
        let mut rng = StdRng::seed_from_u64(1);
        app.next_question(&mut rng);
        assert!(!score_text(&app).contains("no points"));
        assert!(score_text(&app).contains("3 left in cycle, 0 done"));

        let question = app.question.clone().unwrap();
        let wrong = question.options.iter().position(|o| !question.is_correct(o)).unwrap();
        app.answer(wrong, 0, Instant::now());
        assert!(score_text(&app).starts_with(" Score: 0 / 0 (no points this round)"));
    }

    #[test]
    fn progress_label_shows_state_and_times() {
        let playback = PlaybackState {
            status: PlayerStatus::Paused,
            position: Duration::from_secs(75),
            duration: Duration::from_secs(200),
            ..PlaybackState::default()
        };
        assert_eq!(progress_label(&playback), "⏸ 01:15 / 03:20");
    }
}

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{App, FeedbackKind, Screen};
use crate::audio::{PlaybackBackend, SnippetPlayer, TickEvent, Toggle};
use crate::config;
use crate::quiz::AnswerOutcome;
use crate::ui;

/// Main terminal event loop: samples playback, draws, handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run<B: PlaybackBackend, R: Rng + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &mut SnippetPlayer<B>,
    rng: &mut R,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll = Duration::from_millis(settings.audio.poll_ms);

    loop {
        let now = Instant::now();
        if let Some(tick) = player.tick(app.advanced) {
            debug!(?tick, "playback tick");
            if tick == TickEvent::Failed {
                app.show_feedback(FeedbackKind::PlaybackFailed, now);
            }
        }

        terminal.draw(|f| ui::draw(f, app, player.state(), &settings.ui, now))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, player, rng, Instant::now()) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Load the next question and start its snippet.
pub fn advance<B: PlaybackBackend, R: Rng + ?Sized>(
    app: &mut App,
    player: &mut SnippetPlayer<B>,
    rng: &mut R,
    now: Instant,
) {
    player.stop();
    if app.next_question(rng).is_some() {
        play_current(app, player, rng, now);
    }
}

fn play_current<B: PlaybackBackend, R: Rng + ?Sized>(
    app: &mut App,
    player: &mut SnippetPlayer<B>,
    rng: &mut R,
    now: Instant,
) {
    let Some(track) = app.current_track().cloned() else {
        return;
    };
    if player.start(&track, rng).is_err() {
        app.show_feedback(FeedbackKind::PlaybackFailed, now);
    }
}

fn answer<B: PlaybackBackend, R: Rng + ?Sized>(
    index: Option<usize>,
    app: &mut App,
    player: &mut SnippetPlayer<B>,
    rng: &mut R,
    now: Instant,
) {
    let replays = player.state().replay_count;
    let outcome = match index {
        Some(i) => app.answer(i, replays, now),
        None => app.answer_selected(replays, now),
    };
    if let Some(AnswerOutcome::Correct { .. }) = outcome {
        advance(app, player, rng, now);
    }
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub fn handle_key_event<B: PlaybackBackend, R: Rng + ?Sized>(
    key: KeyEvent,
    app: &mut App,
    player: &mut SnippetPlayer<B>,
    rng: &mut R,
    now: Instant,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        _ => {}
    }

    if app.screen() != Screen::Quiz {
        return false;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            answer(Some(index), app, player, rng, now);
        }
        KeyCode::Enter => answer(None, app, player, rng, now),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            if player.toggle(app.advanced) == Toggle::NeedsStart {
                play_current(app, player, rng, now);
            }
        }
        KeyCode::Char('a') => app.toggle_advanced(),
        _ => {}
    }

    false
}

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{RodioBackend, SnippetPlayer, SnippetTiming};
use crate::config;
use crate::library::{LibraryAccess, check_access, scan};

mod event_loop;
mod logging;
mod settings;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();
    if let Some(path) = logging::init(&settings.log) {
        info!(log = %path.display(), "earworm starting");
    }
    if let Some(reason) = fallback {
        warn!(%reason, "running with default settings");
    }

    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.dir.clone())
        .or_else(config::default_music_dir)
        .unwrap_or_else(|| PathBuf::from("Music"));

    let access = check_access(&dir);
    let tracks = match access {
        LibraryAccess::Granted => scan(&dir, &settings.library),
        LibraryAccess::Denied => {
            warn!(dir = %dir.display(), "read access to music directory denied");
            Vec::new()
        }
        LibraryAccess::Missing => {
            warn!(dir = %dir.display(), "music directory not found");
            Vec::new()
        }
    };

    let backend = RodioBackend::open_default()?;
    let mut player = SnippetPlayer::new(backend, SnippetTiming::from(&settings.audio));

    let mut app = App::new(tracks, access, dir.display().to_string());
    app.advanced = settings.quiz.advanced_mode;
    app.set_feedback_duration(Duration::from_millis(settings.ui.feedback_ms));

    let mut rng = rand::rng();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if access == LibraryAccess::Granted {
        event_loop::advance(&mut app, &mut player, &mut rng, Instant::now());
    }

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut player, &mut rng);

    // Release the output device before handing the terminal back.
    drop(player);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        score = app.score.score(),
        completed = app.score.completed(),
        "earworm exiting"
    );
    run_result
}

//! PopX TUI - terminal onboarding flow

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use popx_tui::{app::App, config::TuiConfig, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // The terminal owns stdout/stderr, so logs go to a file
    init_logging();

    let config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to load config, using defaults");
        TuiConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "Exiting after terminal error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("Exited");
    Ok(())
}

/// Log to `popx-tui.log` in the platform data directory, or not at all
fn init_logging() {
    let Some(dirs) = TuiConfig::project_dirs() else {
        return;
    };
    let log_dir = dirs.data_local_dir();
    if fs::create_dir_all(log_dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("popx-tui.log"))
    else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "popx_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
}

/// Event loop: draw, then block until the next terminal event
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> popx_tui::Result<()> {
    loop {
        // Keep the size current for mouse hit testing
        let size = terminal.size()?;
        app.terminal_size = Some((size.height, size.width));

        terminal.draw(|frame| ui::draw(frame, app))?;

        match event::read()? {
            // Ignore key release/repeat events reported on some platforms
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            // Resize and focus events just trigger a redraw
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

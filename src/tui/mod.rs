// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

pub fn run(config: Config) -> Result<()> {
    // Panic Hook: restore the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("PANIC: {:?}", info);
        default_hook(info);
    }));

    let mut app_state = AppState::new(config);
    log::info!(
        "Starting TUI with {} rows x {} columns",
        app_state.grid.layout.rows,
        app_state.grid.layout.columns
    );

    // --- TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app_state);

    // --- CLEANUP ---
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app_state: &mut AppState,
) -> Result<()> {
    let months_per_row = app_state.grid.layout.months_per_row() as i64;

    loop {
        terminal.draw(|f| draw(f, app_state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Filter out KeyRelease events to prevent double input on Windows
            if key.kind == event::KeyEventKind::Release {
                continue;
            }
            if let Some(action) = handlers::handle_key_event(key, months_per_row) {
                log::debug!("Action: {:?}", action);
                if !app_state.apply(action) {
                    return Ok(());
                }
            }
        }
    }
}

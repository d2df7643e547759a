//! Application state and event handling

pub mod command;
pub mod handler;
pub mod input;
pub mod state;
pub mod view;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::{Catalog, SectionId};
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::theme::Theme;
use crate::ui;
use handler::Flow;
use state::AppState;

/// The main application
pub struct App {
    /// Current application state
    state: AppState,

    theme: Theme,

    clipboard: SystemClipboard,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance, optionally opening a section first
    pub fn new(config: &Config, catalog: Catalog, start: Option<SectionId>) -> Result<Self> {
        let mut state = AppState::new(catalog);
        state.vim_mode = config.vim_mode;
        state.syntax_highlighting = config.syntax_highlighting;
        if let Some(id) = start {
            state.navigator.select_section(id);
            if let Some(position) = state.navigator.catalog().position(id) {
                state.home.selected = position;
            }
        }

        let terminal = Self::setup_terminal()?;

        Ok(Self { state, theme: config.active_theme(), clipboard: SystemClipboard::new(), terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        tracing::info!("Starting TUI with {} sections", self.state.navigator.catalog().len());

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.theme);
            })?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.state.handle_key(key, &mut self.clipboard) == Flow::Quit {
                    break;
                }
            }
        }

        tracing::info!("Exiting");
        self.restore_terminal()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

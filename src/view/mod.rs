//! TUI rendering and event handling (impure shell).
//!
//! Owns the terminal, feeds crossterm events into the pure [`AppState`],
//! runs the returned [`Effect`](crate::state::Effect)s and redraws.

pub mod boxes;
pub mod effects;
pub mod header;
pub mod layout;
pub mod list;
pub mod modals;
pub mod styles;

pub use effects::{Desktop, EffectRunner, Services, SystemDesktop};
pub use styles::{ColorConfig, Palette};

use crate::config::{ConfigStore, ThemeName};
use crate::model::AppError;
use crate::state::{AppEvent, AppState};
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEvent},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Spinner frame interval; also bounds how long a finished request waits
/// before it is drawn.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    runner: EffectRunner,
    events: Receiver<AppEvent>,
    colors: ColorConfig,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and bracketed
    /// paste, then starts the first article load.
    pub fn new(
        services: Services,
        store: Box<dyn ConfigStore>,
        theme: ThemeName,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Self::with_terminal(terminal, services, store, theme, colors)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Redraws after every input,
    /// finished request and spinner tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                let event = event::read()?;
                self.handle_terminal_event(event);
            } else {
                self.app_state.tick();
            }

            self.drain_events();

            if self.app_state.should_quit() {
                info!("Exiting");
                return Ok(());
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app on an existing terminal and start the first load.
    pub fn with_terminal(
        terminal: Terminal<B>,
        services: Services,
        store: Box<dyn ConfigStore>,
        theme: ThemeName,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let (tx, rx) = mpsc::channel();
        let mut app = Self {
            app_state: AppState::new(theme, size.width.max(1), size.height),
            terminal,
            runner: EffectRunner::new(services, store, tx),
            events: rx,
            colors,
        };
        let effects = app.app_state.start();
        app.runner.run_all(effects);
        Ok(app)
    }

    /// Current state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Paste(text) => self.app_state.handle_paste(&text),
            Event::Resize(width, height) => {
                debug!("Handling resize to {}x{}", width, height);
                // Guard against zero width from resize events
                self.app_state.resize(width.max(1), height);
            }
            _ => {}
        }
    }

    /// Route one key through the state machine and run its effects.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let effects = self.app_state.handle_key(key);
        self.runner.run_all(effects);
    }

    /// Apply every event already waiting on the channel.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.apply_event(event);
        }
    }

    /// Block up to `timeout` for one event and apply it.
    ///
    /// Returns `false` when nothing arrived.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.events.recv_timeout(timeout) {
            Ok(event) => {
                self.apply_event(event);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    fn apply_event(&mut self, event: AppEvent) {
        let effects = self.app_state.handle_event(event);
        self.runner.run_all(effects);
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let colors = self.colors;
        let state = &self.app_state;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, colors);
        })?;
        Ok(())
    }

    /// Terminal, for inspecting the rendered buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    services: Services,
    store: Box<dyn ConfigStore>,
    theme: ThemeName,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let result = TuiApp::new(services, store, theme, colors).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and bracketed paste, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

use crate::app::{mode::AppMode, App};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::render_frame;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after `terminal`, restoring the screen last.
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draws and dispatches keys until the app reaches Quit.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                debug!("event loop finished");
                return Ok(());
            }

            self.render_frame(app)?;

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    app.handle_event(crate::app::AppEvent::Quit);
                    continue;
                }
                app.handle_key(key.code);
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.render_state();
        self.terminal
            .draw(|frame| render_frame(frame, &render_state))?;
        Ok(())
    }
}

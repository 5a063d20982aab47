use crossterm::{
    cursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::{error, warn};

/// Set while the TUI owns the screen. Whoever clears it first (guard drop or
/// panic hook) restores the terminal; the other does nothing.
static SCREEN_TAKEN: AtomicBool = AtomicBool::new(false);
static INSTALL_HOOK: Once = Once::new();

/// Holds the terminal in raw mode on the alternate screen. Dropping it, or
/// panicking while it lives, puts the user's shell back the way it was.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        SCREEN_TAKEN.store(true, Ordering::SeqCst);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = release_screen();
            return Err(e);
        }

        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = release_screen() {
            warn!(error = %e, "terminal restore failed");
        }
    }
}

/// Leaves the alternate screen and raw mode if the screen is still taken.
/// Returns `Ok(false)` when there was nothing to undo.
fn release_screen() -> io::Result<bool> {
    if !SCREEN_TAKEN.swap(false, Ordering::SeqCst) {
        return Ok(false);
    }
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    disable_raw_mode()?;
    screen.map(|_| true)
}

/// Restores the screen before the default hook prints, so the panic message
/// lands on the normal screen. Panics outside the TUI (report mode, tests)
/// pass straight through.
fn install_panic_hook() {
    INSTALL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if let Ok(true) = release_screen() {
                error!(%info, "panic inside the TUI");
            }
            previous(info);
        }));
    });
}

//! Terminal lifecycle.
//!
//! [`TerminalManager`] switches the terminal into raw mode on the alternate
//! screen and puts it back when dropped. [`setup_panic_hook`] covers the
//! panic path, where the drop may never run.
//!
//! ```no_run
//! use gw2link::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

/// Owns the ratatui terminal and restores the tty on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    /// Enter raw mode, the alternate screen and bracketed paste, then clear.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }

        let terminal = init_terminal(stdout, emergency_restore)?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls, including the one from drop, do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Build and clear a terminal over `writer`, which is already in TUI mode.
/// Calls `restore` if that fails, since no manager exists yet to do it.
fn init_terminal<W: Write>(
    writer: W,
    restore: impl FnOnce(),
) -> io::Result<Terminal<CrosstermBackend<W>>> {
    let result = Terminal::new(CrosstermBackend::new(writer)).and_then(|mut terminal| {
        terminal.clear()?;
        Ok(terminal)
    });
    if let Err(ref e) = result {
        tracing::error!("Terminal setup failed: {}", e);
        restore();
    }
    result
}

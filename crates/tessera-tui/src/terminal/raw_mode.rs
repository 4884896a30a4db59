//! RAII guard for raw terminal mode

use crossterm::{
    cursor::Show,
    event::DisableBracketedPaste,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, stdout};

/// Restores the terminal when dropped
///
/// Dropping the guard disables raw mode, leaves the alternate screen and shows
/// the cursor, including during a panic unwind.
#[must_use = "raw mode is left as soon as the guard is dropped"]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Errors can't be reported from drop
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show)?;
    Ok(())
}

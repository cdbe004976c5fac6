//! Terminal setup and teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, info};

/// Puts the terminal into raw mode with the alternate screen and mouse
/// capture. Restores it on drop.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then enters the alternate screen on `out`.
    ///
    /// If entering the alternate screen fails, the guard is dropped on
    /// the way out and raw mode is turned off again.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }

    #[cfg(test)]
    fn without_raw_mode(out: W) -> Self {
        Self {
            out,
            raw_mode: false,
        }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::without_raw_mode(&mut out);
        }
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "{:?}", written);
        assert!(written.contains("\x1b[?25h"), "{:?}", written);
    }

    #[test]
    fn test_drop_restores_on_early_return() {
        fn fails_after_setup(out: &mut Vec<u8>) -> io::Result<()> {
            let _guard = TerminalGuard::without_raw_mode(out);
            Err(io::Error::other("backend failed"))
        }

        let mut out = Vec::new();
        assert!(fails_after_setup(&mut out).is_err());
        assert!(String::from_utf8_lossy(&out).contains("\x1b[?1049l"));
    }
}

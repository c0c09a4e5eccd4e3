//! Terminal session guard.
//!
//! Owns raw mode, the alternate screen, and the hidden cursor; restores
//! all of it on drop so a panic or early return cannot leave the shell
//! unusable.

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};

/// An entered terminal session.
#[derive(Debug)]
pub struct TerminalSession {
    width: u16,
    height: u16,
    enhanced: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, hide the cursor, and ask
    /// the terminal to report key release events where supported.
    pub fn enter() -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        // Kitty-protocol terminals report Release/Repeat kinds; without
        // them the demo still runs, keys just never read as released.
        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }

        tracing::debug!(width, height, enhanced, "terminal session entered");

        Ok(Self {
            width,
            height,
            enhanced,
        })
    }

    /// Screen width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Screen height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Restoration is best effort; a broken terminal cannot be helped
        // by reporting more errors into it.
        let mut stdout = io::stdout();
        if self.enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

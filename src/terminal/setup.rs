//! Entering and leaving the alternate screen.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch `writer` to the alternate screen with bracketed paste on.
///
/// Bracketed paste delivers a pasted email (or a dropped file path) as one
/// `Event::Paste` instead of a burst of key events. Raw mode is the
/// caller's job.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste, Hide)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored, so this is
/// safe to call more than once and from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout without access to the terminal handle.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

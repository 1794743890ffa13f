use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse reporting on. If any step after raw
/// mode fails, the terminal is restored before the error is returned.
pub fn init() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    or_restore(enter(), restore)
}

fn enter() -> io::Result<AppTerminal> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Undo every step of `init`, even if an earlier one fails. Reports the
/// first failure.
pub fn restore() -> io::Result<()> {
    let mut stdout = io::stdout();
    let raw = disable_raw_mode();
    let mouse = stdout.execute(DisableMouseCapture).map(|_| ());
    let screen = stdout.execute(LeaveAlternateScreen).map(|_| ());
    raw.and(mouse).and(screen)
}

fn or_restore<T>(
    result: io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = restore();
    }
    result
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: io::Result<()> = or_restore(Err(io::Error::other("no tty")), || {
            restored.set(true);
            Ok(())
        });
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let result = or_restore(Ok(7), || {
            restored.set(true);
            Ok(())
        });
        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn restore_error_keeps_original_error() {
        let result: io::Result<()> = or_restore(Err(io::Error::other("no tty")), || {
            Err(io::Error::other("still no tty"))
        });
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }
}

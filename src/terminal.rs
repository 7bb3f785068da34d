//! Terminal lifecycle: raw mode, alternate screen, mouse capture.
//!
//! Mouse capture is required for the inspector's pointer surface
//! (trigger clicks, resize drags, outside-click detection). The panic
//! hook restores the terminal before the default hook runs so a panic
//! never leaves the user's shell in raw mode.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{InspectorError, Result};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode, the alternate screen, and mouse capture.
pub fn setup() -> Result<Tui> {
    enable_raw_mode().map_err(InspectorError::TerminalInit)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(InspectorError::TerminalInit)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(InspectorError::TerminalInit)
}

/// Restore the terminal to normal mode.
pub fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(InspectorError::TerminalRestore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(InspectorError::TerminalRestore)?;
    terminal
        .show_cursor()
        .map_err(InspectorError::TerminalRestore)?;
    Ok(())
}

/// Install a panic hook that restores terminal state before the
/// original hook prints the panic.
pub fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            LeaveAlternateScreen,
            Show
        );
        original_hook(panic_info);
    }));
}

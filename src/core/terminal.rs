//! Terminal session that owns raw mode and the alternate screen
use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use tracing::debug;

/// Restores the terminal when dropped, so every exit path (including `?` and
/// panics unwinding through the engine) leaves the shell usable.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        let terminal = ratatui::try_init().context("failed to initialise terminal")?;
        debug!("terminal session started");
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("terminal session restored");
    }
}

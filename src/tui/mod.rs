pub mod event;
pub mod layout;
pub mod renderer;
pub mod session;
pub mod terminal;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{CvefeedError, Result};
use crate::config::ColorConfig;
use crate::domain::Advisory;

use self::session::BrowserSession;
use self::terminal::{TerminalRenderer, Tui};

pub use self::renderer::Renderer;
pub use self::session::{Selection, View};

/// Browse `advisories` on the terminal until the operator quits.
pub fn run(advisories: Vec<Advisory>, colors: ColorConfig) -> Result<()> {
    let terminal = setup_terminal()?;
    let mut session = BrowserSession::new(advisories, TerminalRenderer::new(terminal, colors));
    let result = session.run();

    let mut renderer = session.into_renderer();
    restore_terminal(renderer.terminal_mut())?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_undo(execute!(stdout, EnterAlternateScreen), || {
        let _ = disable_raw_mode();
    })?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = or_undo(Terminal::new(backend), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;
    Ok(terminal)
}

/// Run `undo` when a setup step fails so the shell isn't left half configured.
fn or_undo<T, E>(result: std::result::Result<T, E>, undo: impl FnOnce()) -> Result<T>
where
    CvefeedError: From<E>,
{
    result.map_err(|e| {
        undo();
        CvefeedError::from(e)
    })
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

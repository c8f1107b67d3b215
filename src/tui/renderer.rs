use std::collections::BTreeSet;

use crate::app::Result;
use crate::domain::Advisory;

/// Screen and input capabilities the browser session drives.
///
/// The terminal implementation lives in [`super::terminal`]; tests use an
/// in-memory fake.
pub trait Renderer {
    fn clear_screen(&mut self) -> Result<()>;

    /// Banner plus a table of every advisory. Rows whose index is in
    /// `viewed` are drawn dimmed.
    fn render_list(&mut self, advisories: &[Advisory], viewed: &BTreeSet<usize>) -> Result<()>;

    fn render_detail(&mut self, advisory: &Advisory) -> Result<()>;

    /// Inline message shown under the current screen.
    fn show_error(&mut self, message: &str) -> Result<()>;

    /// Block until the operator submits a line. The line ending is not included.
    fn read_line(&mut self) -> Result<String>;
}

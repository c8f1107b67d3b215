use std::collections::BTreeSet;
use std::io::Stdout;

use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
    Terminal,
};

use crate::app::{CvefeedError, Result};
use crate::config::ColorConfig;
use crate::domain::Advisory;
use crate::tui::event::{self, LineEdit};
use crate::tui::layout::{self, Prompt};
use crate::tui::renderer::Renderer;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

enum Screen {
    Blank,
    List {
        advisories: Vec<Advisory>,
        viewed: BTreeSet<usize>,
    },
    Detail(Advisory),
}

/// [`Renderer`] on a ratatui terminal.
///
/// Each call redraws the whole frame from the last screen handed in, the
/// current prompt line and the pending inline message.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    colors: ColorConfig,
    screen: Screen,
    input: String,
    status: Option<String>,
    table: TableState,
    page_height: usize,
}

impl<B> TerminalRenderer<B>
where
    B: Backend,
    CvefeedError: From<B::Error>,
{
    pub fn new(terminal: Terminal<B>, colors: ColorConfig) -> Self {
        Self {
            terminal,
            colors,
            screen: Screen::Blank,
            input: String::new(),
            status: None,
            table: TableState::default(),
            page_height: 1,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            terminal,
            colors,
            screen,
            input,
            status,
            table,
            page_height,
        } = self;
        let prompt = Prompt {
            input: input.as_str(),
            status: status.as_deref(),
        };

        terminal.draw(|frame| match screen {
            Screen::Blank => {}
            Screen::List { advisories, viewed } => {
                *page_height =
                    layout::render_list(frame, advisories, viewed, table, &prompt, colors).max(1);
            }
            Screen::Detail(advisory) => layout::render_detail(frame, advisory, &prompt, colors),
        })?;
        Ok(())
    }

    /// Move the first visible list row, clamped to the advisories on screen.
    fn scroll(&mut self, delta: isize) {
        let Screen::List { advisories, .. } = &self.screen else {
            return;
        };
        let last = advisories.len().saturating_sub(1);
        let offset = self.table.offset().saturating_add_signed(delta).min(last);
        *self.table.offset_mut() = offset;
    }

    /// Apply one key to the prompt. Returns the submitted line once Enter
    /// is pressed.
    fn apply(&mut self, edit: LineEdit) -> Result<Option<String>> {
        match edit {
            LineEdit::Insert(c) => self.input.push(c),
            LineEdit::Backspace => {
                self.input.pop();
            }
            LineEdit::Clear => self.input.clear(),
            LineEdit::Submit => {
                self.status = None;
                return Ok(Some(std::mem::take(&mut self.input)));
            }
            LineEdit::Interrupt => return Err(CvefeedError::Interrupted),
            LineEdit::ScrollUp => self.scroll(-1),
            LineEdit::ScrollDown => self.scroll(1),
            LineEdit::PageUp => self.scroll(-(self.page_height as isize)),
            LineEdit::PageDown => self.scroll(self.page_height as isize),
            LineEdit::None => {}
        }
        Ok(None)
    }
}

impl<B> Renderer for TerminalRenderer<B>
where
    B: Backend,
    CvefeedError: From<B::Error>,
{
    fn clear_screen(&mut self) -> Result<()> {
        self.screen = Screen::Blank;
        self.terminal.clear()?;
        Ok(())
    }

    fn render_list(&mut self, advisories: &[Advisory], viewed: &BTreeSet<usize>) -> Result<()> {
        self.screen = Screen::List {
            advisories: advisories.to_vec(),
            viewed: viewed.clone(),
        };
        self.draw()
    }

    fn render_detail(&mut self, advisory: &Advisory) -> Result<()> {
        self.screen = Screen::Detail(advisory.clone());
        self.draw()
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        self.status = Some(message.to_string());
        self.draw()
    }

    fn read_line(&mut self) -> Result<String> {
        self.input.clear();

        loop {
            self.draw()?;
            if let Some(line) = self.apply(LineEdit::from(event::next_key()?))? {
                return Ok(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn advisories(n: usize) -> Vec<Advisory> {
        (1..=n)
            .map(|i| {
                Advisory::new(
                    format!("CVE-2024-{:04} test", i),
                    format!("https://cvefeed.io/vuln/detail/CVE-2024-{:04}", i),
                    "description",
                    "Tue, 02 Jan 2024 00:00:00 +0000".into(),
                )
                .unwrap()
            })
            .collect()
    }

    /// 80x20 leaves 9 table rows: 20 minus banner (6), status and prompt,
    /// minus borders and header.
    fn list_renderer(n: usize) -> TerminalRenderer<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut renderer = TerminalRenderer::new(terminal, ColorConfig::default());
        renderer
            .render_list(&advisories(n), &BTreeSet::new())
            .unwrap();
        renderer
    }

    #[test]
    fn test_page_height_follows_table_area() {
        assert_eq!(list_renderer(50).page_height, 9);
    }

    #[test]
    fn test_scroll_clamps_at_top() {
        let mut renderer = list_renderer(50);

        renderer.apply(LineEdit::ScrollUp).unwrap();
        assert_eq!(renderer.table.offset(), 0);

        renderer.apply(LineEdit::PageUp).unwrap();
        assert_eq!(renderer.table.offset(), 0);
    }

    #[test]
    fn test_page_down_moves_one_page() {
        let mut renderer = list_renderer(50);

        renderer.apply(LineEdit::PageDown).unwrap();
        assert_eq!(renderer.table.offset(), renderer.page_height);

        renderer.apply(LineEdit::ScrollDown).unwrap();
        assert_eq!(renderer.table.offset(), renderer.page_height + 1);

        renderer.apply(LineEdit::PageUp).unwrap();
        assert_eq!(renderer.table.offset(), 1);
    }

    #[test]
    fn test_scroll_clamps_at_last_row() {
        let mut renderer = list_renderer(12);

        for _ in 0..5 {
            renderer.apply(LineEdit::PageDown).unwrap();
        }
        assert_eq!(renderer.table.offset(), 11);

        renderer.apply(LineEdit::ScrollDown).unwrap();
        assert_eq!(renderer.table.offset(), 11);
    }

    #[test]
    fn test_scroll_is_ignored_on_detail_screen() {
        let mut renderer = list_renderer(50);
        renderer.render_detail(&advisories(1)[0]).unwrap();

        renderer.apply(LineEdit::PageDown).unwrap();
        assert_eq!(renderer.table.offset(), 0);
    }

    #[test]
    fn test_line_editing() {
        let mut renderer = list_renderer(3);

        for edit in [
            LineEdit::Insert('1'),
            LineEdit::Insert('2'),
            LineEdit::Backspace,
            LineEdit::Insert('3'),
        ] {
            assert_eq!(renderer.apply(edit).unwrap(), None);
        }
        assert_eq!(renderer.input, "13");

        renderer.apply(LineEdit::Clear).unwrap();
        renderer.apply(LineEdit::Insert('q')).unwrap();
        assert_eq!(renderer.apply(LineEdit::Submit).unwrap(), Some("q".into()));
        assert!(renderer.input.is_empty());
    }

    #[test]
    fn test_submit_clears_inline_message() {
        let mut renderer = list_renderer(3);
        renderer.show_error("Invalid selection.").unwrap();
        assert_eq!(renderer.status.as_deref(), Some("Invalid selection."));

        renderer.apply(LineEdit::Insert('2')).unwrap();
        assert_eq!(renderer.status.as_deref(), Some("Invalid selection."));

        assert_eq!(renderer.apply(LineEdit::Submit).unwrap(), Some("2".into()));
        assert_eq!(renderer.status, None);
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let mut renderer = list_renderer(3);
        assert!(matches!(
            renderer.apply(LineEdit::Interrupt),
            Err(CvefeedError::Interrupted)
        ));
    }
}

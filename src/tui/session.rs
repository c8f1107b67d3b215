use std::collections::BTreeSet;

use crate::app::Result;
use crate::domain::Advisory;
use crate::tui::renderer::Renderer;

pub const INVALID_SELECTION: &str = "Invalid selection. Please choose a valid number.";
pub const INVALID_INPUT: &str = "Invalid input. Please enter a number or 'q' to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail(usize),
    Terminated,
}

/// What a line typed at the list prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    /// Zero-based index of an existing advisory
    Open(usize),
    OutOfRange,
    NotANumber,
}

impl Selection {
    pub fn parse(input: &str, len: usize) -> Self {
        if input.eq_ignore_ascii_case("q") {
            return Selection::Quit;
        }

        let input = input.trim();
        match input.parse::<i64>() {
            Ok(n) if n >= 1 && (n as u64) <= len as u64 => Selection::Open(n as usize - 1),
            Ok(_) => Selection::OutOfRange,
            // too many digits for i64 is still a number, just never a valid one
            Err(_) if is_integer_literal(input) => Selection::OutOfRange,
            Err(_) => Selection::NotANumber,
        }
    }
}

fn is_integer_literal(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Interactive list/detail browser over a fixed set of advisories.
pub struct BrowserSession<R> {
    advisories: Vec<Advisory>,
    viewed: BTreeSet<usize>,
    view: View,
    renderer: R,
}

impl<R: Renderer> BrowserSession<R> {
    pub fn new(advisories: Vec<Advisory>, renderer: R) -> Self {
        Self {
            advisories,
            viewed: BTreeSet::new(),
            view: View::List,
            renderer,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn viewed(&self) -> &BTreeSet<usize> {
        &self.viewed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Drive the session until the operator quits.
    ///
    /// Returns at once, without drawing anything, when there is nothing to
    /// browse.
    pub fn run(&mut self) -> Result<()> {
        if self.advisories.is_empty() {
            self.view = View::Terminated;
            return Ok(());
        }

        while self.view != View::Terminated {
            self.step()?;
        }
        Ok(())
    }

    /// Render the current view, block for one line of input and move to the
    /// next view.
    pub fn step(&mut self) -> Result<View> {
        self.view = match self.view {
            View::List => {
                self.renderer.clear_screen()?;
                self.renderer.render_list(&self.advisories, &self.viewed)?;
                let input = self.renderer.read_line()?;
                self.select(&input)?
            }
            View::Detail(index) => {
                self.renderer.clear_screen()?;
                self.renderer.render_detail(&self.advisories[index])?;
                self.renderer.read_line()?;
                View::List
            }
            View::Terminated => View::Terminated,
        };
        Ok(self.view)
    }

    fn select(&mut self, input: &str) -> Result<View> {
        match Selection::parse(input, self.advisories.len()) {
            Selection::Quit => Ok(View::Terminated),
            Selection::Open(index) => {
                self.viewed.insert(index);
                Ok(View::Detail(index))
            }
            Selection::OutOfRange => {
                self.renderer.show_error(INVALID_SELECTION)?;
                Ok(View::List)
            }
            Selection::NotANumber => {
                self.renderer.show_error(INVALID_INPUT)?;
                Ok(View::List)
            }
        }
    }
}

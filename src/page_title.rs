//! Page title side effect
//!
//! A page sets the window title while it is mounted; dropping the guard puts
//! the base title back.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use ratatui::crossterm::{execute, terminal::SetTitle};

/// Something that can display a window title
pub trait TitleSink {
    fn set_title(&mut self, title: &str);
}

/// A sink shared between the app and whichever page title is mounted
pub type SharedTitleSink = Rc<RefCell<dyn TitleSink>>;

/// Writes the title to the terminal with an OSC sequence
pub struct TerminalTitle<W: Write> {
    out: W,
}

impl TerminalTitle<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalTitle<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TitleSink for TerminalTitle<W> {
    fn set_title(&mut self, title: &str) {
        if let Err(e) = execute!(self.out, SetTitle(title)) {
            log::debug!("Failed to set terminal title: {}", e);
        }
    }
}

/// Full window title for a page
pub fn format_title(page: &str, base: &str) -> String {
    if page.is_empty() {
        base.to_string()
    } else {
        format!("{} | {}", page, base)
    }
}

/// Keeps a page title set until dropped
pub struct PageTitle {
    sink: SharedTitleSink,
    base: String,
}

impl PageTitle {
    pub fn mount(sink: SharedTitleSink, page: &str, base: &str) -> Self {
        sink.borrow_mut().set_title(&format_title(page, base));
        Self {
            sink,
            base: base.to_string(),
        }
    }
}

impl Drop for PageTitle {
    fn drop(&mut self) {
        self.sink.borrow_mut().set_title(&self.base);
    }
}

#[cfg(test)]
#[path = "page_title_tests.rs"]
mod page_title_tests;

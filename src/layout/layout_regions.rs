use ratatui::layout::Rect;

use crate::navigation::SidebarRow;

/// Clickable target under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Region {
    SidebarItem(String),
    Checkbox(usize),
    Content,
}

/// Screen areas recorded during the last render
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub sidebar_rows: Vec<SidebarRow>,
    /// Checkbox hit rects, indexed like the page's checkbox list
    pub checkboxes: Vec<Rect>,
    pub content: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sidebar_rows.clear();
        self.checkboxes.clear();
        self.content = None;
    }
}

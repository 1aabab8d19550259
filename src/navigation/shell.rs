use ratatui::layout::{Constraint, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 24;
pub const COLLAPSED_SIDEBAR_WIDTH: u16 = 5;

/// Regions of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub sidebar: Rect,
    pub content: Rect,
}

/// Split `area` into a sidebar column and the content region beside it
pub fn shell_layout(area: Rect, collapsed: bool) -> ShellAreas {
    let sidebar_width = if collapsed {
        COLLAPSED_SIDEBAR_WIDTH
    } else {
        SIDEBAR_WIDTH
    };

    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(area);

    ShellAreas { sidebar, content }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded_shell_layout() {
        let areas = shell_layout(Rect::new(0, 0, 100, 30), false);

        assert_eq!(areas.sidebar, Rect::new(0, 0, 24, 30));
        assert_eq!(areas.content, Rect::new(24, 0, 76, 30));
    }

    #[test]
    fn test_collapsed_shell_layout() {
        let areas = shell_layout(Rect::new(0, 0, 100, 30), true);

        assert_eq!(areas.sidebar.width, COLLAPSED_SIDEBAR_WIDTH);
        assert_eq!(areas.content.x, COLLAPSED_SIDEBAR_WIDTH);
        assert_eq!(areas.content.width, 95);
    }

    #[test]
    fn test_narrow_terminal_splits_whole_width() {
        let areas = shell_layout(Rect::new(0, 0, 10, 5), false);

        assert_eq!(areas.sidebar.x, 0);
        assert_eq!(areas.sidebar.width + areas.content.width, 10);
    }
}

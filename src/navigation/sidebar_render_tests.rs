//! Tests for navigation/sidebar_render

use ratatui::{Terminal, backend::TestBackend};

use super::*;

fn tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Overview", "/"),
        NavItem::branch(
            "Components",
            "/components",
            vec![NavItem::leaf("Tooltip", "/components/tooltip")],
        ),
    ]
}

fn draw(state: &NavigationState) -> (String, Vec<SidebarRow>) {
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    let items = tree();
    let theme = Theme::default();
    let mut rows = Vec::new();
    terminal
        .draw(|frame| {
            rows = render_sidebar(frame, Rect::new(0, 0, 24, 8), &items, state, &theme);
        })
        .unwrap();
    (terminal.backend().to_string(), rows)
}

#[test]
fn test_visible_items_expanded_lists_everything() {
    let items = tree();
    let state = NavigationState::new("/");
    assert_eq!(visible_items(&items, &state).len(), 3);
}

#[test]
fn test_visible_items_collapsed_lists_top_level() {
    let items = tree();
    let mut state = NavigationState::new("/");
    state.collapsed = true;

    let visible = visible_items(&items, &state);

    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|f| f.depth == 0));
}

#[test]
fn test_expanded_sidebar_renders_nested_labels() {
    let (output, rows) = draw(&NavigationState::new("/"));

    assert!(output.contains("Overview"));
    assert!(output.contains("▾ Components"));
    assert!(output.contains("    Tooltip"));
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].href, "/components/tooltip");
    assert_eq!(rows[2].area.y, 2);
}

#[test]
fn test_collapsed_sidebar_renders_initials() {
    let mut state = NavigationState::new("/");
    state.collapsed = true;

    let (output, rows) = draw(&state);

    assert!(!output.contains("Overview"));
    // TestBackend wraps each row in quotes
    assert!(output.lines().next().unwrap().starts_with("\"O "));
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_rows_beyond_area_are_not_hit_targets() {
    let items: Vec<NavItem> = (0..20)
        .map(|i| NavItem::leaf(format!("Page {}", i), format!("/{}", i)))
        .collect();
    let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
    let mut rows = Vec::new();
    terminal
        .draw(|frame| {
            rows = render_sidebar(
                frame,
                Rect::new(0, 0, 24, 4),
                &items,
                &NavigationState::new("/0"),
                &Theme::default(),
            );
        })
        .unwrap();

    assert_eq!(rows.len(), 4);
}

#[test]
fn test_href_at_finds_row() {
    let (_, rows) = draw(&NavigationState::new("/"));

    assert_eq!(href_at(&rows, 3, 1), Some("/components"));
    assert_eq!(href_at(&rows, 3, 7), None);
    // The right border column is not part of any row
    assert_eq!(href_at(&rows, 23, 0), None);
}

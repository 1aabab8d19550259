//! Tests for gallery/events

use std::time::Duration;

use ratatui::crossterm::event::{KeyEventState, MouseEventKind};

use super::*;
use crate::test_utils::test_helpers::{click, key, mouse, mouse_move, render_to_string, test_app};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

#[test]
fn test_q_quits() {
    let mut app = test_app();
    app.handle_event(key(KeyCode::Char('q')), Instant::now()).unwrap();
    assert!(app.should_quit());
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = test_app();
    let mut release = KeyEvent::new(KeyCode::Char('q'), ratatui::crossterm::event::KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    release.state = KeyEventState::NONE;

    let redraw = app.handle_event(Event::Key(release), Instant::now()).unwrap();

    assert!(!redraw);
    assert!(!app.should_quit());
}

#[test]
fn test_help_opens_and_esc_closes_without_quitting() {
    let mut app = test_app();
    app.handle_event(key(KeyCode::Char('?')), Instant::now()).unwrap();
    assert!(app.help_visible);

    app.handle_event(key(KeyCode::Esc), Instant::now()).unwrap();
    assert!(!app.help_visible);
    assert!(!app.should_quit());
}

#[test]
fn test_keys_are_swallowed_while_help_is_open() {
    let mut app = test_app();
    app.help_visible = true;

    let redraw = app.handle_event(key(KeyCode::Char('j')), Instant::now()).unwrap();

    assert!(!redraw);
    assert_eq!(app.page, Page::Overview);
}

#[test]
fn test_bracket_toggles_sidebar_through_context() {
    let mut app = test_app();
    app.handle_event(key(KeyCode::Char('[')), Instant::now()).unwrap();
    assert!(app.navigation().collapsed);

    app.handle_event(key(KeyCode::Char('[')), Instant::now()).unwrap();
    assert!(!app.navigation().collapsed);
}

#[test]
fn test_j_and_k_move_between_pages() {
    let mut app = test_app();
    app.handle_event(key(KeyCode::Char('j')), Instant::now()).unwrap();
    assert_eq!(app.page, Page::Components);

    app.handle_event(key(KeyCode::Down), Instant::now()).unwrap();
    assert_eq!(app.page, Page::Tooltip);

    app.handle_event(key(KeyCode::Up), Instant::now()).unwrap();
    app.handle_event(key(KeyCode::Char('k')), Instant::now()).unwrap();
    assert_eq!(app.page, Page::Overview);
}

#[test]
fn test_space_toggles_focused_checkbox_on_checkbox_page() {
    let mut app = test_app();
    app.navigate("/components/checkbox");
    app.handle_event(key(KeyCode::Tab), Instant::now()).unwrap();

    let redraw = app.handle_event(key(KeyCode::Char(' ')), Instant::now()).unwrap();

    assert!(redraw);
    assert!(app.checkboxes[1].checked);
}

#[test]
fn test_space_does_nothing_on_other_pages() {
    let mut app = test_app();
    let before = app.checkboxes.clone();

    app.handle_event(key(KeyCode::Char(' ')), Instant::now()).unwrap();

    assert_eq!(app.checkboxes, before);
}

#[test]
fn test_click_sidebar_navigates() {
    let mut app = test_app();
    render_to_string(&mut app, WIDTH, HEIGHT);

    // Row 2 is "Tooltip", nested under Components
    let redraw = app.handle_event(click(4, 2), Instant::now()).unwrap();

    assert!(redraw);
    assert_eq!(app.page, Page::Tooltip);
}

#[test]
fn test_click_checkbox_toggles_it() {
    let mut app = test_app();
    app.navigate("/components/checkbox");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let target = app.layout_regions.checkboxes[1];

    app.handle_event(click(target.x + 1, target.y), Instant::now()).unwrap();

    assert!(app.checkboxes[1].checked);
    assert_eq!(app.focused_checkbox, 1);
}

#[test]
fn test_click_disabled_checkbox_keeps_value() {
    let mut app = test_app();
    app.navigate("/components/checkbox");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let target = app.layout_regions.checkboxes[2];

    let redraw = app.handle_event(click(target.x, target.y), Instant::now()).unwrap();

    assert!(!redraw);
    assert!(!app.checkboxes[2].checked);
}

#[test]
fn test_hovering_trigger_shows_tooltip_after_delay() {
    let start = Instant::now();
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[0].trigger().unwrap();

    app.handle_event(mouse_move(trigger.x, trigger.y), start).unwrap();
    assert!(!app.tick(start + Duration::from_millis(499)));
    assert!(app.tick(start + Duration::from_millis(500)));

    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(output.contains("Tooltips appear after"));
}

#[test]
fn test_leaving_trigger_before_delay_never_shows() {
    let start = Instant::now();
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[0].trigger().unwrap();

    app.handle_event(mouse_move(trigger.x, trigger.y), start).unwrap();
    app.handle_event(mouse_move(0, HEIGHT - 1), start + Duration::from_millis(100))
        .unwrap();

    assert!(!app.tick(start + Duration::from_secs(2)));
    let output = render_to_string(&mut app, WIDTH, HEIGHT);
    assert!(!output.contains("Tooltips appear after"));
}

#[test]
fn test_focus_lost_leaves_every_tooltip() {
    let start = Instant::now();
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[0].trigger().unwrap();
    app.handle_event(mouse_move(trigger.x, trigger.y), start).unwrap();

    app.handle_event(Event::FocusLost, start).unwrap();

    assert!(app.next_deadline().is_none());
}

#[test]
fn test_scroll_is_ignored() {
    let mut app = test_app();
    let redraw = app
        .handle_event(mouse(MouseEventKind::ScrollDown, 10, 10), Instant::now())
        .unwrap();
    assert!(!redraw);
}

#[test]
fn test_trigger_not_drawn_after_shrink_cannot_be_hovered() {
    let start = Instant::now();
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[1].trigger().unwrap();

    let output = render_to_string(&mut app, WIDTH, 12);
    assert!(!output.contains("[ top ]"));
    assert!(app.tooltips[1].trigger().is_none());

    app.handle_event(mouse_move(trigger.x, trigger.y), start).unwrap();
    app.tick(start + Duration::from_millis(500));

    assert!(!app.tooltips[1].is_visible());
}

#[test]
fn test_shrink_while_hovering_cancels_pending_tooltip() {
    let start = Instant::now();
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[1].trigger().unwrap();
    app.handle_event(mouse_move(trigger.x, trigger.y), start).unwrap();

    render_to_string(&mut app, WIDTH, 12);

    assert!(!app.tooltips[1].is_hovered());
    assert!(!app.tick(start + Duration::from_millis(500)));
    assert!(!app.tooltips[1].is_visible());
}

#[test]
fn test_collapse_moves_trigger_out_from_under_pointer() {
    let start = Instant::now();
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[0].trigger().unwrap();
    app.handle_event(mouse_move(trigger.x, trigger.y), start).unwrap();

    app.handle_event(key(KeyCode::Char('[')), start).unwrap();
    render_to_string(&mut app, WIDTH, HEIGHT);
    let moved = app.tooltips[0].trigger().unwrap();
    assert!(moved.x + moved.width <= trigger.x);

    app.tick(start + Duration::from_millis(500));

    assert!(!app.tooltips[0].is_hovered());
    assert!(!app.tooltips[0].is_visible());
}

#[test]
fn test_collapse_moves_trigger_under_resting_pointer() {
    let start = Instant::now();
    let later = start + Duration::from_millis(100);
    let mut app = test_app();
    app.navigate("/components/tooltip");
    render_to_string(&mut app, WIDTH, HEIGHT);
    let trigger = app.tooltips[0].trigger().unwrap();
    let shift = app.layout_regions.content.unwrap().x - 5;
    app.handle_event(mouse_move(trigger.x - shift, trigger.y), start).unwrap();
    assert!(!app.tooltips[0].is_hovered());

    app.handle_event(key(KeyCode::Char('[')), start).unwrap();
    render_to_string(&mut app, WIDTH, HEIGHT);

    assert!(app.tick(later));
    assert!(app.tooltips[0].is_hovered());
    assert!(app.tick(later + Duration::from_millis(500)));
    assert!(app.tooltips[0].is_visible());
    assert_eq!(app.tooltips[0].position(), crate::tooltip::anchor_for(app.tooltips[0].trigger().unwrap()));
}

#[test]
fn test_focus_lost_forgets_pointer() {
    let mut app = test_app();
    app.handle_event(mouse_move(3, 3), Instant::now()).unwrap();
    assert!(app.pointer.is_some());

    app.handle_event(Event::FocusLost, Instant::now()).unwrap();

    assert!(app.pointer.is_none());
}

use std::time::Instant;

use ratatui::layout::Position;

use super::pages::{Page, nav_tree};
use crate::checkbox::toggle_request;
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::navigation::{NavItem, NavigationProvider, NavigationState, visible_items};
use crate::page_title::{PageTitle, SharedTitleSink};
use crate::tokens::Theme;
use crate::tooltip::tooltip_events::{self, HoverChange};
use crate::tooltip::{Placement, TooltipProps, TooltipState};

/// A checkbox on the checkbox page; the gallery owns its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    pub label: &'static str,
    pub checked: bool,
    pub disabled: bool,
}

/// Label shown on a tooltip trigger, paired with the tooltip it wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSpec {
    pub label: &'static str,
    pub content: &'static str,
    pub placement: Placement,
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub nav_items: Vec<NavItem>,
    pub page: Page,
    /// Tooltips mounted for the current page
    pub tooltips: Vec<TooltipState>,
    pub triggers: Vec<TriggerSpec>,
    pub checkboxes: Vec<CheckboxItem>,
    pub focused_checkbox: usize,
    pub layout_regions: LayoutRegions,
    pub warnings: Vec<String>,
    pub help_visible: bool,
    /// Last pointer position reported by the terminal
    pub pointer: Option<Position>,
    should_quit: bool,
    page_title: Option<PageTitle>,
    title_sink: SharedTitleSink,
    navigation: NavigationProvider,
}

impl App {
    pub fn new(config: Config, theme: Theme, title_sink: SharedTitleSink) -> Self {
        let navigation = NavigationProvider::mount(NavigationState::new(Page::Overview.href()));

        let mut app = Self {
            config,
            theme,
            nav_items: nav_tree(),
            page: Page::Overview,
            tooltips: Vec::new(),
            triggers: Vec::new(),
            checkboxes: default_checkboxes(),
            focused_checkbox: 0,
            layout_regions: LayoutRegions::new(),
            warnings: Vec::new(),
            help_visible: false,
            pointer: None,
            should_quit: false,
            page_title: None,
            title_sink,
            navigation,
        };
        app.mount_page(Page::Overview);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigation.handle().snapshot()
    }

    /// Switch to the page at `href`. Unknown hrefs are ignored.
    pub fn navigate(&mut self, href: &str) -> bool {
        let Some(page) = Page::from_href(href) else {
            log::debug!("Ignoring navigation to unknown page {}", href);
            return false;
        };
        if page == self.page {
            return false;
        }

        self.unmount_page();
        self.mount_page(page);
        true
    }

    /// Move `step` entries through the visible sidebar items
    pub fn navigate_relative(&mut self, step: isize) -> bool {
        let state = self.navigation();
        let hrefs: Vec<String> = visible_items(&self.nav_items, &state)
            .iter()
            .map(|f| f.item.href().to_string())
            .collect();
        if hrefs.is_empty() {
            return false;
        }

        let target = match hrefs.iter().position(|h| *h == state.active_href) {
            Some(i) => i.saturating_add_signed(step).min(hrefs.len() - 1),
            None => 0,
        };
        let href = hrefs[target].clone();
        self.navigate(&href)
    }

    pub fn toggle_checkbox(&mut self, index: usize) -> bool {
        let Some(item) = self.checkboxes.get_mut(index) else {
            return false;
        };
        match toggle_request(item.checked, item.disabled) {
            Some(checked) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn focus_next_checkbox(&mut self) {
        if !self.checkboxes.is_empty() {
            self.focused_checkbox = (self.focused_checkbox + 1) % self.checkboxes.len();
        }
    }

    /// Fire due tooltip timers. Returns true when a redraw is needed.
    ///
    /// Hover is re-checked against the last pointer position first, since a
    /// collapse or resize can move triggers without any mouse event.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(pointer) = self.pointer {
            for tooltip in &mut self.tooltips {
                changed |= tooltip_events::resync_pointer(tooltip, pointer.x, pointer.y, now)
                    != HoverChange::Unchanged;
            }
        }
        tooltip_events::tick_all(&mut self.tooltips, now) || changed
    }

    /// When the event loop has to wake up next, if anything is pending
    pub fn next_deadline(&self) -> Option<Instant> {
        tooltip_events::next_deadline(&self.tooltips)
    }

    fn mount_page(&mut self, page: Page) {
        self.page = page;
        self.navigation.handle().set_active(page.href());

        self.triggers = page_triggers(page, self.config.tooltip.placement);
        let delay_ms = self.config.tooltip.delay_ms;
        self.tooltips = self
            .triggers
            .iter()
            .map(|t| {
                TooltipState::new(
                    TooltipProps::new(t.content)
                        .placement(t.placement)
                        .delay_ms(delay_ms),
                )
            })
            .collect();

        self.page_title = Some(PageTitle::mount(
            self.title_sink.clone(),
            page.title(),
            &self.config.site.base_title,
        ));
    }

    fn unmount_page(&mut self) {
        for tooltip in &mut self.tooltips {
            tooltip.unmount();
        }
        self.tooltips.clear();
        self.triggers.clear();
        // Restore the base title before the next page sets its own
        self.page_title.take();
        self.layout_regions.clear();
    }
}

fn default_checkboxes() -> Vec<CheckboxItem> {
    vec![
        CheckboxItem {
            label: "Email notifications",
            checked: true,
            disabled: false,
        },
        CheckboxItem {
            label: "Weekly digest",
            checked: false,
            disabled: false,
        },
        CheckboxItem {
            label: "Beta features (admin only)",
            checked: false,
            disabled: true,
        },
    ]
}

/// Tooltip demos shown on a page
pub fn page_triggers(page: Page, configured: Placement) -> Vec<TriggerSpec> {
    if page != Page::Tooltip {
        return Vec::new();
    }

    let mut triggers = vec![TriggerSpec {
        label: "Hover me",
        content: "Tooltips appear after the pointer rests on their trigger.",
        placement: configured,
    }];
    triggers.extend(Placement::ALL.into_iter().map(|placement| TriggerSpec {
        label: placement.label(),
        content: placement_hint(placement),
        placement,
    }));
    triggers
}

fn placement_hint(placement: Placement) -> &'static str {
    match placement {
        Placement::Top => "Centered above the trigger",
        Placement::Bottom => "Centered below the trigger",
        Placement::Left => "To the left of the trigger",
        Placement::Right => "To the right of the trigger",
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

//! Breadcrumb trail
//!
//! Every crumb but the last links somewhere; the last one is the current
//! page and is drawn bold without a link.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::navigation::NavItem;
use crate::tokens::Theme;

pub const SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn new(label: impl Into<String>, href: Option<String>) -> Self {
        Self {
            label: label.into(),
            href,
        }
    }
}

pub struct Breadcrumbs<'a> {
    crumbs: Vec<Crumb>,
    theme: &'a Theme,
}

impl<'a> Breadcrumbs<'a> {
    pub fn new(crumbs: Vec<Crumb>, theme: &'a Theme) -> Self {
        Self { crumbs, theme }
    }

    /// Crumbs for a navigation trail; the final item becomes the current page
    pub fn from_trail(trail: &[&NavItem], theme: &'a Theme) -> Self {
        let last = trail.len().saturating_sub(1);
        let crumbs = trail
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let href = (i != last).then(|| item.href().to_string());
                Crumb::new(item.label(), href)
            })
            .collect();
        Self::new(crumbs, theme)
    }

    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Plain-text form, e.g. `Components / Tooltip`
    pub fn text(&self) -> String {
        self.crumbs
            .iter()
            .map(|c| c.label.as_str())
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl Widget for Breadcrumbs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.crumbs.len() * 2);
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(self.theme.muted)));
            }
            let style = match crumb.href {
                Some(_) => Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::UNDERLINED),
                None => Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            };
            spans.push(Span::styled(crumb.label.clone(), style));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
#[path = "breadcrumbs_tests.rs"]
mod breadcrumbs_tests;

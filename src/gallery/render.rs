use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use unicode_width::UnicodeWidthStr;

use super::pages::Page;
use super::state::App;
use crate::breadcrumbs::{Breadcrumbs, Crumb};
use crate::checkbox::Checkbox;
use crate::navigation::{find_trail, render_sidebar, shell_layout};
use crate::tooltip::{render_overlay, render_trigger};
use crate::widgets::popup::{centered_in, clear_area, inset_rect};

const HELP_WIDTH: u16 = 44;
const HELP_HEIGHT: u16 = 11;
/// Horizontal distance between placement demo triggers
const TRIGGER_SPACING: u16 = 14;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [main_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        let nav = self.navigation();
        let shell = shell_layout(main_area, nav.collapsed);

        self.layout_regions.sidebar_rows =
            render_sidebar(frame, shell.sidebar, &self.nav_items, &nav, &self.theme);
        self.layout_regions.content = Some(shell.content);

        self.render_content(frame, shell.content);
        self.render_footer(frame, footer_area);

        // Overlays go last so they sit above everything else
        for tooltip in &self.tooltips {
            render_overlay(frame, tooltip, &self.theme);
        }

        if self.help_visible {
            self.render_help(frame);
        }
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.page.title()))
            .border_style(Style::default().fg(self.theme.border));
        let inner = inset_rect(block.inner(area), 1, 0);
        frame.render_widget(block, area);

        let [crumbs_area, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let trail = find_trail(&self.nav_items, self.page.href());
        frame.render_widget(Breadcrumbs::from_trail(&trail, &self.theme), crumbs_area);

        match self.page {
            Page::Overview => self.render_overview(frame, body),
            Page::Components | Page::Foundations => self.render_section(frame, body),
            Page::Tooltip => self.render_tooltip_page(frame, body),
            Page::Checkbox => self.render_checkbox_page(frame, body),
            Page::Breadcrumbs => self.render_breadcrumbs_page(frame, body),
            Page::Tokens => self.render_tokens_page(frame, body),
        }
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                "Swatch design system",
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Reusable terminal components styled by compiled design tokens."),
            Line::from("Pick a page in the sidebar, or press j/k to move between pages."),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(self.theme.text))
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_section(&self, frame: &mut Frame, area: Rect) {
        let trail = find_trail(&self.nav_items, self.page.href());
        let children = trail.last().map(|item| item.children()).unwrap_or(&[]);

        let lines: Vec<Line> = children
            .iter()
            .map(|child| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(self.theme.muted)),
                    Span::styled(child.label().to_string(), Style::default().fg(self.theme.text)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_tooltip_page(&mut self, frame: &mut Frame, area: Rect) {
        let intro = Paragraph::new("Rest the pointer on a trigger to show its tooltip.")
            .style(Style::default().fg(self.theme.muted));
        frame.render_widget(intro, Rect { height: 1, ..area }.intersection(area));

        let button_style = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD);

        for (i, (tooltip, trigger)) in self.tooltips.iter_mut().zip(&self.triggers).enumerate() {
            let label = format!("[ {} ]", trigger.label);
            let width = label.width() as u16;
            let (x, y) = if i == 0 {
                (area.x.saturating_add(2), area.y.saturating_add(5))
            } else {
                let column = (i - 1) as u16;
                (
                    area.x
                        .saturating_add(2)
                        .saturating_add(column * TRIGGER_SPACING),
                    area.y.saturating_add(11),
                )
            };

            let trigger_area = Rect::new(x, y, width, 1).intersection(area);
            if trigger_area.is_empty() {
                tooltip.clear_trigger();
                continue;
            }
            render_trigger(
                frame,
                trigger_area,
                tooltip,
                Paragraph::new(Span::styled(label, button_style)),
            );
        }
    }

    fn render_checkbox_page(&mut self, frame: &mut Frame, area: Rect) {
        for (i, item) in self.checkboxes.iter().enumerate() {
            let checkbox = Checkbox::new(item.label, item.checked, &self.theme)
                .disabled(item.disabled)
                .focused(i == self.focused_checkbox);
            let row = Rect::new(area.x, area.y.saturating_add(i as u16), checkbox.width(), 1)
                .intersection(area);
            self.layout_regions.checkboxes.push(row);
            frame.render_widget(checkbox, row);
        }

        let selected: Vec<&str> = self
            .checkboxes
            .iter()
            .filter(|c| c.checked)
            .map(|c| c.label)
            .collect();
        let summary = if selected.is_empty() {
            "Selected: none".to_string()
        } else {
            format!("Selected: {}", selected.join(", "))
        };
        let summary_area = Rect {
            y: area.y.saturating_add(self.checkboxes.len() as u16 + 1),
            height: 1,
            ..area
        }
        .intersection(area);
        frame.render_widget(
            Paragraph::new(summary).style(Style::default().fg(self.theme.muted)),
            summary_area,
        );
    }

    fn render_breadcrumbs_page(&self, frame: &mut Frame, area: Rect) {
        let examples = [
            vec![Crumb::new("Overview", None)],
            vec![
                Crumb::new("Foundations", Some(Page::Foundations.href().to_string())),
                Crumb::new("Tokens", None),
            ],
            vec![
                Crumb::new("Settings", Some("/settings".to_string())),
                Crumb::new("Team", Some("/settings/team".to_string())),
                Crumb::new("Permissions", None),
            ],
        ];

        for (i, crumbs) in examples.into_iter().enumerate() {
            let row = Rect {
                y: area.y.saturating_add(i as u16 * 2),
                height: 1,
                ..area
            }
            .intersection(area);
            frame.render_widget(Breadcrumbs::new(crumbs, &self.theme), row);
        }
    }

    fn render_tokens_page(&self, frame: &mut Frame, area: Rect) {
        let semantic = [
            ("primary", self.theme.primary),
            ("surface", self.theme.surface),
            ("text", self.theme.text),
            ("muted", self.theme.muted),
            ("border", self.theme.border),
            ("tooltip-bg", self.theme.tooltip_bg),
            ("tooltip-fg", self.theme.tooltip_fg),
        ];

        let mut lines: Vec<Line> = semantic
            .iter()
            .map(|(name, color)| {
                Line::from(vec![
                    Span::styled("██ ", Style::default().fg(*color)),
                    Span::styled(format!("{:<12}", name), Style::default().fg(self.theme.text)),
                    Span::styled(color.to_string(), Style::default().fg(self.theme.muted)),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        if self.theme.tokens.is_empty() {
            lines.push(Line::from(Span::styled(
                "No compiled tokens loaded; showing the built-in theme.",
                Style::default().fg(self.theme.muted),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{} tokens loaded", self.theme.tokens.len()),
                Style::default().fg(self.theme.muted),
            )));
            for (name, value) in &self.theme.tokens {
                lines.push(Line::from(format!("--{}: {}", name, value)));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match self.warnings.first() {
            Some(warning) => Line::from(Span::styled(
                warning.as_str(),
                Style::default().fg(ratatui::style::Color::Yellow),
            )),
            None => Line::from(Span::styled(
                " j/k: pages  [: sidebar  ?: help  q: quit",
                Style::default().fg(self.theme.muted),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let area = centered_in(frame.area(), HELP_WIDTH, HELP_HEIGHT);
        clear_area(frame, area);

        let rows = [
            ("j / ↓", "Next page"),
            ("k / ↑", "Previous page"),
            ("[", "Collapse or expand sidebar"),
            ("Tab", "Focus next checkbox"),
            ("Space", "Toggle focused checkbox"),
            ("?", "Toggle this help"),
            ("q / Esc", "Quit"),
        ];
        let lines: Vec<Line> = rows
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default().fg(self.theme.primary),
                    ),
                    Span::raw(*action),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Keys ")
            .border_style(Style::default().fg(self.theme.primary));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

use crate::navigation::NavItem;

/// Documentation pages of the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Components,
    Tooltip,
    Checkbox,
    Breadcrumbs,
    Foundations,
    Tokens,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::Components,
        Page::Tooltip,
        Page::Checkbox,
        Page::Breadcrumbs,
        Page::Foundations,
        Page::Tokens,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Page::Overview => "/",
            Page::Components => "/components",
            Page::Tooltip => "/components/tooltip",
            Page::Checkbox => "/components/checkbox",
            Page::Breadcrumbs => "/components/breadcrumbs",
            Page::Foundations => "/foundations",
            Page::Tokens => "/foundations/tokens",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Components => "Components",
            Page::Tooltip => "Tooltip",
            Page::Checkbox => "Checkbox",
            Page::Breadcrumbs => "Breadcrumbs",
            Page::Foundations => "Foundations",
            Page::Tokens => "Tokens",
        }
    }

    pub fn from_href(href: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.href() == href)
    }
}

/// Sidebar tree for the gallery
pub fn nav_tree() -> Vec<NavItem> {
    let leaf = |page: Page| NavItem::leaf(page.title(), page.href());

    vec![
        leaf(Page::Overview),
        NavItem::branch(
            Page::Components.title(),
            Page::Components.href(),
            vec![
                leaf(Page::Tooltip),
                leaf(Page::Checkbox),
                leaf(Page::Breadcrumbs),
            ],
        ),
        NavItem::branch(
            Page::Foundations.title(),
            Page::Foundations.href(),
            vec![leaf(Page::Tokens)],
        ),
    ]
}

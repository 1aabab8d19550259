/// An entry in the sidebar tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Leaf {
        label: String,
        href: String,
    },
    Branch {
        label: String,
        href: String,
        children: Vec<NavItem>,
    },
}

impl NavItem {
    pub fn leaf(label: impl Into<String>, href: impl Into<String>) -> Self {
        NavItem::Leaf {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn branch(label: impl Into<String>, href: impl Into<String>, children: Vec<NavItem>) -> Self {
        NavItem::Branch {
            label: label.into(),
            href: href.into(),
            children,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavItem::Leaf { label, .. } | NavItem::Branch { label, .. } => label,
        }
    }

    pub fn href(&self) -> &str {
        match self {
            NavItem::Leaf { href, .. } | NavItem::Branch { href, .. } => href,
        }
    }

    pub fn children(&self) -> &[NavItem] {
        match self {
            NavItem::Leaf { .. } => &[],
            NavItem::Branch { children, .. } => children,
        }
    }
}

/// A nav item paired with its nesting depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatItem<'a> {
    pub item: &'a NavItem,
    pub depth: usize,
}

/// Depth-first listing of the tree, parents before children
pub fn flatten(items: &[NavItem]) -> Vec<FlatItem<'_>> {
    let mut out = Vec::new();
    flatten_into(items, 0, &mut out);
    out
}

fn flatten_into<'a>(items: &'a [NavItem], depth: usize, out: &mut Vec<FlatItem<'a>>) {
    for item in items {
        out.push(FlatItem { item, depth });
        flatten_into(item.children(), depth + 1, out);
    }
}

/// Path from a root item down to the item with `href`, or empty if absent
pub fn find_trail<'a>(items: &'a [NavItem], href: &str) -> Vec<&'a NavItem> {
    for item in items {
        if item.href() == href {
            return vec![item];
        }
        let below = find_trail(item.children(), href);
        if !below.is_empty() {
            let mut trail = Vec::with_capacity(below.len() + 1);
            trail.push(item);
            trail.extend(below);
            return trail;
        }
    }
    Vec::new()
}

#[cfg(test)]
#[path = "nav_item_tests.rs"]
mod nav_item_tests;

//! Static navigation table of the dashboard sidebar

use crate::routes::Page;

/// Icons the sidebar can show next to a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Video,
    Bot,
    Star,
}

impl Icon {
    /// Font Awesome classes rendering the icon
    pub const fn class(self) -> &'static str {
        match self {
            Self::Video => "fa-solid fa-video",
            Self::Bot => "fa-solid fa-robot",
            Self::Star => "fa-solid fa-star",
        }
    }
}

/// A single sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: Icon,
    pub label: &'static str,
    pub route: Page,
}

impl NavItem {
    /// Path the link points to
    pub const fn href(&self) -> &'static str {
        self.route.path()
    }

    /// A link is active only when the current pathname is exactly its route's path
    pub fn is_active(&self, pathname: &str) -> bool {
        pathname == self.href()
    }
}

/// Main features of the application
pub const FIRST_SECTION: &[NavItem] = &[
    NavItem {
        icon: Icon::Video,
        label: "Meetings",
        route: Page::Meetings,
    },
    NavItem {
        icon: Icon::Bot,
        label: "Agents",
        route: Page::Agents,
    },
];

/// Account related links, separated from the main features
pub const SECOND_SECTION: &[NavItem] = &[NavItem {
    icon: Icon::Star,
    label: "Upgrade",
    route: Page::Upgrade,
}];

/// Sidebar sections in display order
pub const SECTIONS: &[&[NavItem]] = &[FIRST_SECTION, SECOND_SECTION];

/// The sidebar item highlighted for `pathname`, if any
pub fn active_item(pathname: &str) -> Option<&'static NavItem> {
    let page = Page::from_path(pathname)?;
    SECTIONS
        .iter()
        .flat_map(|section| section.iter())
        .find(|item| item.route == page)
}

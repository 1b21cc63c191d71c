//! Page navigation state for the school site.
//!
//! [`NavigationState`] is the single source of truth for what the site shows.
//! It changes only through [`NavigationState::navigate_to_page`],
//! [`NavigationState::select_detail`] and [`NavigationState::clear_detail`];
//! [`crate::core::resolve_content`] turns it into something renderable.

/// Top-level site pages, in navigation bar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Academics,
    Admissions,
    Contact,
}

impl Page {
    /// Every page, in the order the navigation bar lists them.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Academics,
        Page::Admissions,
        Page::Contact,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Academics => "Academics",
            Self::Admissions => "Admissions",
            Self::Contact => "Contact",
        }
    }

    /// Whether the page lists entries the user can drill into.
    pub fn is_drillable(self) -> bool {
        matches!(self, Self::Academics)
    }
}

/// One entry of a listing page (e.g., an academic program).
///
/// Entries live in a static catalog and are never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DetailItem {
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

/// Current page plus the optionally selected detail entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    current_page: Page,
    selected_detail: Option<&'static DetailItem>,
}

impl NavigationState {
    /// Start on the home page with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn selected_detail(&self) -> Option<&'static DetailItem> {
        self.selected_detail
    }

    /// Switch to `page`, dropping any selected detail.
    pub fn navigate_to_page(&mut self, page: Page) {
        self.current_page = page;
        self.selected_detail = None;
    }

    /// Drill into `item`. The current page is left as is.
    pub fn select_detail(&mut self, item: &'static DetailItem) {
        self.selected_detail = Some(item);
    }

    /// Leave the detail view and return to the current page's listing.
    pub fn clear_detail(&mut self) {
        self.selected_detail = None;
    }
}

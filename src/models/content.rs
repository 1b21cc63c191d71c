//! Render-ready descriptors produced from navigation state.

use super::navigation::{DetailItem, Page};

/// Static content block for one top-level page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub page: Page,
    /// Page heading
    pub heading: &'static str,
    /// Short line under the heading
    pub tagline: &'static str,
    /// Markdown body
    pub body: &'static str,
    /// Selectable entries (empty for non-drillable pages)
    pub entries: &'static [DetailItem],
}

/// What the site should show right now.
///
/// The rendering layer receives only this, never the raw state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentDescriptor {
    /// A top-level page, possibly with entries to drill into.
    Listing(PageContent),
    /// A single selected entry.
    Detail {
        title: &'static str,
        body: &'static str,
        show_back: bool,
    },
}

impl ContentDescriptor {
    /// Title to show in the browser tab / page header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Listing(content) => content.heading,
            Self::Detail { title, .. } => title,
        }
    }
}

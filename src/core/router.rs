//! View-state resolution for the school site.

use super::catalog::page_content;
use crate::models::{ContentDescriptor, NavigationState};

/// Resolve navigation state into the content to render.
///
/// A selected detail always takes precedence over the current page.
pub fn resolve_content(state: &NavigationState) -> ContentDescriptor {
    match state.selected_detail() {
        Some(item) => ContentDescriptor::Detail {
            title: item.title,
            body: item.body,
            show_back: true,
        },
        None => ContentDescriptor::Listing(page_content(state.current_page())),
    }
}

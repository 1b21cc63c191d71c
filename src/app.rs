//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Shell;
use crate::core::{FileLoader, resolve_content};
use crate::models::{ContentDescriptor, Demo, DetailItem, NavigationState, Page};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// Site navigation state is only changed through [`AppContext::navigate_to_page`],
/// [`AppContext::select_detail`] and [`AppContext::clear_detail`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Demo shown by the shell.
    pub demo: RwSignal<Demo>,

    /// School site navigation.
    nav: RwSignal<NavigationState>,

    /// File viewer state.
    pub files: RwSignal<FileLoader>,
}

impl AppContext {
    /// Creates a new application context with default state:
    /// site demo, home page, no file loaded.
    pub fn new() -> Self {
        Self {
            demo: RwSignal::new(Demo::default()),
            nav: RwSignal::new(NavigationState::new()),
            files: RwSignal::new(FileLoader::new()),
        }
    }

    pub fn current_page(&self) -> Page {
        self.nav.with(NavigationState::current_page)
    }

    /// Resolved site content for the current navigation state.
    pub fn content(&self) -> ContentDescriptor {
        self.nav.with(resolve_content)
    }

    pub fn navigate_to_page(&self, page: Page) {
        self.nav.update(|nav| nav.navigate_to_page(page));
    }

    pub fn select_detail(&self, item: &'static DetailItem) {
        self.nav.update(|nav| nav.select_detail(item));
    }

    pub fn clear_detail(&self) {
        self.nav.update(NavigationState::clear_detail);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the Shell component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #b3261e; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #b3261e; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.75rem 2rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}

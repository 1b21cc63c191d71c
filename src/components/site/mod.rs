//! School website demo.
//!
//! - [`Site`] - Header, page navigation, content and footer
//! - [`router`] - Renders whatever the navigation state resolves to
//! - [`nav`] - Top-level page navigation bar

mod nav;
mod router;

use leptos::prelude::*;

use crate::config::{SITE_FOOTER, SITE_NAME, SITE_TAGLINE};
use nav::NavBar;
use router::SiteRouter;

stylance::import_crate_style!(css, "src/components/site/site.module.css");

/// Multi-page informational site with client-side page switching.
#[component]
pub fn Site() -> impl IntoView {
    view! {
        <div class=css::site>
            <header class=css::header>
                <h1 class=css::name>{SITE_NAME}</h1>
                <p class=css::tagline>{SITE_TAGLINE}</p>
                <NavBar />
            </header>

            <main class=css::main>
                <SiteRouter />
            </main>

            <footer class=css::footer>{SITE_FOOTER}</footer>
        </div>
    }
}

//! Top-level page navigation bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/site/site.module.css");

/// One button per page. Selecting a page always leaves any detail view.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let links = Page::ALL
        .into_iter()
        .map(|page| {
            let is_current = move || ctx.current_page() == page;
            view! {
                <li>
                    <button
                        class=move || if is_current() { css::navLinkActive } else { css::navLink }
                        aria-current=move || is_current().then_some("page")
                        on:click=move |_| ctx.navigate_to_page(page)
                    >
                        <Icon icon=ic::page_icon(page) />
                        <span>{page.label()}</span>
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class=css::nav aria-label="Site">
            <ul class=css::navList>{links}</ul>
        </nav>
    }
}

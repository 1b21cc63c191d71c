//! Site content router.
//!
//! Renders the [`ContentDescriptor`] resolved from the navigation state.
//!
//! # Architecture
//!
//! - **Navigation state is the source of truth**: nothing here reads the URL
//! - **Views receive descriptors only**: never the raw state
//! - **Actions are passed down**: detail selection and back are explicit callbacks

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::SITE_NAME;
use crate::models::{ContentDescriptor, DetailItem, PageContent};
use crate::utils::{dom, markdown_to_html};

stylance::import_crate_style!(css, "src/components/site/site.module.css");

// ============================================================================
// Router
// ============================================================================

/// Renders the listing or detail view for the current navigation state.
#[component]
pub fn SiteRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let content = Memo::new(move |_| ctx.content());

    // Keep the tab title in sync and start each view at the top
    Effect::new(move |_| {
        let title = content.get().title();
        dom::set_title(&format!("{} | {}", title, SITE_NAME));
        dom::scroll_to_top();
    });

    let on_select = Callback::new(move |item: &'static DetailItem| ctx.select_detail(item));
    let on_back = Callback::new(move |_: ()| ctx.clear_detail());

    view! {
        {move || match content.get() {
            ContentDescriptor::Listing(page) => {
                view! { <ListingView content=page on_select=on_select /> }.into_any()
            }
            ContentDescriptor::Detail {
                title,
                body,
                show_back,
            } => view! {
                <DetailView title=title body=body show_back=show_back on_back=on_back />
            }
            .into_any(),
        }}
    }
}

// ============================================================================
// Listing View
// ============================================================================

/// A page's static block, plus its entries if it has any.
#[component]
fn ListingView(content: PageContent, on_select: Callback<&'static DetailItem>) -> impl IntoView {
    let body_html = markdown_to_html(content.body);

    let entries = content
        .entries
        .iter()
        .map(|item| {
            view! {
                <li>
                    <button class=css::entry on:click=move |_| on_select.run(item)>
                        <span class=css::entryText>
                            <span class=css::entryTitle>{item.title}</span>
                            <span class=css::entrySummary>{item.summary}</span>
                        </span>
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let entries = (!entries.is_empty()).then(|| view! { <ul class=css::entries>{entries}</ul> });

    view! {
        <section class=css::page>
            <h2 class=css::heading>{content.heading}</h2>
            <p class=css::pageTagline>{content.tagline}</p>
            <div class=css::body inner_html=body_html></div>
            {entries}
        </section>
    }
}

// ============================================================================
// Detail View
// ============================================================================

/// One selected entry with a back control.
#[component]
fn DetailView(
    title: &'static str,
    body: &'static str,
    show_back: bool,
    on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <article class=css::page>
            {show_back
                .then(|| {
                    view! {
                        <button class=css::back on:click=move |_| on_back.run(())>
                            <Icon icon=ic::CHEVRON_LEFT />
                            <span>"Back"</span>
                        </button>
                    }
                })}
            <h2 class=css::heading>{title}</h2>
            <p class=css::body>{body}</p>
        </article>
    }
}

//! Main shell component.
//!
//! Container component that switches between the three demos via a tab bar.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::callbacks::CallbackDemo;
use crate::components::file_viewer::FileViewer;
use crate::components::icons as ic;
use crate::components::site::Site;
use crate::models::Demo;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Shell component managing demo switching.
///
/// Demo state that must survive tab switches (site navigation, loaded file)
/// lives in [`AppContext`]; everything else is local to each demo.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let tabs = Demo::ALL
        .into_iter()
        .map(|demo| {
            let class = move || {
                if ctx.demo.get() == demo {
                    css::tabActive
                } else {
                    css::tab
                }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| ctx.demo.set(demo)
                    aria-pressed=move || (ctx.demo.get() == demo).to_string()
                >
                    <Icon icon=ic::demo_icon(demo) />
                    <span>{demo.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::screen>
            <nav class=css::tabs aria-label="Demos">{tabs}</nav>

            <div class=css::main>
                {move || match ctx.demo.get() {
                    Demo::Site => view! { <Site /> }.into_any(),
                    Demo::FileViewer => view! { <FileViewer /> }.into_any(),
                    Demo::Callbacks => view! { <CallbackDemo /> }.into_any(),
                }}
            </div>
        </div>
    }
}

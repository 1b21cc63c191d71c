//! Local text file viewer demo.
//!
//! Picks one file, reads it fully into memory and shows its contents.
//! Markdown files can be toggled between source and rendered view.

mod hook;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::FILE_ACCEPT;
use crate::core::FileLoader;
use crate::models::{FileKind, FileReadResult};
use crate::utils::{dom, format_size, line_count, markdown_to_html};

use hook::select_file;

stylance::import_crate_style!(css, "src/components/file_viewer/file_viewer.module.css");
stylance::import_crate_style!(md_css, "src/components/file_viewer/markdown.module.css");

/// File picker plus the last read result.
#[component]
pub fn FileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let files = ctx.files;

    let on_change = move |ev: ev::Event| {
        select_file(files, dom::first_selected_file(&ev));
        // Allow re-selecting the same file to reload it
        dom::reset_file_input(&ev);
    };

    let loading = Signal::derive(move || files.with(FileLoader::is_loading));
    let pending_label = Signal::derive(move || {
        files.with(|l| {
            let name = l.current_name().unwrap_or_default();
            let size = format_size(l.pending().and_then(|p| p.size));
            format!("{} ({})", name, size)
        })
    });

    view! {
        <section class=css::viewer>
            <h2 class=css::title>"Local file viewer"</h2>

            <label class=css::picker>
                <Icon icon=ic::UPLOAD />
                <span>"Choose a text file"</span>
                <input class=css::input type="file" accept=FILE_ACCEPT on:change=on_change />
            </label>

            <Show when=move || loading.get()>
                <p class=css::loading>"Reading " {move || pending_label.get()} "..."</p>
            </Show>

            {move || {
                files
                    .with(|l| l.result().cloned())
                    .map(|result| match result {
                        FileReadResult::Success { name, content } => {
                            view! { <FileContent name=name content=content /> }.into_any()
                        }
                        FileReadResult::Failure { .. } => {
                            let reason = result.reason().unwrap_or_default();
                            let name = result.name().unwrap_or("file").to_string();
                            view! {
                                <p class=css::error role="alert">
                                    <Icon icon=ic::ALERT />
                                    <span>{format!("Could not load {}: {}", name, reason)}</span>
                                </p>
                            }
                            .into_any()
                        }
                    })
            }}
        </section>
    }
}

/// Loaded file: name, size, and content.
#[component]
fn FileContent(name: String, content: String) -> impl IntoView {
    let kind = FileKind::from_name(&name);
    let meta = format!(
        "{} · {} lines",
        format_size(Some(content.len() as u64)),
        line_count(&content)
    );
    let html = (kind == FileKind::Markdown).then(|| markdown_to_html(&content));
    let can_render = html.is_some();
    let show_rendered = RwSignal::new(can_render);

    let toggle = can_render.then(|| {
        view! {
            <button class=css::toggle on:click=move |_| show_rendered.update(|v| *v = !*v)>
                {move || if show_rendered.get() { "Show source" } else { "Show rendered" }}
            </button>
        }
    });

    view! {
        <article class=css::file>
            <header class=css::fileHeader>
                <Icon icon=ic::FILE_TEXT />
                <h3 class=css::fileName>"File Name: " {name}</h3>
                <span class=css::fileMeta>{meta}</span>
                {toggle}
            </header>

            <h4 class=css::contentLabel>"File Content:"</h4>
            {move || match html.as_ref().filter(|_| show_rendered.get()) {
                Some(html) => {
                    view! { <div class=md_css::markdown inner_html=html.clone()></div> }.into_any()
                }
                None => view! { <pre class=css::content>{content.clone()}</pre> }.into_any(),
            }}
        </article>
    }
}

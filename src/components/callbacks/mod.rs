//! Upward callback demo.
//!
//! The parent owns all state and hands the child a [`Callback`]; the child
//! reports what happened through it and never sees the parent's signals.

use leptos::{ev, prelude::*};

use crate::config::MAX_CALLBACK_LOG;
use crate::core::{CallbackLog, ChildEvent};

stylance::import_crate_style!(css, "src/components/callbacks/callbacks.module.css");

/// Parent component: shows the latest message and a bounded event log.
#[component]
pub fn CallbackDemo() -> impl IntoView {
    let log = RwSignal::new(CallbackLog::new(MAX_CALLBACK_LOG));

    let on_notify = Callback::new(move |event: ChildEvent| {
        log.update(|l| l.record(&event));
    });

    let latest = move || {
        log.with(|l| {
            l.latest()
                .unwrap_or("No message from the child yet")
                .to_string()
        })
    };

    view! {
        <section class=css::parent>
            <h2 class=css::title>"Parent component"</h2>
            <p class=css::latest>{latest}</p>
            <p class=css::count>
                {move || format!("Events received: {}", log.with(CallbackLog::received))}
            </p>

            <Child on_notify=on_notify />

            <div class=css::logHeader>
                <h3>"Event log"</h3>
                <button class=css::button on:click=move |_| log.update(CallbackLog::clear)>
                    "Clear"
                </button>
            </div>
            <ol class=css::log>
                {move || {
                    log.with(|l| {
                        l.entries()
                            .map(|entry| view! { <li>{entry.to_string()}</li> })
                            .collect::<Vec<_>>()
                    })
                }}
            </ol>
        </section>
    }
}

/// Child component: owns only its own click tally and draft message.
#[component]
fn Child(on_notify: Callback<ChildEvent>) -> impl IntoView {
    let clicks = RwSignal::new(0u32);
    let draft = RwSignal::new(String::from("Hello from the child!"));

    let send_greeting =
        move |_: ev::MouseEvent| on_notify.run(ChildEvent::Greeting(draft.get()));
    let click = move |_: ev::MouseEvent| {
        clicks.update(|c| *c += 1);
        on_notify.run(ChildEvent::Clicked {
            count: clicks.get_untracked(),
        });
    };

    view! {
        <div class=css::child>
            <h3 class=css::title>"Child component"</h3>
            <input
                class=css::input
                type="text"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <div class=css::actions>
                <button class=css::button on:click=send_greeting>"Send greeting"</button>
                <button class=css::button on:click=click>
                    {move || format!("Click me ({})", clicks.get())}
                </button>
            </div>
        </div>
    }
}

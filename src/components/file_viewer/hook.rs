//! File loading hook.
//!
//! Bridges the `<input type="file">` change event to the shared
//! [`FileLoader`] and runs the read on the local executor.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::{FileLoader, ReadOutcome, read_file};
use crate::utils::dom;

/// Start reading `file` into `loader`.
///
/// `None` (picker cancelled) is a no-op. Failures are surfaced with a
/// blocking alert once they become the visible result; completions
/// superseded by a newer selection are dropped.
pub fn select_file(loader: RwSignal<FileLoader>, file: Option<web_sys::File>) {
    let Some(file) = file else {
        return;
    };
    let Some(ticket) = loader
        .try_update(|l| l.select_file(Some(&file)))
        .flatten()
    else {
        return;
    };

    spawn_local(async move {
        let result = read_file(&file).await;
        let outcome = loader
            .try_update(|l| l.complete(ticket, result))
            .unwrap_or(ReadOutcome::Stale);

        match outcome {
            ReadOutcome::Shown => {}
            ReadOutcome::Failed(message) => {
                web_sys::console::error_1(&message.clone().into());
                dom::alert(&message);
            }
            ReadOutcome::Stale => {
                web_sys::console::warn_1(
                    &format!("Dropped stale read of \"{}\"", file.name()).into(),
                );
            }
        }
    });
}

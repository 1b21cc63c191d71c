//! Utility modules for DOM and display helpers.
//!
//! Provides:
//! - [`dom`] - Browser window helpers (alerts, file inputs)
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`format_size`], [`line_count`] - Display formatting
//!
//! Also implements [`crate::core::FileSource`] for `web_sys::File`.

pub mod dom;
mod file;
mod format;
mod markdown;

pub use format::{format_size, line_count};
pub use markdown::markdown_to_html;

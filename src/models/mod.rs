//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Page`], [`DetailItem`], [`NavigationState`] - School site navigation
//! - [`ContentDescriptor`], [`PageContent`] - Render-ready site content
//! - [`FileReadResult`], [`FileKind`] - Local file viewer
//! - [`Demo`] - Shell tab selection

mod content;
mod demo;
mod file;
mod navigation;

pub use content::{ContentDescriptor, PageContent};
pub use demo::Demo;
pub use file::{FileKind, FileReadResult};
pub use navigation::{DetailItem, NavigationState, Page};

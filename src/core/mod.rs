//! Core logic, independent of the DOM.
//!
//! This module provides:
//! - [`resolve_content`] mapping navigation state to a [`crate::models::ContentDescriptor`]
//! - [`catalog`] with the static page table and program list
//! - [`FileLoader`] and [`read_file`] for loading local text files
//! - [`CallbackLog`] for the callback demo

pub mod callbacks;
pub mod catalog;
pub mod error;
mod loader;
mod router;

pub use callbacks::{CallbackLog, ChildEvent};
pub use loader::{FileLoader, FileSource, PendingRead, ReadOutcome, ReadTicket, read_file};
pub use router::resolve_content;

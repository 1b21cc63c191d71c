//! UI components built with Leptos.
//!
//! - [`Shell`] - Demo tab bar and container
//! - [`site`] - School website with page switching and drill-down
//! - [`file_viewer`] - Local text file viewer
//! - [`callbacks`] - Parent/child upward callback demo
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod callbacks;
pub mod file_viewer;
pub mod icons;
pub mod shell;
pub mod site;

pub use shell::Shell;

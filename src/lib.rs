//! Client-side demos built with Leptos: a local text file viewer, a
//! parent/child callback pair, and a multi-page school website.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext};

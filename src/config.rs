//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Page text is loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Home page body.
pub const HOME_TEXT: &str = include_str!("../assets/content/home.md");

/// About page body.
pub const ABOUT_TEXT: &str = include_str!("../assets/content/about.md");

/// Academics page introduction (program entries come from the catalog).
pub const ACADEMICS_TEXT: &str = include_str!("../assets/content/academics.md");

/// Admissions page body.
pub const ADMISSIONS_TEXT: &str = include_str!("../assets/content/admissions.md");

/// Contact page body.
pub const CONTACT_TEXT: &str = include_str!("../assets/content/contact.md");

// =============================================================================
// Application Metadata
// =============================================================================

/// Institution name shown in the site header.
pub const SITE_NAME: &str = "Northfield Institute of Technology";

/// Tagline under the site name.
pub const SITE_TAGLINE: &str = "Learning by building since 1962";

/// Footer line.
pub const SITE_FOOTER: &str = "© Northfield Institute of Technology";

// =============================================================================
// File Viewer Configuration
// =============================================================================

/// `accept` attribute for the file picker. Empty means any file.
pub const FILE_ACCEPT: &str = ".txt,.md,.markdown,.csv,.json,.log,.toml,.rs,text/*";

// =============================================================================
// Callback Demo Configuration
// =============================================================================

/// Maximum number of child events kept in the parent's log.
pub const MAX_CALLBACK_LOG: usize = 8;

// =============================================================================
// Icon Theme
// =============================================================================

/// Available icon themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum IconTheme {
    /// Lucide icons
    Lucide,
    /// Bootstrap icons
    Bootstrap,
}

/// Icon theme used across the UI.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

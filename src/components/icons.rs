//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons,
//! and pages/demos to their icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{Demo, Page};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Callbacks, LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuClipboardList as Admissions, LuFileText as FileText, LuGraduationCap as Academics,
        LuHouse as Home, LuInfo as About, LuMail as Contact, LuSchool as Site,
        LuTriangleAlert as Alert, LuUpload as Upload,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Callbacks, BsBuilding as Site, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClipboardCheck as Admissions, BsEnvelope as Contact,
        BsExclamationTriangle as Alert, BsFileEarmarkText as FileText, BsHouseFill as Home,
        BsInfoCircle as About, BsMortarboard as Academics, BsUpload as Upload,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(ABOUT, About);
themed_icon!(ACADEMICS, Academics);
themed_icon!(ADMISSIONS, Admissions);
themed_icon!(CONTACT, Contact);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(UPLOAD, Upload);
themed_icon!(ALERT, Alert);
themed_icon!(SITE, Site);
themed_icon!(CALLBACKS, Callbacks);

// =============================================================================
// Lookups
// =============================================================================

/// Icon shown next to a page in the navigation bar.
pub fn page_icon(page: Page) -> Icon {
    match page {
        Page::Home => HOME,
        Page::About => ABOUT,
        Page::Academics => ACADEMICS,
        Page::Admissions => ADMISSIONS,
        Page::Contact => CONTACT,
    }
}

/// Icon shown on a demo tab.
pub fn demo_icon(demo: Demo) -> Icon {
    match demo {
        Demo::Site => SITE,
        Demo::FileViewer => FILE_TEXT,
        Demo::Callbacks => CALLBACKS,
    }
}

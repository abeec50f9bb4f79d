//! Shared UI crate for Reviewdesk. Layout chrome and route-agnostic views live here.

use dioxus::prelude::*;

pub mod views;

pub mod components {
    // Sidebar navigation and the link rendering seam (components/layout/)
    pub mod layout;
    pub use layout::Navigation;
}

/// Shared theme stylesheet (ui/assets/theme/main.css), linked by the web shell.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

//! Shared UI crate for BioCircuit. The wizard logic, the overlay generators
//! and every view live here; the platform crates only launch them.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod overlay;
pub mod views;
pub mod wizard;

pub mod components {
    // Fixed header with badge, About trigger and locale switcher (components/mini_header.rs)
    mod mini_header;
    pub use mini_header::MiniHeader;

    mod about_modal;
    pub use about_modal::AboutModal;
}

/// Shared theme stylesheet. Web links it as an asset; desktop inlines the file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

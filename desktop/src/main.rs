#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::views::Wizard;

// Shared theme, inlined so packaged builds need no stylesheet on disk.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("BioCircuit – v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(LogicalSize::new(1200.0, 820.0))
                        .with_min_inner_size(LogicalSize::new(420.0, 560.0)),
                )
                .with_menu(None),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::use_language_root();

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }
        Wizard {}
    }
}

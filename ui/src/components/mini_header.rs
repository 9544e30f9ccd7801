use crate::components::AboutModal;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));
const LOGO: Asset = asset!("/assets/logo.svg");

/// Fixed header shown on every step after the intro: brand, demo badge,
/// "About" dialog trigger and the locale switcher.
///
/// Selecting a locale goes through [`i18n::switch_language`], which bumps the
/// shared language signal so every subscribed view re-renders.
#[component]
pub fn MiniHeader() -> Element {
    let lang = i18n::use_language();
    let langs = use_signal(i18n::available_languages);
    let mut about_open = use_signal(|| false);
    let show_switcher = langs().len() > 1;

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { class: "mini-header",
            div { class: "mini-header__inner",
                div { class: "mini-header__brand",
                    img { class: "mini-header__logo", src: LOGO, alt: "BioCircuit" }
                    span { class: "mini-header__name", "BioCircuit" }
                }

                div { class: "mini-header__actions",
                    span { class: "mini-header__badge",
                        span { class: "mini-header__badge-long", {t!("header-badge")} }
                        span { class: "mini-header__badge-short", {t!("header-badge-short")} }
                    }

                    button {
                        r#type: "button",
                        class: "mini-header__about",
                        onclick: move |_| about_open.set(true),
                        {t!("header-about")}
                    }

                    if show_switcher {
                        div { class: "mini-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("header-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{lang}",
                                oninput: move |evt: FormEvent| i18n::switch_language(&evt.value()),
                                for code in langs() {
                                    option { key: "{code}", value: "{code}", "{code}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        AboutModal {
            open: about_open(),
            on_close: move |_| about_open.set(false),
        }
    }
}

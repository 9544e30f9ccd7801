use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// "What is BioCircuit?" dialog. Closes on backdrop click, the close button
/// or Escape.
#[component]
pub fn AboutModal(open: bool, on_close: EventHandler<()>) -> Element {
    let _lang = i18n::use_language();
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "about__backdrop",
            onclick: move |_| on_close.call(()),
        }
        div {
            class: "about",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "about-title",
            tabindex: -1,
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key().to_string() == "Escape" {
                    on_close.call(());
                }
            },
            onmounted: move |evt: MountedEvent| {
                let node = evt.data();
                spawn(async move {
                    let _ = node.set_focus(true).await;
                });
            },
            div { class: "about__panel",
                div { class: "about__header",
                    h2 { id: "about-title", {t!("about-title")} }
                    button {
                        r#type: "button",
                        class: "about__close",
                        aria_label: t!("about-close"),
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "about__body",
                    p { {t!("about-body-1")} }
                    p { {t!("about-body-2")} }
                    p { {t!("about-body-3")} }
                    p { {t!("about-body-4")} }
                }
            }
        }
    }
}

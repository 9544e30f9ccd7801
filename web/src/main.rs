use dioxus::prelude::*;

use ui::views::Wizard;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::use_language_root();

    rsx! {
        document::Title { "BioCircuit" }
        document::Link { rel: "icon", href: FAVICON, r#type: "image/svg+xml" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Wizard {}
    }
}

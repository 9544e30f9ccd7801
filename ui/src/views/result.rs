use dioxus::prelude::*;

use crate::core::format::format_score;
use crate::i18n;
use crate::t;
use crate::views::OverlayPanel;
use crate::wizard::{AnswerSet, PinCoordinate, QuestionId, TrainingOutcome, UploadedImage};

#[component]
pub fn ResultScreen(
    answers: AnswerSet,
    outcome: TrainingOutcome,
    image: Option<UploadedImage>,
    pin: Option<PinCoordinate>,
    on_restart: EventHandler<()>,
) -> Element {
    let _lang = i18n::use_language();
    let restart = rsx! {
        button {
            r#type: "button",
            class: "button button--accent",
            onclick: move |_| on_restart.call(()),
            {t!("result-restart")}
        }
    };

    let Some(score) = outcome.score() else {
        return rsx! {
            section { class: "page result result--declined",
                div { class: "result__declined",
                    h1 { class: "result__decline-title", {t!("result-declined-title")} }
                    p { class: "result__decline-body", {t!("result-declined-body")} }
                }
                {restart}
            }
        };
    };

    let recap = answers.recap();

    rsx! {
        section { class: "page result",
            h1 { class: "result__headline", {t!("result-headline")} }
            div { class: "result__score", "{format_score(score)}" }

            if let (Some(image), Some(pin)) = (image, pin) {
                OverlayPanel { image, pin }
            }

            div { class: "result__recap",
                h3 { class: "result__recap-title", {t!("result-recap-title")} }
                for (id, value) in recap {
                    div { key: "{id.as_str()}", class: "result__recap-row",
                        span { class: "result__recap-label", {recap_label(id)} }
                        span { class: "result__recap-value", "{value}" }
                    }
                }
            }

            {restart}
        }
    }
}

fn recap_label(id: QuestionId) -> String {
    match id {
        QuestionId::RiverDistance => t!("recap-river-distance"),
        QuestionId::SettlementAge => t!("recap-settlement-age"),
        QuestionId::SedimentTopology => t!("recap-sediment-topology"),
        QuestionId::VegetationEdible => t!("recap-vegetation-edible"),
        QuestionId::StartTraining => t!("recap-start-training"),
    }
}

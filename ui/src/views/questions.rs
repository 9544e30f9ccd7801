use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::use_wizard_config;
use crate::core::format::underline_color;
use crate::core::timing::sleep_ms;
use crate::i18n;
use crate::t;
use crate::wizard::{Advance, Choice, Completion, QuestionFlow, QuestionId, QuestionKind};

#[component]
pub fn QuestionWizard(on_complete: EventHandler<Completion>) -> Element {
    let _lang = i18n::use_language();
    let config = use_wizard_config();
    let shake_ms = config.shake_ms;
    let completion_delay_ms = config.completion_delay_ms;
    let click_delay_ms = config.choice_click_delay_ms;
    let focus_delay_ms = config.input_focus_delay_ms;

    let mut flow = use_signal(QuestionFlow::new);
    let shake = use_signal(Shake::default);

    let react = move |advance: Advance| match advance {
        Advance::Rejected => trigger_shake(shake, shake_ms),
        Advance::Submit(choice) => finish(flow, choice, completion_delay_ms, on_complete),
        Advance::Moved { index } => debug!(index, "question answered"),
        Advance::Selected(_) | Advance::Ignored => {}
    };

    let on_key = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        if matches!(key.as_str(), "Enter" | "ArrowDown" | "ArrowLeft" | "ArrowRight") {
            evt.prevent_default();
        }
        let advance = flow.with_mut(|f| f.handle_key(&key));
        react(advance);
    };

    let mut click_choice = move |choice: Choice| {
        if flow.with_mut(|f| f.select(choice)) == Advance::Ignored {
            return;
        }
        spawn(async move {
            sleep_ms(click_delay_ms).await;
            finish(flow, choice, completion_delay_ms, on_complete);
        });
    };

    let snapshot = flow();
    let index = snapshot.index();
    let question = snapshot.current();
    let text = snapshot.current_text().to_string();
    let selected = snapshot.selected();
    let line_color = underline_color(text.chars().count());
    let shake_now = shake();
    let title_class = if shake_now.active {
        "question__title question__title--shake"
    } else {
        "question__title"
    };

    rsx! {
        section { class: "page questions",
            div {
                key: "{index}",
                class: "question",
                span { class: "question__progress", {t!("question-progress", current = (index + 1), total = snapshot.total())} }
                h2 { key: "title-{shake_now.run}", class: "{title_class}", {prompt(question)} }

                match question.kind() {
                    QuestionKind::Text => rsx! {
                        div { class: "question__field",
                            div { class: "question__underline", style: "background-color: {line_color};" }
                            input {
                                class: "question__input",
                                r#type: "text",
                                value: "{text}",
                                autofocus: true,
                                oninput: move |evt: FormEvent| flow.with_mut(|f| f.set_text(evt.value())),
                                onkeydown: on_key,
                                onmounted: move |evt: MountedEvent| {
                                    let node = evt.data();
                                    spawn(async move {
                                        sleep_ms(focus_delay_ms).await;
                                        let _ = node.set_focus(true).await;
                                    });
                                },
                            }
                        }
                    },
                    QuestionKind::YesNo => rsx! {
                        div {
                            class: "question__choices",
                            tabindex: 0,
                            onkeydown: on_key,
                            onmounted: move |evt: MountedEvent| {
                                let node = evt.data();
                                spawn(async move {
                                    let _ = node.set_focus(true).await;
                                });
                            },
                            button {
                                r#type: "button",
                                class: choice_class(Choice::Yes, selected),
                                onclick: move |_| click_choice(Choice::Yes),
                                {t!("question-choice-yes")}
                            }
                            button {
                                r#type: "button",
                                class: choice_class(Choice::No, selected),
                                onclick: move |_| click_choice(Choice::No),
                                {t!("question-choice-no")}
                            }
                        }
                        p { class: "question__hint", {t!("question-choice-hint")} }
                    },
                }
            }
        }
    }
}

fn prompt(id: QuestionId) -> String {
    match id {
        QuestionId::RiverDistance => t!("question-river-distance"),
        QuestionId::SettlementAge => t!("question-settlement-age"),
        QuestionId::SedimentTopology => t!("question-sediment-topology"),
        QuestionId::VegetationEdible => t!("question-vegetation-edible"),
        QuestionId::StartTraining => t!("question-start-training"),
    }
}

fn choice_class(choice: Choice, selected: Option<Choice>) -> &'static str {
    match (choice, selected == Some(choice)) {
        (Choice::Yes, true) => "choice choice--yes choice--selected",
        (Choice::Yes, false) => "choice choice--yes",
        (Choice::No, true) => "choice choice--no choice--selected",
        (Choice::No, false) => "choice choice--no",
    }
}

/// Title shake. Each rejection starts a new run; the title is keyed on the
/// run so the animation restarts, and only the latest timer ends it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Shake {
    run: u64,
    active: bool,
}

impl Shake {
    fn start(&mut self) -> u64 {
        self.run = self.run.wrapping_add(1);
        self.active = true;
        self.run
    }

    fn settle(&mut self, run: u64) -> bool {
        if run != self.run {
            return false;
        }
        self.active = false;
        true
    }
}

fn trigger_shake(mut shake: Signal<Shake>, shake_ms: u64) {
    let run = shake.with_mut(Shake::start);
    spawn(async move {
        sleep_ms(shake_ms).await;
        shake.with_mut(|s| s.settle(run));
    });
}

/// Lock in the choice, then hand the completion over after the configured
/// pause. A second submission is a no-op.
fn finish(
    mut flow: Signal<QuestionFlow>,
    choice: Choice,
    delay_ms: u64,
    on_complete: EventHandler<Completion>,
) {
    let completion = flow.with_mut(|f| f.submit_choice(choice, &mut rand::thread_rng()));
    if let Some(completion) = completion {
        debug!(choice = choice.as_str(), "questionnaire finished");
        spawn(async move {
            sleep_ms(delay_ms).await;
            on_complete.call(completion);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_rejection_restarts_the_shake() {
        let mut shake = Shake::default();
        let first = shake.start();
        let second = shake.start();
        assert_ne!(first, second);

        assert!(!shake.settle(first));
        assert!(shake.active);

        assert!(shake.settle(second));
        assert!(!shake.active);
    }

    #[test]
    fn only_the_selected_choice_is_highlighted() {
        assert_eq!(
            choice_class(Choice::Yes, Some(Choice::Yes)),
            "choice choice--yes choice--selected"
        );
        assert_eq!(choice_class(Choice::No, Some(Choice::Yes)), "choice choice--no");
        assert_eq!(choice_class(Choice::No, None), "choice choice--no");
    }
}

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::components::MiniHeader;
use crate::core::platform;
use crate::views::{IntroLogo, QuestionWizard, ResultScreen, UploadStep};
use crate::wizard::{
    Completion, PinCoordinate, TrainingOutcome, UploadedImage, WizardEvent, WizardState, WizardStep,
};

/// Top-level controller. Owns the [`WizardState`] and mounts the view for the
/// current step; stage views report back through events tagged with the
/// cycle they were rendered in.
#[component]
pub fn Wizard() -> Element {
    let mut state = use_signal(WizardState::new);

    let events = use_coroutine(move |mut rx: UnboundedReceiver<(u64, WizardEvent)>| async move {
        while let Some((cycle, event)) = rx.next().await {
            let name = event.name();
            match state.with_mut(|s| s.apply_in_cycle(cycle, event)) {
                None => debug!(cycle, event = name, "dropped event from an earlier cycle"),
                Some(Err(err)) => warn!("{err}"),
                Some(Ok(transition)) => {
                    info!(from = %transition.from, to = %transition.to, "wizard step changed");
                    if let Some(image) = transition.released {
                        platform::release_image_url(&image.url);
                    }
                    if transition.to == WizardStep::Result {
                        log_cycle(&state.peek());
                    }
                }
            }
        }
    });

    let snapshot = state();
    let cycle = snapshot.cycle();
    let step = snapshot.step();

    let body = match step {
        WizardStep::Intro => rsx! {
            IntroLogo {
                on_complete: move |_| events.send((cycle, WizardEvent::IntroFinished)),
            }
        },
        WizardStep::Upload => rsx! {
            UploadStep {
                key: "upload-{cycle}",
                on_complete: move |payload: (UploadedImage, PinCoordinate)| {
                    let (image, pin) = payload;
                    events.send((cycle, WizardEvent::UploadCompleted { image, pin }));
                },
            }
        },
        WizardStep::Questions => rsx! {
            QuestionWizard {
                key: "questions-{cycle}",
                on_complete: move |done: Completion| {
                    events.send((
                        cycle,
                        WizardEvent::QuestionsCompleted {
                            answers: done.answers,
                            outcome: done.outcome,
                        },
                    ));
                },
            }
        },
        WizardStep::Result => rsx! {
            ResultScreen {
                answers: snapshot.answers().clone(),
                outcome: snapshot.outcome().unwrap_or_else(TrainingOutcome::declined),
                image: snapshot.image().cloned(),
                pin: snapshot.pin(),
                on_restart: move |_| events.send((cycle, WizardEvent::Restart)),
            }
        },
    };

    rsx! {
        main { class: "wizard wizard--{step}",
            if step != WizardStep::Intro {
                MiniHeader {}
            }
            {body}
        }
    }
}

fn log_cycle(state: &WizardState) {
    match serde_json::to_string(&state.summary()) {
        Ok(json) => info!(summary = %json, platform = platform::Platform::current().as_str(), "cycle finished"),
        Err(err) => warn!("failed to serialise cycle summary: {err}"),
    }
}

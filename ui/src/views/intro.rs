use dioxus::prelude::*;

use crate::core::config::use_wizard_config;
use crate::core::timing::sleep_ms;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Steps of the opening animation. CSS keys off the phase class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Drop,
    Impact,
    Settle,
    FadeOut,
}

impl IntroPhase {
    pub const SEQUENCE: [IntroPhase; 4] = [Self::Drop, Self::Impact, Self::Settle, Self::FadeOut];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Drop => Some(Self::Impact),
            Self::Impact => Some(Self::Settle),
            Self::Settle => Some(Self::FadeOut),
            Self::FadeOut => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Drop => "intro--drop",
            Self::Impact => "intro--impact",
            Self::Settle => "intro--settle",
            Self::FadeOut => "intro--fade",
        }
    }

    /// Crack lines stay visible from the impact onwards.
    pub fn shows_crack(self) -> bool {
        !matches!(self, Self::Drop)
    }

    pub fn duration_ms(self, phases_ms: &[u64; 4]) -> u64 {
        match self {
            Self::Drop => phases_ms[0],
            Self::Impact => phases_ms[1],
            Self::Settle => phases_ms[2],
            Self::FadeOut => phases_ms[3],
        }
    }
}

/// Slight angle and width per crack line.
const CRACKS: [(f64, f64); 4] = [(-2.0, 1.0), (1.0, 1.2), (-1.5, 0.8), (2.0, 1.1)];

#[component]
pub fn IntroLogo(on_complete: EventHandler<()>) -> Element {
    let config = use_wizard_config();
    let mut phase = use_signal(|| IntroPhase::Drop);

    use_future(move || {
        let phases_ms = config.intro_phases_ms;
        async move {
            let mut current = IntroPhase::Drop;
            loop {
                sleep_ms(current.duration_ms(&phases_ms)).await;
                match current.next() {
                    Some(next) => {
                        current = next;
                        phase.set(next);
                    }
                    None => break,
                }
            }
            on_complete.call(());
        }
    });

    let current = phase();

    rsx! {
        div { class: "intro {current.css_class()}",
            if current.shows_crack() {
                for (i, style) in crack_styles().into_iter().enumerate() {
                    div { key: "{i}", class: "intro__crack", style: "{style}" }
                }
            }

            div { class: "intro__logo",
                div { class: "intro__ring",
                    img { class: "intro__mark", src: LOGO, alt: "BioCircuit" }
                }
            }
        }
    }
}

fn crack_styles() -> Vec<String> {
    CRACKS
        .iter()
        .enumerate()
        .map(|(i, (angle, width))| {
            let offset = (i as f64 - 1.5) * 30.0;
            format!(
                "left: calc(50% + {offset}px); width: {width}px; \
                 transform: translateX(-50%) rotate({angle}deg); animation-delay: {}ms;",
                i * 50
            )
        })
        .collect()
}

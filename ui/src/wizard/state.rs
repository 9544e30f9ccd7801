//! Stage machine driving which wizard view is mounted.
//!
//! `Intro → Upload → Questions → Result`, and `Restart` from `Result` back to
//! `Upload`. The reducer is pure: releasing the image URL on restart is left
//! to the caller through [`Transition::released`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::outcome::TrainingOutcome;
use super::questions::AnswerSet;
use super::upload::{PinCoordinate, UploadedImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Intro,
    Upload,
    Questions,
    Result,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Intro => "intro",
            Self::Upload => "upload",
            Self::Questions => "questions",
            Self::Result => "result",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    IntroFinished,
    UploadCompleted {
        image: UploadedImage,
        pin: PinCoordinate,
    },
    QuestionsCompleted {
        answers: AnswerSet,
        outcome: TrainingOutcome,
    },
    Restart,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IntroFinished => "intro-finished",
            Self::UploadCompleted { .. } => "upload-completed",
            Self::QuestionsCompleted { .. } => "questions-completed",
            Self::Restart => "restart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("event `{event}` is not valid during the {step} step")]
    OutOfOrder { step: WizardStep, event: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: WizardStep,
    pub to: WizardStep,
    /// Image handed back on restart; its URL should be released.
    pub released: Option<UploadedImage>,
}

#[derive(Debug, Serialize)]
pub struct CycleSummary<'a> {
    pub cycle: u64,
    pub step: String,
    pub image: Option<&'a str>,
    pub media_type: Option<&'static str>,
    pub pin: Option<[f64; 2]>,
    pub answers: &'a AnswerSet,
    pub outcome: Option<TrainingOutcome>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    answers: AnswerSet,
    outcome: Option<TrainingOutcome>,
    image: Option<UploadedImage>,
    pin: Option<PinCoordinate>,
    cycle: u64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn outcome(&self) -> Option<TrainingOutcome> {
        self.outcome
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn pin(&self) -> Option<PinCoordinate> {
        self.pin
    }

    /// Bumped on every restart so deferred work from an older cycle can be
    /// recognised and dropped.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn apply(&mut self, event: WizardEvent) -> Result<Transition, TransitionError> {
        let from = self.step;
        let mut released = None;

        match (from, event) {
            (WizardStep::Intro, WizardEvent::IntroFinished) => {
                self.step = WizardStep::Upload;
            }
            (WizardStep::Upload, WizardEvent::UploadCompleted { image, pin }) => {
                self.image = Some(image);
                self.pin = Some(pin);
                self.step = WizardStep::Questions;
            }
            (WizardStep::Questions, WizardEvent::QuestionsCompleted { answers, outcome }) => {
                self.answers = answers;
                self.outcome = Some(outcome);
                self.step = WizardStep::Result;
            }
            (WizardStep::Result, WizardEvent::Restart) => {
                released = self.image.take();
                self.pin = None;
                self.answers.clear();
                self.outcome = None;
                self.cycle = self.cycle.wrapping_add(1);
                self.step = WizardStep::Upload;
            }
            (step, event) => {
                return Err(TransitionError::OutOfOrder {
                    step,
                    event: event.name(),
                })
            }
        }

        Ok(Transition {
            from,
            to: self.step,
            released,
        })
    }

    /// Loggable snapshot of the current cycle.
    pub fn summary(&self) -> CycleSummary<'_> {
        CycleSummary {
            cycle: self.cycle,
            step: self.step.to_string(),
            image: self.image.as_ref().map(|image| image.name.as_str()),
            media_type: self.image.as_ref().map(|image| image.media_type.mime()),
            pin: self.pin.map(|pin| [pin.x, pin.y]),
            answers: &self.answers,
            outcome: self.outcome,
        }
    }

    /// Apply an event that was scheduled during `cycle`. Events from an older
    /// cycle are dropped without touching the state.
    pub fn apply_in_cycle(
        &mut self,
        cycle: u64,
        event: WizardEvent,
    ) -> Option<Result<Transition, TransitionError>> {
        (cycle == self.cycle).then(|| self.apply(event))
    }
}

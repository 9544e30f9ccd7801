//! Wizard domain: step machine, questionnaire, upload validation and the
//! cosmetic training outcome. Nothing in here touches the DOM.

pub mod outcome;
pub mod questions;
pub mod state;
pub mod upload;

pub use outcome::TrainingOutcome;
pub use questions::{
    AnswerSet, AnswerValue, Advance, Choice, Completion, QuestionFlow, QuestionId, QuestionKind,
    QUESTIONS,
};
pub use state::{CycleSummary, Transition, TransitionError, WizardEvent, WizardState, WizardStep};
pub use upload::{
    validate_upload, ImageFrame, MediaType, PinCoordinate, UploadDraft, UploadError, UploadedImage,
};

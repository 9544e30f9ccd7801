mod intro;
pub use intro::{IntroLogo, IntroPhase};

mod upload;
pub use upload::UploadStep;

mod questions;
pub use questions::QuestionWizard;

mod overlay;
pub use overlay::OverlayPanel;

mod result;
pub use result::ResultScreen;

mod wizard;
pub use wizard::Wizard;

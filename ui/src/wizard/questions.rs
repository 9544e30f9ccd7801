//! The fixed questionnaire and its navigation rules.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use super::outcome::TrainingOutcome;

/// Identifiers of the five prompts, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionId {
    RiverDistance,
    SettlementAge,
    SedimentTopology,
    VegetationEdible,
    StartTraining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    YesNo,
}

pub const QUESTIONS: [QuestionId; 5] = [
    QuestionId::RiverDistance,
    QuestionId::SettlementAge,
    QuestionId::SedimentTopology,
    QuestionId::VegetationEdible,
    QuestionId::StartTraining,
];

impl QuestionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RiverDistance => "river-distance",
            Self::SettlementAge => "settlement-age",
            Self::SedimentTopology => "sediment-topology",
            Self::VegetationEdible => "vegetation-edible",
            Self::StartTraining => "start-training",
        }
    }

    pub fn kind(self) -> QuestionKind {
        match self {
            Self::StartTraining => QuestionKind::YesNo,
            _ => QuestionKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choice(Choice),
}

impl AnswerValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Choice(choice) => choice.as_str(),
        }
    }
}

/// Answers keyed by question. Only the five known identifiers can be keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<QuestionId, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.0.get(&id)
    }

    pub fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.0.insert(id, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Answers to show on the result screen: every answered prompt except the
    /// training decision, in question order.
    pub fn recap(&self) -> Vec<(QuestionId, String)> {
        QUESTIONS
            .iter()
            .filter(|id| **id != QuestionId::StartTraining)
            .filter_map(|id| self.get(*id).map(|value| (*id, value.as_str().to_string())))
            .collect()
    }
}

/// What happened after a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the prompt at `index`.
    Moved { index: usize },
    /// Input incomplete; the view should shake.
    Rejected,
    /// A choice was pre-selected but not submitted.
    Selected(Choice),
    /// The binary prompt was confirmed with this choice.
    Submit(Choice),
    Ignored,
}

/// Final questionnaire payload handed to the step machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub answers: AnswerSet,
    pub outcome: TrainingOutcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionFlow {
    index: usize,
    answers: AnswerSet,
    selected: Option<Choice>,
    completed: bool,
}

impl QuestionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn current(&self) -> QuestionId {
        QUESTIONS[self.index]
    }

    pub fn selected(&self) -> Option<Choice> {
        self.selected
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Draft text of the current prompt (empty for the binary prompt).
    pub fn current_text(&self) -> &str {
        match self.answers.get(self.current()) {
            Some(AnswerValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        let id = self.current();
        if id.kind() == QuestionKind::Text && !self.completed {
            self.answers.insert(id, AnswerValue::Text(value.into()));
        }
    }

    pub fn select(&mut self, choice: Choice) -> Advance {
        if self.current().kind() != QuestionKind::YesNo || self.completed {
            return Advance::Ignored;
        }
        self.selected = Some(choice);
        Advance::Selected(choice)
    }

    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::Ignored;
        }

        let id = self.current();
        match id.kind() {
            QuestionKind::Text => {
                let raw = self.current_text().to_string();
                if raw.trim().is_empty() {
                    return Advance::Rejected;
                }
                self.answers.insert(id, AnswerValue::Text(raw));
                self.index += 1;
                Advance::Moved { index: self.index }
            }
            QuestionKind::YesNo => match self.selected {
                Some(choice) => Advance::Submit(choice),
                None => Advance::Rejected,
            },
        }
    }

    /// Map a DOM key name (`KeyboardEvent.key`) onto navigation.
    pub fn handle_key(&mut self, key: &str) -> Advance {
        match (self.current().kind(), key) {
            (QuestionKind::Text, "Enter" | "ArrowDown") => self.advance(),
            (QuestionKind::YesNo, "ArrowLeft") => self.select(Choice::Yes),
            (QuestionKind::YesNo, "ArrowRight") => self.select(Choice::No),
            (QuestionKind::YesNo, "Enter") => self.advance(),
            _ => Advance::Ignored,
        }
    }

    /// Finalize the questionnaire with `choice`. Returns `None` when not on
    /// the binary prompt or when already submitted.
    pub fn submit_choice<R: Rng + ?Sized>(
        &mut self,
        choice: Choice,
        rng: &mut R,
    ) -> Option<Completion> {
        let id = self.current();
        if id.kind() != QuestionKind::YesNo || self.completed {
            return None;
        }

        self.selected = Some(choice);
        self.completed = true;
        self.answers.insert(id, AnswerValue::Choice(choice));

        let outcome = match choice {
            Choice::Yes => TrainingOutcome::roll(rng),
            Choice::No => TrainingOutcome::declined(),
        };

        Some(Completion {
            answers: self.answers.clone(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn answered_flow() -> QuestionFlow {
        let mut flow = QuestionFlow::new();
        for text in ["2 km", "3000 years", "loam", "yes, berries"] {
            flow.set_text(text);
            assert!(matches!(flow.advance(), Advance::Moved { .. }));
        }
        flow
    }

    #[test]
    fn blank_answers_never_move_the_index() {
        let mut flow = QuestionFlow::new();
        for blank in ["", "   ", "\t\n"] {
            flow.set_text(blank);
            assert_eq!(flow.advance(), Advance::Rejected);
            assert_eq!(flow.index(), 0);
        }
    }

    #[test]
    fn answers_keep_what_was_typed() {
        let mut flow = QuestionFlow::new();
        flow.set_text("  near  ");
        assert_eq!(flow.advance(), Advance::Moved { index: 1 });
        assert_eq!(
            flow.answers().get(QuestionId::RiverDistance),
            Some(&AnswerValue::Text("  near  ".into()))
        );
    }

    #[test]
    fn enter_and_arrow_down_advance_text_prompts() {
        let mut flow = QuestionFlow::new();
        flow.set_text("close");
        assert_eq!(flow.handle_key("ArrowDown"), Advance::Moved { index: 1 });
        flow.set_text("old");
        assert_eq!(flow.handle_key("Enter"), Advance::Moved { index: 2 });
        assert_eq!(flow.handle_key("a"), Advance::Ignored);
    }

    #[test]
    fn confirming_without_selection_is_rejected() {
        let mut flow = answered_flow();
        assert_eq!(flow.current(), QuestionId::StartTraining);
        assert_eq!(flow.handle_key("Enter"), Advance::Rejected);
        assert_eq!(flow.index(), 4);
    }

    #[test]
    fn arrows_preselect_and_enter_confirms() {
        let mut flow = answered_flow();
        assert_eq!(flow.handle_key("ArrowRight"), Advance::Selected(Choice::No));
        assert_eq!(flow.handle_key("ArrowLeft"), Advance::Selected(Choice::Yes));
        assert_eq!(flow.handle_key("Enter"), Advance::Submit(Choice::Yes));
    }

    #[test]
    fn yes_starts_training_with_score() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut flow = answered_flow();
        let done = flow.submit_choice(Choice::Yes, &mut rng).unwrap();
        assert!(done.outcome.is_started());
        assert!(done.outcome.score().unwrap() <= 100);
        assert_eq!(
            done.answers.get(QuestionId::StartTraining),
            Some(&AnswerValue::Choice(Choice::Yes))
        );
        assert_eq!(done.answers.len(), 5);
    }

    #[test]
    fn no_declines_without_score() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut flow = answered_flow();
        let done = flow.submit_choice(Choice::No, &mut rng).unwrap();
        assert!(!done.outcome.is_started());
        assert_eq!(done.outcome.score(), None);
    }

    #[test]
    fn choice_is_only_submitted_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut flow = answered_flow();
        assert!(flow.submit_choice(Choice::Yes, &mut rng).is_some());
        assert!(flow.submit_choice(Choice::No, &mut rng).is_none());
        assert_eq!(flow.advance(), Advance::Ignored);
    }

    #[test]
    fn choice_cannot_be_submitted_early() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut flow = QuestionFlow::new();
        assert!(flow.submit_choice(Choice::Yes, &mut rng).is_none());
        assert_eq!(flow.select(Choice::Yes), Advance::Ignored);
    }

    #[test]
    fn recap_skips_training_decision() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut flow = answered_flow();
        let done = flow.submit_choice(Choice::Yes, &mut rng).unwrap();
        let recap = done.answers.recap();
        assert_eq!(recap.len(), 4);
        assert_eq!(recap[0], (QuestionId::RiverDistance, "2 km".to_string()));
        assert!(recap.iter().all(|(id, _)| *id != QuestionId::StartTraining));
    }

    #[test]
    fn answer_set_serializes_with_kebab_keys() {
        let mut answers = AnswerSet::new();
        answers.insert(QuestionId::SettlementAge, AnswerValue::Text("old".into()));
        answers.insert(QuestionId::StartTraining, AnswerValue::Choice(Choice::No));
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"settlement-age":"old","start-training":"no"}"#);
    }
}

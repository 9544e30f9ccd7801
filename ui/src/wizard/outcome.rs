//! The "AI training" result. Purely cosmetic: the score is a dice roll and
//! has no relationship to the answers or the pin.

use rand::Rng;
use serde::Serialize;

pub const MAX_SCORE: u8 = 100;

/// Outcome of the final yes/no question. A score exists exactly when
/// training was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingOutcome {
    started: bool,
    score: Option<u8>,
}

impl TrainingOutcome {
    pub fn started(score: u8) -> Self {
        Self {
            started: true,
            score: Some(score.min(MAX_SCORE)),
        }
    }

    pub fn declined() -> Self {
        Self {
            started: false,
            score: None,
        }
    }

    /// Roll a uniform score in `0..=100`.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::started(rng.gen_range(0..=MAX_SCORE))
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> Option<u8> {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rolled_scores_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let outcome = TrainingOutcome::roll(&mut rng);
            assert!(outcome.is_started());
            assert!(outcome.score().unwrap() <= MAX_SCORE);
        }
    }

    #[test]
    fn declined_has_no_score() {
        let outcome = TrainingOutcome::declined();
        assert!(!outcome.is_started());
        assert_eq!(outcome.score(), None);
    }

    #[test]
    fn started_clamps_out_of_range_scores() {
        assert_eq!(TrainingOutcome::started(250).score(), Some(100));
    }
}

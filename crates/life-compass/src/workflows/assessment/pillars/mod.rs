mod insights;

pub use insights::{derive_v3_insights, V3Insights};

use std::sync::Arc;

use serde::Serialize;

use super::domain::{AnswerSet, Pillar, PillarTier};
use super::scoring::{contribution_sum, ScoringModel};

pub const PILLAR_SCORE_MAX: u8 = 100;
const SCORE_SCALE: u32 = 20;

/// Normalized score for one life pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub score: u8,
    pub tier: PillarTier,
    pub color: &'static str,
    pub icon: &'static str,
}

impl PillarScore {
    pub fn new(pillar: Pillar, score: u8) -> Self {
        let score = score.min(PILLAR_SCORE_MAX);
        let tier = PillarTier::from_score(score);
        Self {
            pillar,
            score,
            tier,
            color: tier.color(),
            icon: pillar.icon(),
        }
    }
}

/// Turns an answer set into the seven pillar scores.
#[derive(Debug, Clone)]
pub struct PillarDeriver {
    model: Arc<ScoringModel>,
}

impl PillarDeriver {
    pub fn new(model: Arc<ScoringModel>) -> Self {
        Self { model }
    }

    pub fn derive(&self, answers: &AnswerSet) -> [PillarScore; 7] {
        derive_pillar_scores(&self.model, answers)
    }
}

/// Scores in canonical pillar order, each `round(average * 20)` within `0..=100`.
pub fn derive_pillar_scores(model: &ScoringModel, answers: &AnswerSet) -> [PillarScore; 7] {
    Pillar::ALL.map(|pillar| {
        let rule = model.pillar_rule(pillar);
        let sum = contribution_sum(rule.contributors, answers);
        let count = rule.contributors.len() as u32;
        let scaled = if count == 0 {
            0
        } else {
            (2 * sum * SCORE_SCALE + count) / (2 * count)
        };
        PillarScore::new(pillar, scaled.min(u32::from(PILLAR_SCORE_MAX)) as u8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deriver() -> PillarDeriver {
        PillarDeriver::new(Arc::new(ScoringModel::standard()))
    }

    #[test]
    fn scores_follow_canonical_order() {
        let scores = deriver().derive(&AnswerSet::new());

        let pillars: Vec<Pillar> = scores.iter().map(|score| score.pillar).collect();
        assert_eq!(pillars, Pillar::ALL.to_vec());
    }

    #[test]
    fn supportive_maximum_with_no_strain_scores_full() {
        // Health reads question 13 raw and question 5 inverted.
        let answers = AnswerSet::new().with(13, 5).with(5, 1);
        let scores = deriver().derive(&answers);

        assert_eq!(scores[Pillar::Health.index()].score, 90);
        assert_eq!(scores[Pillar::Health.index()].tier, PillarTier::Thriving);
        assert_eq!(scores[Pillar::Health.index()].icon, "heart-pulse");
    }

    #[test]
    fn missing_answers_only_count_the_inverted_half() {
        let scores = deriver().derive(&AnswerSet::new());

        for score in scores {
            assert_eq!(score.score, 50, "{:?}", score.pillar);
            assert_eq!(score.tier, PillarTier::Fragile);
        }
    }

    #[test]
    fn constructor_clamps_out_of_range_scores() {
        let score = PillarScore::new(Pillar::Work, 140);
        assert_eq!(score.score, 100);
        assert_eq!(score.color, "emerald");
    }
}

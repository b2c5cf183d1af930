use serde::{Deserialize, Serialize};

use super::super::domain::{Archetype, CorrelationKey, DiagnosticState, Pillar, StateFamily};
use super::PillarScore;

const WEAK_PILLAR_THRESHOLD: u8 = 50;
const MAX_CORRELATIONS: usize = 3;

/// Derived narrative signals layered over the pillar scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V3Insights {
    pub antifragility_score: u8,
    pub bottleneck: Pillar,
    pub archetype: Archetype,
    pub correlations: Vec<CorrelationKey>,
}

/// Pure function of `(scores, state)`; identical inputs give identical insights.
pub fn derive_v3_insights(scores: &[PillarScore; 7], state: DiagnosticState) -> V3Insights {
    let bottleneck = bottleneck(scores);
    let min = u32::from(scores[bottleneck.index()].score);
    let max = scores
        .iter()
        .map(|entry| u32::from(entry.score))
        .max()
        .unwrap_or_default();
    let sum: u32 = scores.iter().map(|entry| u32::from(entry.score)).sum();

    V3Insights {
        antifragility_score: antifragility(sum, min, state),
        bottleneck,
        archetype: archetype(state, sum, max - min),
        correlations: correlations(scores),
    }
}

fn bottleneck(scores: &[PillarScore; 7]) -> Pillar {
    let mut lowest = &scores[0];
    for entry in &scores[1..] {
        if entry.score < lowest.score {
            lowest = entry;
        }
    }
    lowest.pillar
}

/// `round(0.6 * mean + 0.4 * min)` over seven pillars, shifted by the state.
fn antifragility(sum: u32, min: u32, state: DiagnosticState) -> u8 {
    let base = ((6 * sum + 28 * min + 35) / 70) as i32;
    (base + state_modifier(state)).clamp(0, 100) as u8
}

const fn state_modifier(state: DiagnosticState) -> i32 {
    match state {
        DiagnosticState::Confusion => -5,
        DiagnosticState::Overload => -10,
        DiagnosticState::Reactivity => -10,
        DiagnosticState::Uncertainty => -5,
        DiagnosticState::Disconnection => -5,
        DiagnosticState::Stagnation => -5,
        DiagnosticState::Clarity => 5,
        DiagnosticState::Alignment => 10,
    }
}

fn archetype(state: DiagnosticState, sum: u32, spread: u32) -> Archetype {
    // Thresholds on the seven-pillar mean, compared on the sum.
    let mean_at_least = |mean: u32| sum >= mean * 7;

    match state.family() {
        StateFamily::Flow if mean_at_least(70) && spread <= 40 => Archetype::Sovereign,
        StateFamily::Flow => Archetype::Architect,
        StateFamily::Pressure if mean_at_least(50) => Archetype::Warrior,
        StateFamily::Pressure => Archetype::Survivor,
        StateFamily::Mind => Archetype::Seeker,
        StateFamily::Drift => Archetype::Wanderer,
    }
}

fn correlations(scores: &[PillarScore; 7]) -> Vec<CorrelationKey> {
    let mut fired: Vec<(u32, CorrelationKey)> = CorrelationKey::ALL
        .iter()
        .filter_map(|key| {
            let (first, second) = key.pillars()?;
            let first = scores[first.index()].score;
            let second = scores[second.index()].score;
            (first < WEAK_PILLAR_THRESHOLD && second < WEAK_PILLAR_THRESHOLD)
                .then(|| (u32::from(first) + u32::from(second), *key))
        })
        .collect();

    if fired.is_empty() {
        return vec![CorrelationKey::BalancedBase];
    }

    fired.sort_by_key(|(combined, _)| *combined);
    fired
        .into_iter()
        .take(MAX_CORRELATIONS)
        .map(|(_, key)| key)
        .collect()
}

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, DiagnosticState, LIKERT_MAX};
use super::scoring::{contribution_sum, ScoringModel};

pub const CONFIDENCE_FLOOR: u8 = 75;
const CONFIDENCE_SLOPE: u32 = 5;

/// Exact per-state average, kept as `sum / count` so ties compare without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAverage {
    pub state: DiagnosticState,
    pub sum: u32,
    pub count: u32,
}

impl StateAverage {
    pub fn value(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f32 / self.count as f32
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        (u64::from(self.sum) * u64::from(other.count))
            .cmp(&(u64::from(other.sum) * u64::from(self.count)))
    }

    /// `floor(75 + average * 5)`.
    pub fn confidence(&self) -> u8 {
        if self.count == 0 {
            return CONFIDENCE_FLOOR;
        }
        let bonus = (CONFIDENCE_SLOPE * self.sum / self.count)
            .min(CONFIDENCE_SLOPE * u32::from(LIKERT_MAX));
        CONFIDENCE_FLOOR + bonus as u8
    }
}

/// Locale-free engine output: the winning state, its confidence and every average.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub state: DiagnosticState,
    pub confidence: u8,
    pub averages: Vec<StateAverage>,
}

impl Diagnosis {
    pub fn average_for(&self, state: DiagnosticState) -> Option<&StateAverage> {
        self.averages.iter().find(|average| average.state == state)
    }
}

/// Stateless classifier mapping an answer set to a diagnostic state.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    model: Arc<ScoringModel>,
}

impl DiagnosisEngine {
    pub fn new(model: Arc<ScoringModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    pub fn diagnose(&self, answers: &AnswerSet) -> Diagnosis {
        let averages: Vec<StateAverage> = self
            .model
            .states()
            .iter()
            .map(|rule| StateAverage {
                state: rule.state,
                sum: contribution_sum(rule.contributors, answers),
                count: rule.contributors.len() as u32,
            })
            .collect();

        // Strictly greater replaces the leader, so the earliest state keeps a tie.
        let mut winner = averages[0];
        for candidate in &averages[1..] {
            if candidate.compare(&winner) == Ordering::Greater {
                winner = *candidate;
            }
        }

        Diagnosis {
            state: winner.state,
            confidence: winner.confidence(),
            averages,
        }
    }
}

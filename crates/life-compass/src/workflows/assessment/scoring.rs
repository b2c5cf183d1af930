use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{AnswerSet, DiagnosticState, Pillar, LIKERT_MAX, QUESTION_COUNT};

/// Direction of a question's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Agreement signals a resource ("I sleep well").
    Supportive,
    /// Agreement signals a strain ("I feel overwhelmed").
    Straining,
}

/// Entry of the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u16,
    pub key: &'static str,
    pub polarity: Polarity,
}

/// One question feeding a state or pillar, optionally read as `5 - response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub question: u16,
    pub inverted: bool,
}

impl Contribution {
    pub const fn raw(question: u16) -> Self {
        Self {
            question,
            inverted: false,
        }
    }

    pub const fn inverted(question: u16) -> Self {
        Self {
            question,
            inverted: true,
        }
    }

    pub fn value(&self, answers: &AnswerSet) -> u8 {
        let response = answers.response(self.question);
        if self.inverted {
            LIKERT_MAX - response
        } else {
            response
        }
    }
}

/// Sum of the (possibly inverted) responses across `contributors`.
pub(crate) fn contribution_sum(contributors: &[Contribution], answers: &AnswerSet) -> u32 {
    contributors
        .iter()
        .map(|contribution| u32::from(contribution.value(answers)))
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateRule {
    pub state: DiagnosticState,
    pub contributors: &'static [Contribution],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarRule {
    pub pillar: Pillar,
    pub contributors: &'static [Contribution],
}

pub const MAX_STATE_CONTRIBUTORS: usize = 3;
pub const PILLAR_CONTRIBUTORS: usize = 2;

const QUESTION_BANK: [Question; QUESTION_COUNT as usize] = [
    Question { id: 1, key: "unclear_direction", polarity: Polarity::Straining },
    Question { id: 2, key: "sense_of_purpose", polarity: Polarity::Supportive },
    Question { id: 3, key: "competing_priorities", polarity: Polarity::Straining },
    Question { id: 4, key: "too_many_commitments", polarity: Polarity::Straining },
    Question { id: 5, key: "end_of_day_exhaustion", polarity: Polarity::Straining },
    Question { id: 6, key: "reluctant_yes", polarity: Polarity::Straining },
    Question { id: 7, key: "impulsive_reactions", polarity: Polarity::Straining },
    Question { id: 8, key: "pause_before_responding", polarity: Polarity::Supportive },
    Question { id: 9, key: "worry_over_action", polarity: Polarity::Straining },
    Question { id: 10, key: "distance_from_loved_ones", polarity: Polarity::Straining },
    Question { id: 11, key: "routine_without_progress", polarity: Polarity::Straining },
    Question { id: 12, key: "postponed_changes", polarity: Polarity::Straining },
    Question { id: 13, key: "body_care", polarity: Polarity::Supportive },
    Question { id: 14, key: "meaningful_work", polarity: Polarity::Supportive },
    Question { id: 15, key: "financial_control", polarity: Polarity::Supportive },
    Question { id: 16, key: "guilt_free_rest", polarity: Polarity::Supportive },
    Question { id: 17, key: "contemplative_practice", polarity: Polarity::Supportive },
    Question { id: 18, key: "self_beyond_roles", polarity: Polarity::Supportive },
    Question { id: 19, key: "actions_match_values", polarity: Polarity::Supportive },
    Question { id: 20, key: "calm_decisions", polarity: Polarity::Supportive },
    Question { id: 21, key: "authentic_relationships", polarity: Polarity::Supportive },
];

const CONFUSION: [Contribution; 3] = [
    Contribution::raw(1),
    Contribution::inverted(2),
    Contribution::raw(3),
];
const OVERLOAD: [Contribution; 3] = [
    Contribution::raw(4),
    Contribution::raw(5),
    Contribution::raw(6),
];
const REACTIVITY: [Contribution; 2] = [Contribution::raw(7), Contribution::inverted(8)];
const UNCERTAINTY: [Contribution; 2] = [Contribution::raw(9), Contribution::inverted(15)];
const DISCONNECTION: [Contribution; 2] = [Contribution::raw(10), Contribution::inverted(21)];
const STAGNATION: [Contribution; 2] = [Contribution::raw(11), Contribution::raw(12)];
const CLARITY: [Contribution; 3] = [
    Contribution::raw(20),
    Contribution::raw(2),
    Contribution::inverted(1),
];
const ALIGNMENT: [Contribution; 1] = [Contribution::raw(19)];

const HEALTH: [Contribution; 2] = [Contribution::raw(13), Contribution::inverted(5)];
const WORK: [Contribution; 2] = [Contribution::raw(14), Contribution::inverted(4)];
const RELATIONSHIPS: [Contribution; 2] = [Contribution::raw(21), Contribution::inverted(10)];
const FINANCE: [Contribution; 2] = [Contribution::raw(15), Contribution::inverted(9)];
const SPIRITUALITY: [Contribution; 2] = [Contribution::raw(17), Contribution::inverted(11)];
const LEISURE: [Contribution; 2] = [Contribution::raw(16), Contribution::inverted(6)];
const IDENTITY: [Contribution; 2] = [Contribution::raw(18), Contribution::inverted(1)];

/// Immutable weighting tables shared by the diagnosis engine and the pillar deriver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringModel {
    questions: &'static [Question],
    states: [StateRule; 8],
    pillars: [PillarRule; 7],
}

impl ScoringModel {
    pub fn standard() -> Self {
        Self {
            questions: &QUESTION_BANK,
            states: [
                StateRule { state: DiagnosticState::Confusion, contributors: &CONFUSION },
                StateRule { state: DiagnosticState::Overload, contributors: &OVERLOAD },
                StateRule { state: DiagnosticState::Reactivity, contributors: &REACTIVITY },
                StateRule { state: DiagnosticState::Uncertainty, contributors: &UNCERTAINTY },
                StateRule { state: DiagnosticState::Disconnection, contributors: &DISCONNECTION },
                StateRule { state: DiagnosticState::Stagnation, contributors: &STAGNATION },
                StateRule { state: DiagnosticState::Clarity, contributors: &CLARITY },
                StateRule { state: DiagnosticState::Alignment, contributors: &ALIGNMENT },
            ],
            pillars: [
                PillarRule { pillar: Pillar::Health, contributors: &HEALTH },
                PillarRule { pillar: Pillar::Work, contributors: &WORK },
                PillarRule { pillar: Pillar::Relationships, contributors: &RELATIONSHIPS },
                PillarRule { pillar: Pillar::Finance, contributors: &FINANCE },
                PillarRule { pillar: Pillar::Spirituality, contributors: &SPIRITUALITY },
                PillarRule { pillar: Pillar::Leisure, contributors: &LEISURE },
                PillarRule { pillar: Pillar::Identity, contributors: &IDENTITY },
            ],
        }
    }

    pub fn questions(&self) -> &[Question] {
        self.questions
    }

    /// State rules in canonical order.
    pub fn states(&self) -> &[StateRule; 8] {
        &self.states
    }

    /// Pillar rules in canonical order.
    pub fn pillars(&self) -> &[PillarRule; 7] {
        &self.pillars
    }

    pub fn state_rule(&self, state: DiagnosticState) -> &StateRule {
        &self.states[state.index()]
    }

    pub fn pillar_rule(&self, pillar: Pillar) -> &PillarRule {
        &self.pillars[pillar.index()]
    }

    /// Startup integrity check over the question bank and both rule tables.
    pub fn validate(&self) -> Result<(), ScoringModelError> {
        if self.questions.len() != QUESTION_COUNT as usize {
            return Err(ScoringModelError::QuestionCount {
                expected: QUESTION_COUNT as usize,
                actual: self.questions.len(),
            });
        }

        let mut known = BTreeSet::new();
        for question in self.questions {
            if question.id == 0 || question.id > QUESTION_COUNT {
                return Err(ScoringModelError::UnknownQuestion {
                    rule: question.key,
                    question: question.id,
                });
            }
            if !known.insert(question.id) {
                return Err(ScoringModelError::DuplicateQuestion(question.id));
            }
        }

        for (position, rule) in self.states.iter().enumerate() {
            if rule.state.index() != position {
                return Err(ScoringModelError::MisorderedRule {
                    position,
                    key: rule.state.key(),
                });
            }
            let count = rule.contributors.len();
            if count == 0 || count > MAX_STATE_CONTRIBUTORS {
                return Err(ScoringModelError::ContributorCount {
                    rule: rule.state.key(),
                    count,
                });
            }
            check_contributors(rule.state.key(), rule.contributors, &known)?;
        }

        for (position, rule) in self.pillars.iter().enumerate() {
            if rule.pillar.index() != position {
                return Err(ScoringModelError::MisorderedRule {
                    position,
                    key: rule.pillar.key(),
                });
            }
            if rule.contributors.len() != PILLAR_CONTRIBUTORS {
                return Err(ScoringModelError::ContributorCount {
                    rule: rule.pillar.key(),
                    count: rule.contributors.len(),
                });
            }
            check_contributors(rule.pillar.key(), rule.contributors, &known)?;
        }

        Ok(())
    }
}

fn check_contributors(
    rule: &'static str,
    contributors: &[Contribution],
    known: &BTreeSet<u16>,
) -> Result<(), ScoringModelError> {
    let mut seen = BTreeSet::new();
    for contribution in contributors {
        if !known.contains(&contribution.question) || !seen.insert(contribution.question) {
            return Err(ScoringModelError::UnknownQuestion {
                rule,
                question: contribution.question,
            });
        }
    }
    Ok(())
}

/// Integrity failures detected while validating a scoring model.
#[derive(Debug, thiserror::Error)]
pub enum ScoringModelError {
    #[error("question bank holds {actual} questions, expected {expected}")]
    QuestionCount { expected: usize, actual: usize },
    #[error("question {0} is declared more than once")]
    DuplicateQuestion(u16),
    #[error("rule '{rule}' references unknown or repeated question {question}")]
    UnknownQuestion { rule: &'static str, question: u16 },
    #[error("rule '{key}' sits at position {position} out of canonical order")]
    MisorderedRule { position: usize, key: &'static str },
    #[error("rule '{rule}' has {count} contributors")]
    ContributorCount { rule: &'static str, count: usize },
}

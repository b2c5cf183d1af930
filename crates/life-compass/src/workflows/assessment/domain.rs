use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of questions in the standard questionnaire.
pub const QUESTION_COUNT: u16 = 21;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Identifier wrapper for persisted assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Likert answers keyed by question id, exactly as submitted by the client.
///
/// Keys need not be contiguous or complete. Reads never fail: a missing key or a
/// value outside `1..=5` reads as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u16, i64>);

/// Any JSON object is accepted. Keys that are not a positive `u16` are dropped and
/// non-integer values are stored as `0`.
impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| {
                let question = key.trim().parse::<u16>().ok().filter(|id| *id > 0)?;
                Some((question, value.as_i64().unwrap_or(0)))
            })
            .collect())
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, question: u16, response: i64) -> Self {
        self.insert(question, response);
        self
    }

    pub fn insert(&mut self, question: u16, response: i64) {
        self.0.insert(question, response);
    }

    /// Likert value for `question`, or `0` when unanswered or malformed.
    pub fn response(&self, question: u16) -> u8 {
        match self.0.get(&question) {
            Some(&value) if (i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX)).contains(&value) => {
                value as u8
            }
            _ => 0,
        }
    }

    /// Count of entries holding a usable Likert value.
    pub fn answered(&self) -> usize {
        self.0
            .keys()
            .filter(|question| self.response(**question) != 0)
            .count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u16, i64)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u16, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<u16, i64>> for AnswerSet {
    fn from(value: BTreeMap<u16, i64>) -> Self {
        Self(value)
    }
}

/// Locales with a complete content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Pt,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Pt, Locale::Es];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
            Locale::Es => "es",
        }
    }

    /// Parses a language tag by its primary subtag (`pt-BR` -> `Pt`).
    pub fn parse(raw: &str) -> Option<Self> {
        let primary = raw
            .trim()
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::Pt),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }
}

/// Grouping used when shaping archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFamily {
    Mind,
    Pressure,
    Drift,
    Flow,
}

/// Closed set of diagnostic outcomes, declared in canonical tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticState {
    Confusion,
    Overload,
    Reactivity,
    Uncertainty,
    Disconnection,
    Stagnation,
    Clarity,
    Alignment,
}

impl DiagnosticState {
    pub const ALL: [DiagnosticState; 8] = [
        DiagnosticState::Confusion,
        DiagnosticState::Overload,
        DiagnosticState::Reactivity,
        DiagnosticState::Uncertainty,
        DiagnosticState::Disconnection,
        DiagnosticState::Stagnation,
        DiagnosticState::Clarity,
        DiagnosticState::Alignment,
    ];

    pub const fn index(self) -> usize {
        match self {
            DiagnosticState::Confusion => 0,
            DiagnosticState::Overload => 1,
            DiagnosticState::Reactivity => 2,
            DiagnosticState::Uncertainty => 3,
            DiagnosticState::Disconnection => 4,
            DiagnosticState::Stagnation => 5,
            DiagnosticState::Clarity => 6,
            DiagnosticState::Alignment => 7,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            DiagnosticState::Confusion => "confusion",
            DiagnosticState::Overload => "overload",
            DiagnosticState::Reactivity => "reactivity",
            DiagnosticState::Uncertainty => "uncertainty",
            DiagnosticState::Disconnection => "disconnection",
            DiagnosticState::Stagnation => "stagnation",
            DiagnosticState::Clarity => "clarity",
            DiagnosticState::Alignment => "alignment",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            DiagnosticState::Confusion => "violet",
            DiagnosticState::Overload => "red",
            DiagnosticState::Reactivity => "orange",
            DiagnosticState::Uncertainty => "amber",
            DiagnosticState::Disconnection => "slate",
            DiagnosticState::Stagnation => "stone",
            DiagnosticState::Clarity => "sky",
            DiagnosticState::Alignment => "emerald",
        }
    }

    pub const fn family(self) -> StateFamily {
        match self {
            DiagnosticState::Confusion | DiagnosticState::Uncertainty => StateFamily::Mind,
            DiagnosticState::Overload | DiagnosticState::Reactivity => StateFamily::Pressure,
            DiagnosticState::Disconnection | DiagnosticState::Stagnation => StateFamily::Drift,
            DiagnosticState::Clarity | DiagnosticState::Alignment => StateFamily::Flow,
        }
    }
}

/// Life domains scored independently from the same answers, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Health,
    Work,
    Relationships,
    Finance,
    Spirituality,
    Leisure,
    Identity,
}

impl Pillar {
    pub const ALL: [Pillar; 7] = [
        Pillar::Health,
        Pillar::Work,
        Pillar::Relationships,
        Pillar::Finance,
        Pillar::Spirituality,
        Pillar::Leisure,
        Pillar::Identity,
    ];

    pub const fn index(self) -> usize {
        match self {
            Pillar::Health => 0,
            Pillar::Work => 1,
            Pillar::Relationships => 2,
            Pillar::Finance => 3,
            Pillar::Spirituality => 4,
            Pillar::Leisure => 5,
            Pillar::Identity => 6,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Pillar::Health => "health",
            Pillar::Work => "work",
            Pillar::Relationships => "relationships",
            Pillar::Finance => "finance",
            Pillar::Spirituality => "spirituality",
            Pillar::Leisure => "leisure",
            Pillar::Identity => "identity",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Pillar::Health => "heart-pulse",
            Pillar::Work => "briefcase",
            Pillar::Relationships => "users",
            Pillar::Finance => "wallet",
            Pillar::Spirituality => "sparkles",
            Pillar::Leisure => "sun",
            Pillar::Identity => "fingerprint",
        }
    }
}

/// Score band used to pick canned pillar insight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarTier {
    Critical,
    Fragile,
    Stable,
    Thriving,
}

impl PillarTier {
    pub const ALL: [PillarTier; 4] = [
        PillarTier::Critical,
        PillarTier::Fragile,
        PillarTier::Stable,
        PillarTier::Thriving,
    ];

    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=39 => PillarTier::Critical,
            40..=59 => PillarTier::Fragile,
            60..=79 => PillarTier::Stable,
            _ => PillarTier::Thriving,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            PillarTier::Critical => 0,
            PillarTier::Fragile => 1,
            PillarTier::Stable => 2,
            PillarTier::Thriving => 3,
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            PillarTier::Critical => "red",
            PillarTier::Fragile => "amber",
            PillarTier::Stable => "sky",
            PillarTier::Thriving => "emerald",
        }
    }
}

/// Secondary classification combining the state with the pillar distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Sovereign,
    Architect,
    Warrior,
    Survivor,
    Seeker,
    Wanderer,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Sovereign,
        Archetype::Architect,
        Archetype::Warrior,
        Archetype::Survivor,
        Archetype::Seeker,
        Archetype::Wanderer,
    ];

    pub const fn index(self) -> usize {
        match self {
            Archetype::Sovereign => 0,
            Archetype::Architect => 1,
            Archetype::Warrior => 2,
            Archetype::Survivor => 3,
            Archetype::Seeker => 4,
            Archetype::Wanderer => 5,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Archetype::Sovereign => "sovereign",
            Archetype::Architect => "architect",
            Archetype::Warrior => "warrior",
            Archetype::Survivor => "survivor",
            Archetype::Seeker => "seeker",
            Archetype::Wanderer => "wanderer",
        }
    }
}

/// Narrative cross-references between two weak pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationKey {
    WorkHealth,
    WorkLeisure,
    FinanceWork,
    RelationshipsLeisure,
    IdentitySpirituality,
    RelationshipsIdentity,
    HealthFinance,
    BalancedBase,
}

impl CorrelationKey {
    pub const ALL: [CorrelationKey; 8] = [
        CorrelationKey::WorkHealth,
        CorrelationKey::WorkLeisure,
        CorrelationKey::FinanceWork,
        CorrelationKey::RelationshipsLeisure,
        CorrelationKey::IdentitySpirituality,
        CorrelationKey::RelationshipsIdentity,
        CorrelationKey::HealthFinance,
        CorrelationKey::BalancedBase,
    ];

    pub const fn index(self) -> usize {
        match self {
            CorrelationKey::WorkHealth => 0,
            CorrelationKey::WorkLeisure => 1,
            CorrelationKey::FinanceWork => 2,
            CorrelationKey::RelationshipsLeisure => 3,
            CorrelationKey::IdentitySpirituality => 4,
            CorrelationKey::RelationshipsIdentity => 5,
            CorrelationKey::HealthFinance => 6,
            CorrelationKey::BalancedBase => 7,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            CorrelationKey::WorkHealth => "work_health",
            CorrelationKey::WorkLeisure => "work_leisure",
            CorrelationKey::FinanceWork => "finance_work",
            CorrelationKey::RelationshipsLeisure => "relationships_leisure",
            CorrelationKey::IdentitySpirituality => "identity_spirituality",
            CorrelationKey::RelationshipsIdentity => "relationships_identity",
            CorrelationKey::HealthFinance => "health_finance",
            CorrelationKey::BalancedBase => "balanced_base",
        }
    }

    /// Pillar pair whose joint weakness triggers this correlation.
    pub const fn pillars(self) -> Option<(Pillar, Pillar)> {
        match self {
            CorrelationKey::WorkHealth => Some((Pillar::Work, Pillar::Health)),
            CorrelationKey::WorkLeisure => Some((Pillar::Work, Pillar::Leisure)),
            CorrelationKey::FinanceWork => Some((Pillar::Finance, Pillar::Work)),
            CorrelationKey::RelationshipsLeisure => Some((Pillar::Relationships, Pillar::Leisure)),
            CorrelationKey::IdentitySpirituality => Some((Pillar::Identity, Pillar::Spirituality)),
            CorrelationKey::RelationshipsIdentity => {
                Some((Pillar::Relationships, Pillar::Identity))
            }
            CorrelationKey::HealthFinance => Some((Pillar::Health, Pillar::Finance)),
            CorrelationKey::BalancedBase => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_reads_missing_and_malformed_values_as_zero() {
        let answers = AnswerSet::new().with(1, 4).with(2, 9).with(3, -1).with(4, 0);

        assert_eq!(answers.response(1), 4);
        assert_eq!(answers.response(2), 0);
        assert_eq!(answers.response(3), 0);
        assert_eq!(answers.response(4), 0);
        assert_eq!(answers.response(20), 0);
        assert_eq!(answers.answered(), 1);
    }

    #[test]
    fn answers_deserialize_from_string_keyed_json() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"1": 2, "17": 5}"#).expect("answers parse");

        assert_eq!(answers.response(1), 2);
        assert_eq!(answers.response(17), 5);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn malformed_answer_entries_deserialize_as_unanswered() {
        let answers: AnswerSet = serde_json::from_str(
            r#"{"1": null, "2": 4.5, "3": "4", "4": 5, "0": 5, "70000": 3, "x": 2, "6": [1]}"#,
        )
        .expect("answers parse");

        assert_eq!(answers.response(1), 0);
        assert_eq!(answers.response(2), 0);
        assert_eq!(answers.response(3), 0);
        assert_eq!(answers.response(4), 5);
        assert_eq!(answers.response(6), 0);
        assert_eq!(answers.answered(), 1);
        assert_eq!(answers.len(), 5);
    }

    #[test]
    fn locale_parses_primary_subtag() {
        assert_eq!(Locale::parse("pt-BR"), Some(Locale::Pt));
        assert_eq!(Locale::parse(" ES_mx "), Some(Locale::Es));
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn canonical_indices_follow_declaration_order() {
        for (position, state) in DiagnosticState::ALL.iter().enumerate() {
            assert_eq!(state.index(), position);
        }
        for (position, pillar) in Pillar::ALL.iter().enumerate() {
            assert_eq!(pillar.index(), position);
        }
        for (position, archetype) in Archetype::ALL.iter().enumerate() {
            assert_eq!(archetype.index(), position);
        }
        for (position, correlation) in CorrelationKey::ALL.iter().enumerate() {
            assert_eq!(correlation.index(), position);
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(PillarTier::from_score(0), PillarTier::Critical);
        assert_eq!(PillarTier::from_score(39), PillarTier::Critical);
        assert_eq!(PillarTier::from_score(40), PillarTier::Fragile);
        assert_eq!(PillarTier::from_score(60), PillarTier::Stable);
        assert_eq!(PillarTier::from_score(80), PillarTier::Thriving);
        assert_eq!(PillarTier::from_score(100), PillarTier::Thriving);
    }
}

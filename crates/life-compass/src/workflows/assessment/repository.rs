use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerSet, DiagnosticState, Locale, Pillar, SessionId};
use super::pillars::{PillarScore, V3Insights};

/// Number of entries a well-formed enrichment plan carries, one per day.
pub const PLAN_DAYS: usize = 7;

/// Persisted assessment session. Scoring never reads anything but `answers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedDiagnosis {
    pub session_id: SessionId,
    pub answers: AnswerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub locale: Locale,
    pub unlocked: bool,
    pub enrichment: EnrichmentState,
    pub created_at: DateTime<Utc>,
}

impl SavedDiagnosis {
    pub fn session_view(&self) -> SessionView {
        SessionView {
            session_id: self.session_id.clone(),
            locale: self.locale,
            unlocked: self.unlocked,
            enrichment: self.enrichment.label(),
            created_at: self.created_at,
        }
    }
}

/// Sanitized representation of a stored session. Answers and context stay private.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub locale: Locale,
    pub unlocked: bool,
    pub enrichment: &'static str,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle of the optional generated narrative attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnrichmentState {
    #[default]
    NotRequested,
    Pending,
    Ready(EnrichmentPayload),
    Unavailable { reason: String },
}

impl EnrichmentState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotRequested => "not_requested",
            Self::Pending => "pending",
            Self::Ready(_) => "ready",
            Self::Unavailable { .. } => "unavailable",
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait DiagnosisRepository: Send + Sync {
    fn insert(&self, record: SavedDiagnosis) -> Result<SavedDiagnosis, RepositoryError>;
    fn update(&self, record: SavedDiagnosis) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SavedDiagnosis>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Input handed to the text-generation collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentRequest {
    pub session_id: SessionId,
    pub locale: Locale,
    pub state: DiagnosticState,
    pub confidence: u8,
    pub pillar_scores: Vec<PillarScore>,
    pub insights: V3Insights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Fixed-shape document returned by the text-generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentPayload {
    pub executive_summary: String,
    pub seven_day_plan: Vec<PlanDay>,
    pub stoic_refinement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: u8,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pillar: Option<Pillar>,
}

impl EnrichmentPayload {
    /// Checks the plan holds days `1..=7` exactly once each and that no text is blank.
    pub fn validate(&self) -> Result<(), EnrichmentError> {
        if self.executive_summary.trim().is_empty() {
            return Err(EnrichmentError::Malformed(
                "executive summary is empty".to_string(),
            ));
        }
        if self.stoic_refinement.trim().is_empty() {
            return Err(EnrichmentError::Malformed(
                "stoic refinement is empty".to_string(),
            ));
        }
        if self.seven_day_plan.len() != PLAN_DAYS {
            return Err(EnrichmentError::Malformed(format!(
                "plan has {} entries, expected {PLAN_DAYS}",
                self.seven_day_plan.len()
            )));
        }

        let mut seen = [false; PLAN_DAYS];
        for entry in &self.seven_day_plan {
            let slot = usize::from(entry.day)
                .checked_sub(1)
                .filter(|slot| *slot < PLAN_DAYS)
                .ok_or_else(|| {
                    EnrichmentError::Malformed(format!("day {} is out of range", entry.day))
                })?;
            if std::mem::replace(&mut seen[slot], true) {
                return Err(EnrichmentError::Malformed(format!(
                    "day {} appears more than once",
                    entry.day
                )));
            }
            if entry.action.trim().is_empty() {
                return Err(EnrichmentError::Malformed(format!(
                    "day {} has no action",
                    entry.day
                )));
            }
        }
        Ok(())
    }
}

/// Outbound text-generation hook. Implementations may be slow or fail; callers bound
/// the call with a timeout and record failures on the session instead of surfacing them.
pub trait EnrichmentProvider: Send + Sync {
    fn enrich(
        &self,
        request: EnrichmentRequest,
    ) -> impl Future<Output = Result<EnrichmentPayload, EnrichmentError>> + Send;
}

/// Enrichment failure. Never fatal to a report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("enrichment timed out after {0:?}")]
    Timeout(Duration),
    #[error("enrichment transport unavailable: {0}")]
    Transport(String),
    #[error("enrichment payload malformed: {0}")]
    Malformed(String),
}

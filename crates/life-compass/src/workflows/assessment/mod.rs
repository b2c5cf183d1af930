//! Self-assessment scoring, localized reporting, and session handling.
//!
//! Scoring is synchronous and pure over an [`AnswerSet`]; persistence, unlocking, and
//! the generated plan sit behind the traits in [`repository`].

pub mod content;
pub mod diagnosis;
pub mod domain;
pub mod pillars;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use content::{ContentCatalog, ContentError, LocaleContent, StateContent};
pub use diagnosis::{Diagnosis, DiagnosisEngine, StateAverage};
pub use domain::{
    AnswerSet, Archetype, CorrelationKey, DiagnosticState, Locale, Pillar, PillarTier,
    SessionId, QUESTION_COUNT,
};
pub use pillars::{
    derive_pillar_scores, derive_v3_insights, PillarDeriver, PillarScore, V3Insights,
};
pub use report::{
    compute_diagnosis, AssessmentReport, DiagnosisResult, Evaluation, ReportAccess,
};
pub use repository::{
    DiagnosisRepository, EnrichmentError, EnrichmentPayload, EnrichmentProvider,
    EnrichmentRequest, EnrichmentState, PlanDay, RepositoryError, SavedDiagnosis, SessionView,
};
pub use router::assessment_router;
pub use scoring::{ScoringModel, ScoringModelError};
pub use service::{AssessmentService, AssessmentServiceError, AssessmentSubmission};

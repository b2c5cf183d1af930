//! Localized report assembly.
//!
//! The engine and deriver hand back keys and numbers only. This module joins them
//! with the content catalog and applies the unlock gate: a locked report carries
//! the state headline, confidence and pillar scores, while the narrative bundle,
//! pillar insights, derived insights and the generated plan need an unlocked
//! session.

use serde::Serialize;

use super::content::{ContentCatalog, StateContent};
use super::diagnosis::{Diagnosis, DiagnosisEngine};
use super::domain::{
    AnswerSet, Archetype, CorrelationKey, DiagnosticState, Locale, Pillar, PillarTier, SessionId,
};
use super::pillars::{derive_v3_insights, PillarDeriver, PillarScore, V3Insights};
use super::repository::{EnrichmentPayload, EnrichmentState};

/// Winning state joined with its localized content.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisResult {
    pub locale: Locale,
    pub state: DiagnosticState,
    pub confidence: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub one_liner: &'static str,
    pub report: &'static StateContent,
}

impl DiagnosisResult {
    pub fn resolve(catalog: &ContentCatalog, diagnosis: &Diagnosis, locale: Locale) -> Self {
        let content = catalog.state(locale, diagnosis.state);
        Self {
            locale,
            state: diagnosis.state,
            confidence: diagnosis.confidence,
            label: content.label,
            color: diagnosis.state.color(),
            one_liner: content.one_liner,
            report: content,
        }
    }
}

/// Diagnoses `answers` and resolves the result in the requested locale, falling back
/// to the catalog default for unknown or missing codes.
pub fn compute_diagnosis(
    engine: &DiagnosisEngine,
    catalog: &ContentCatalog,
    answers: &AnswerSet,
    requested_locale: Option<&str>,
) -> DiagnosisResult {
    let locale = catalog.resolve_locale(requested_locale);
    DiagnosisResult::resolve(catalog, &engine.diagnose(answers), locale)
}

/// Every number derived from one answer set.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub locale: Locale,
    pub diagnosis: Diagnosis,
    pub pillar_scores: [PillarScore; 7],
    pub insights: V3Insights,
}

impl Evaluation {
    pub fn compute(
        engine: &DiagnosisEngine,
        deriver: &PillarDeriver,
        answers: &AnswerSet,
        locale: Locale,
    ) -> Self {
        let diagnosis = engine.diagnose(answers);
        let pillar_scores = deriver.derive(answers);
        let insights = derive_v3_insights(&pillar_scores, diagnosis.state);
        Self {
            locale,
            diagnosis,
            pillar_scores,
            insights,
        }
    }
}

/// How much of a report the caller may see.
#[derive(Debug, Clone, Copy)]
pub enum ReportAccess<'a> {
    Locked,
    Unlocked { enrichment: &'a EnrichmentState },
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub locale: Locale,
    pub unlocked: bool,
    pub summary: ReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_teaser: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ReportDetails>,
}

/// Section visible whether or not the session is unlocked.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub state: DiagnosticState,
    pub label: &'static str,
    pub color: &'static str,
    pub one_liner: &'static str,
    pub confidence: u8,
    pub pillars: Vec<PillarView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarView {
    pub pillar: Pillar,
    pub label: &'static str,
    pub score: u8,
    pub tier: PillarTier,
    pub color: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDetails {
    pub state: &'static StateContent,
    pub pillar_insights: Vec<PillarInsightView>,
    pub insights: InsightsView,
    pub enrichment: EnrichmentView,
}

#[derive(Debug, Clone, Serialize)]
pub struct PillarInsightView {
    pub pillar: Pillar,
    pub label: &'static str,
    pub tier: PillarTier,
    pub insight: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsView {
    pub antifragility_score: u8,
    pub bottleneck: Pillar,
    pub bottleneck_label: &'static str,
    pub bottleneck_leverage: &'static str,
    pub archetype: Archetype,
    pub archetype_label: &'static str,
    pub archetype_description: &'static str,
    pub correlations: Vec<CorrelationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationView {
    pub key: CorrelationKey,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentView {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<EnrichmentPayload>,
}

impl AssessmentReport {
    pub fn assemble(
        catalog: &ContentCatalog,
        session_id: Option<SessionId>,
        evaluation: &Evaluation,
        access: ReportAccess<'_>,
    ) -> Self {
        let locale = evaluation.locale;
        let headline = DiagnosisResult::resolve(catalog, &evaluation.diagnosis, locale);

        let summary = ReportSummary {
            state: headline.state,
            label: headline.label,
            color: headline.color,
            one_liner: headline.one_liner,
            confidence: headline.confidence,
            pillars: evaluation
                .pillar_scores
                .iter()
                .map(|entry| PillarView {
                    pillar: entry.pillar,
                    label: catalog.pillar(locale, entry.pillar).label,
                    score: entry.score,
                    tier: entry.tier,
                    color: entry.color,
                    icon: entry.icon,
                })
                .collect(),
        };

        match access {
            ReportAccess::Locked => Self {
                session_id,
                locale,
                unlocked: false,
                summary,
                locked_teaser: Some(catalog.ui(locale).locked_teaser),
                details: None,
            },
            ReportAccess::Unlocked { enrichment } => Self {
                session_id,
                locale,
                unlocked: true,
                summary,
                locked_teaser: None,
                details: Some(ReportDetails {
                    state: headline.report,
                    pillar_insights: pillar_insights(catalog, evaluation),
                    insights: insights_view(catalog, locale, &evaluation.insights),
                    enrichment: enrichment_view(catalog, locale, enrichment),
                }),
            },
        }
    }
}

fn pillar_insights(catalog: &ContentCatalog, evaluation: &Evaluation) -> Vec<PillarInsightView> {
    evaluation
        .pillar_scores
        .iter()
        .map(|entry| {
            let content = catalog.pillar(evaluation.locale, entry.pillar);
            PillarInsightView {
                pillar: entry.pillar,
                label: content.label,
                tier: entry.tier,
                insight: content.insight(entry.tier),
            }
        })
        .collect()
}

fn insights_view(catalog: &ContentCatalog, locale: Locale, insights: &V3Insights) -> InsightsView {
    let bottleneck = catalog.pillar(locale, insights.bottleneck);
    let archetype = catalog.archetype(locale, insights.archetype);

    InsightsView {
        antifragility_score: insights.antifragility_score,
        bottleneck: insights.bottleneck,
        bottleneck_label: bottleneck.label,
        bottleneck_leverage: bottleneck.leverage,
        archetype: insights.archetype,
        archetype_label: archetype.label,
        archetype_description: archetype.description,
        correlations: insights
            .correlations
            .iter()
            .map(|key| CorrelationView {
                key: *key,
                text: catalog.correlation(locale, *key).text,
            })
            .collect(),
    }
}

fn enrichment_view(
    catalog: &ContentCatalog,
    locale: Locale,
    enrichment: &EnrichmentState,
) -> EnrichmentView {
    let ui = catalog.ui(locale);
    let (message, plan) = match enrichment {
        EnrichmentState::NotRequested => (Some(ui.enrichment_not_requested), None),
        EnrichmentState::Pending => (Some(ui.enrichment_pending), None),
        EnrichmentState::Ready(payload) => (None, Some(payload.clone())),
        EnrichmentState::Unavailable { .. } => (Some(ui.enrichment_unavailable), None),
    };

    EnrichmentView {
        status: enrichment.label(),
        message,
        plan,
    }
}

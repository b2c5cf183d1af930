use std::sync::Arc;
use std::thread;

use life_compass::workflows::assessment::{
    compute_diagnosis, derive_pillar_scores, derive_v3_insights, AnswerSet, AssessmentReport,
    ContentCatalog, CorrelationKey, DiagnosisEngine, DiagnosticState, EnrichmentState,
    Evaluation, Locale, PillarDeriver, ReportAccess, ScoringModel,
};

fn golden_answers() -> AnswerSet {
    let responses: [i64; 21] = [2, 1, 2, 5, 4, 5, 2, 3, 2, 5, 5, 4, 3, 3, 2, 1, 2, 1, 4, 3, 4];
    (1..=21u16).zip(responses).collect()
}

fn engine() -> DiagnosisEngine {
    DiagnosisEngine::new(Arc::new(ScoringModel::standard()))
}

/// Deterministic answer sets spanning valid, missing, and out-of-range values.
fn sweep(count: usize) -> Vec<AnswerSet> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            (1..=21u16)
                .filter_map(|question| {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    match seed % 9 {
                        0 => None,
                        8 => Some((question, 7)),
                        value => Some((question, ((value - 1) % 5 + 1) as i64)),
                    }
                })
                .collect()
        })
        .collect()
}

#[test]
fn golden_answers_render_a_localized_report() {
    let model = Arc::new(ScoringModel::standard());
    model.validate().expect("standard model is consistent");
    let catalog = ContentCatalog::load(Locale::En).expect("catalog loads");
    let engine = DiagnosisEngine::new(model.clone());
    let deriver = PillarDeriver::new(model);

    let headline = compute_diagnosis(&engine, &catalog, &golden_answers(), Some("pt-BR"));
    assert_eq!(headline.locale, Locale::Pt);
    assert_eq!(headline.label, catalog.state(Locale::Pt, headline.state).label);

    let evaluation = Evaluation::compute(&engine, &deriver, &golden_answers(), Locale::Pt);
    let locked = AssessmentReport::assemble(&catalog, None, &evaluation, ReportAccess::Locked);
    assert_eq!(locked.summary.state, headline.state);
    assert_eq!(locked.summary.confidence, headline.confidence);
    assert!(locked.details.is_none());

    let enrichment = EnrichmentState::NotRequested;
    let unlocked = AssessmentReport::assemble(
        &catalog,
        None,
        &evaluation,
        ReportAccess::Unlocked {
            enrichment: &enrichment,
        },
    );
    let details = unlocked.details.expect("details present");
    let bottleneck = catalog.pillar(Locale::Pt, details.insights.bottleneck);
    assert_eq!(details.insights.bottleneck_label, bottleneck.label);
    assert_eq!(details.insights.bottleneck_leverage, bottleneck.leverage);
    assert_eq!(
        details.insights.correlations.len(),
        evaluation.insights.correlations.len()
    );
    assert_eq!(details.enrichment.status, "not_requested");
}

#[test]
fn ties_resolve_to_the_earliest_state() {
    let engine = engine();

    let overload_and_stagnation = AnswerSet::new()
        .with(4, 5)
        .with(5, 5)
        .with(6, 5)
        .with(11, 5)
        .with(12, 5);
    let diagnosis = engine.diagnose(&overload_and_stagnation);
    assert_eq!(diagnosis.state, DiagnosticState::Overload);
    assert_eq!(diagnosis.confidence, 100);

    let stagnation_and_alignment = AnswerSet::new().with(11, 5).with(12, 5).with(19, 5);
    assert_eq!(
        engine.diagnose(&stagnation_and_alignment).state,
        DiagnosticState::Stagnation
    );

    let uniform: AnswerSet = (1..=21u16).map(|question| (question, 3)).collect();
    let diagnosis = engine.diagnose(&uniform);
    assert_eq!(diagnosis.state, DiagnosticState::Overload);
    assert_eq!(diagnosis.confidence, 90);
}

#[test]
fn outputs_stay_within_bounds_across_a_sweep() {
    let model = ScoringModel::standard();
    let engine = engine();

    for answers in sweep(2_000) {
        let diagnosis = engine.diagnose(&answers);
        assert!((75..=100).contains(&diagnosis.confidence), "{answers:?}");

        let scores = derive_pillar_scores(&model, &answers);
        assert!(scores.iter().all(|entry| entry.score <= 100));

        let insights = derive_v3_insights(&scores, diagnosis.state);
        assert!(insights.antifragility_score <= 100);
        assert!((1..=3).contains(&insights.correlations.len()));

        let minimum = scores.iter().map(|entry| entry.score).min();
        assert_eq!(
            Some(scores[insights.bottleneck.index()].score),
            minimum,
            "{answers:?}"
        );
        if insights.correlations == vec![CorrelationKey::BalancedBase] {
            continue;
        }
        assert!(!insights.correlations.contains(&CorrelationKey::BalancedBase));
    }
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(engine());
    let expected = engine.diagnose(&golden_answers());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.diagnose(&golden_answers()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker finishes"), expected);
    }
}

#[test]
fn every_locale_resolves_every_state() {
    let catalog = ContentCatalog::load(Locale::Es).expect("catalog loads");

    for locale in Locale::ALL {
        for state in DiagnosticState::ALL {
            let content = catalog.state(locale, state);
            assert_eq!(content.state, state);
            assert!(!content.recommended_focus.is_empty());
        }
    }
    assert_eq!(catalog.resolve_locale(Some("PT")), Locale::Pt);
    assert_eq!(catalog.resolve_locale(Some("klingon")), Locale::Es);
}

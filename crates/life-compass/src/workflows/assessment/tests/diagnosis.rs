use super::common::*;
use crate::workflows::assessment::domain::{
    AnswerSet, Archetype, CorrelationKey, DiagnosticState, Locale, Pillar, PillarTier,
};
use crate::workflows::assessment::{
    compute_diagnosis, derive_pillar_scores, derive_v3_insights, DiagnosisEngine, Evaluation,
    PillarDeriver,
};

#[test]
fn golden_answers_diagnose_overload() {
    let engine = DiagnosisEngine::new(model());
    let diagnosis = engine.diagnose(&golden_answers());

    assert_eq!(diagnosis.state, DiagnosticState::Overload);
    assert_eq!(diagnosis.confidence, 98);
    let overload = diagnosis
        .average_for(DiagnosticState::Overload)
        .expect("overload average");
    assert_eq!((overload.sum, overload.count), (14, 3));
}

#[test]
fn golden_answers_derive_expected_pillars_and_insights() {
    let model = model();
    let scores = derive_pillar_scores(&model, &golden_answers());

    let values: Vec<u8> = scores.iter().map(|entry| entry.score).collect();
    assert_eq!(values, vec![40, 30, 40, 50, 20, 10, 40]);
    assert_eq!(scores[Pillar::Leisure.index()].tier, PillarTier::Critical);
    assert_eq!(scores[Pillar::Finance.index()].tier, PillarTier::Fragile);

    let insights = derive_v3_insights(&scores, DiagnosticState::Overload);
    assert_eq!(insights.bottleneck, Pillar::Leisure);
    assert_eq!(insights.antifragility_score, 14);
    assert_eq!(insights.archetype, Archetype::Survivor);
    assert_eq!(
        insights.correlations,
        vec![
            CorrelationKey::WorkLeisure,
            CorrelationKey::RelationshipsLeisure,
            CorrelationKey::IdentitySpirituality,
        ]
    );
}

#[test]
fn empty_answers_fall_to_reactivity_with_neutral_pillars() {
    let model = model();
    let evaluation = Evaluation::compute(
        &DiagnosisEngine::new(model.clone()),
        &PillarDeriver::new(model),
        &AnswerSet::new(),
        Locale::En,
    );

    assert_eq!(evaluation.diagnosis.state, DiagnosticState::Reactivity);
    assert_eq!(evaluation.diagnosis.confidence, 87);
    assert!(evaluation
        .pillar_scores
        .iter()
        .all(|entry| entry.score == 50 && entry.tier == PillarTier::Fragile));
    assert_eq!(evaluation.insights.bottleneck, Pillar::Health);
    assert_eq!(
        evaluation.insights.correlations,
        vec![CorrelationKey::BalancedBase]
    );
}

#[test]
fn malformed_values_read_as_unanswered() {
    let engine = DiagnosisEngine::new(model());
    let malformed = AnswerSet::new().with(4, 9).with(5, -1).with(6, 0).with(99, 5);

    assert_eq!(
        engine.diagnose(&malformed),
        engine.diagnose(&AnswerSet::new())
    );
}

#[test]
fn diagnosis_is_deterministic_across_calls_and_engines() {
    let first = DiagnosisEngine::new(model()).diagnose(&golden_answers());
    let second = DiagnosisEngine::new(model()).diagnose(&golden_answers());
    assert_eq!(first, second);
}

#[test]
fn compute_diagnosis_localizes_the_same_state() {
    let engine = DiagnosisEngine::new(model());
    let catalog = catalog();

    let english = compute_diagnosis(&engine, &catalog, &golden_answers(), Some("en"));
    let spanish = compute_diagnosis(&engine, &catalog, &golden_answers(), Some("es-MX"));
    let fallback = compute_diagnosis(&engine, &catalog, &golden_answers(), Some("xx"));

    assert_eq!(english.state, spanish.state);
    assert_eq!(english.confidence, spanish.confidence);
    assert_ne!(english.one_liner, spanish.one_liner);
    assert_eq!(spanish.locale, Locale::Es);
    assert_eq!(fallback.locale, Locale::En);
    assert_eq!(fallback.one_liner, english.one_liner);
}

#[test]
fn confidence_stays_in_bounds_for_uniform_answers() {
    let engine = DiagnosisEngine::new(model());
    for value in 0..=6 {
        let answers: AnswerSet = (1..=21).map(|question| (question, value)).collect();
        let diagnosis = engine.diagnose(&answers);
        assert!(
            (75..=100).contains(&diagnosis.confidence),
            "value {value} gave {}",
            diagnosis.confidence
        );
    }
}

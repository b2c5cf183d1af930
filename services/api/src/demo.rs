use crate::infra::{build_service, parse_submission, ApiService};
use clap::Args;
use life_compass::config::AssessmentConfig;
use life_compass::error::AppError;
use life_compass::workflows::assessment::{
    AnswerSet, AssessmentReport, AssessmentSubmission, EnrichmentState, SavedDiagnosis,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Report language (en, pt or es). Unknown tags fall back to the default locale.
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Stop after the locked summary instead of walking through unlock and enrichment.
    #[arg(long)]
    pub(crate) skip_unlock: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// JSON file with either a full submission or a bare `{"1": 3, ...}` answer map
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Report language (en, pt or es); overrides the file's locale
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Free-text situation passed to the plan generator
    #[arg(long)]
    pub(crate) context: Option<String>,
    /// Unlock the full report and generate the seven-day plan
    #[arg(long)]
    pub(crate) unlock: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        answers,
        locale,
        context,
        unlock,
        json,
    } = args;

    let raw = std::fs::read_to_string(&answers)?;
    let mut submission = parse_submission(&raw)?;
    if locale.is_some() {
        submission.locale = locale;
    }
    if context.is_some() {
        submission.context = context;
    }

    let service = build_service(&AssessmentConfig::default())?;
    let report = if unlock {
        let record = service.submit(submission)?;
        unlock_and_enrich(&service, &record).await?;
        service.report(&record.session_id)?
    } else {
        service.diagnose(&submission)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        locale,
        skip_unlock,
    } = args;

    let service = build_service(&AssessmentConfig::default())?;
    let questionnaire = service.questionnaire(locale.as_deref());

    println!("Life compass demo");
    println!(
        "- Questionnaire: {} questions ({}) | scale {} .. {}",
        questionnaire.questions.len(),
        questionnaire.locale.code(),
        questionnaire.scale[0],
        questionnaire.scale[4]
    );

    let submission = AssessmentSubmission {
        answers: demo_answers(),
        context: Some("New role, long commute, training has stopped.".to_string()),
        locale: Some(questionnaire.locale.code().to_string()),
    };
    let record = service.submit(submission)?;
    println!(
        "- Stored session {} at {}",
        record.session_id,
        record.created_at.format("%Y-%m-%d %H:%M UTC")
    );

    let locked = service.report(&record.session_id)?;
    render_report(&locked);

    if skip_unlock {
        return Ok(());
    }

    println!("\nUnlocking full report");
    unlock_and_enrich(&service, &record).await?;
    let unlocked = service.report(&record.session_id)?;
    render_report(&unlocked);
    Ok(())
}

async fn unlock_and_enrich(service: &ApiService, record: &SavedDiagnosis) -> Result<(), AppError> {
    service.unlock(&record.session_id)?;
    match service.enrich(&record.session_id).await? {
        EnrichmentState::Unavailable { reason } => {
            println!("  Plan unavailable: {reason}");
        }
        state => println!("  Plan status: {}", state.label()),
    }
    Ok(())
}

/// Answers for a respondent stretched thin by work with almost no recovery time.
pub(crate) fn demo_answers() -> AnswerSet {
    let responses: [i64; 21] = [2, 1, 2, 5, 4, 5, 2, 3, 2, 5, 5, 4, 3, 3, 2, 1, 2, 1, 4, 3, 4];
    (1..=21u16).zip(responses).collect()
}

fn render_report(report: &AssessmentReport) {
    let summary = &report.summary;
    println!(
        "\n{} ({}% confidence) [{}]",
        summary.label, summary.confidence, summary.color
    );
    println!("  {}", summary.one_liner);
    println!("  Pillars:");
    for pillar in &summary.pillars {
        println!(
            "    - {:<14} {:>3} ({:?})",
            pillar.label, pillar.score, pillar.tier
        );
    }

    let Some(details) = &report.details else {
        if let Some(teaser) = report.locked_teaser {
            println!("  {teaser}");
        }
        return;
    };

    println!("  Meaning: {}", details.state.meaning);
    println!("  Primary risk: {}", details.state.primary_risk);
    println!("  Recommended focus:");
    for focus in details.state.recommended_focus {
        println!("    - {focus}");
    }

    let insights = &details.insights;
    println!(
        "  Antifragility {} | bottleneck {} | archetype {}",
        insights.antifragility_score, insights.bottleneck_label, insights.archetype_label
    );
    println!("  Leverage: {}", insights.bottleneck_leverage);
    for correlation in &insights.correlations {
        println!("    * {}", correlation.text);
    }

    match &details.enrichment.plan {
        Some(plan) => {
            println!("  {}", plan.executive_summary);
            for day in &plan.seven_day_plan {
                println!("    Day {}: {}", day.day, day.action);
            }
            println!("  {}", plan.stoic_refinement);
        }
        None => {
            if let Some(message) = details.enrichment.message {
                println!("  {message}");
            }
        }
    }
}

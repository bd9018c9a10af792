use clap::Args;
use origin_risk::config::ScoringConfig;
use origin_risk::error::AppError;
use origin_risk::profiles::{
    ApplicantSubmission, CalendarClock, LineScores, RiskAssessment, RiskProfile,
    RiskProfileService,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Applicant JSON document to score (reads stdin when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Score as if it were this calendar year (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Include the per-line scores behind each tier
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Debug, Serialize)]
struct ScoreOutput<'a> {
    #[serde(flatten)]
    profile: &'a RiskProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<&'a LineScores>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        year,
        explain,
    } = args;

    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let clock = ScoringConfig { pinned_year: year }.clock();
    let assessment = score_document(&raw, clock)?;
    println!("{}", render(&assessment, explain)?);
    Ok(())
}

pub(crate) fn score_document(
    raw: &str,
    clock: Arc<dyn CalendarClock>,
) -> Result<RiskAssessment, AppError> {
    let submission: ApplicantSubmission = serde_json::from_str(raw)?;
    let service = RiskProfileService::new(clock);
    Ok(service.assess(submission)?)
}

fn render(assessment: &RiskAssessment, explain: bool) -> Result<String, AppError> {
    let output = ScoreOutput {
        profile: &assessment.profile,
        scores: explain.then_some(&assessment.scores),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

use super::common::*;
use crate::profiles::domain::PlanTier;
use crate::profiles::scoring::LineScores;
use crate::profiles::service::RiskProfileServiceError;

#[test]
fn service_scores_documented_example() {
    let profile = service_for_year(2021)
        .evaluate(submission())
        .expect("submission scores");

    assert_eq!(profile.auto, PlanTier::Regular);
    assert_eq!(profile.disability, PlanTier::Ineligible);
    assert_eq!(profile.home, PlanTier::Economic);
    assert_eq!(profile.life, PlanTier::Regular);
}

#[test]
fn service_uses_clock_year_for_vehicle_recency() {
    let assessment = service_for_year(2030)
        .assess(submission())
        .expect("submission scores");

    assert_eq!(
        assessment.scores,
        LineScores {
            auto: 0,
            disability: 0,
            home: 0,
            life: 2,
        }
    );
    assert_eq!(assessment.profile.auto, PlanTier::Economic);
}

#[test]
fn service_surfaces_validation_errors() {
    match service().evaluate(invalid_submission()) {
        Err(RiskProfileServiceError::Validation(errors)) => assert_eq!(errors.len(), 5),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn service_scores_prevalidated_applicants() {
    let assessment = service().assess_applicant(&neutral_applicant());

    assert_eq!(assessment.scores, LineScores::uniform(0));
}

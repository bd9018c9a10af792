use super::super::domain::{Applicant, PlanTier, RiskProfile};
use super::LineScores;

const RESPONSIBLE_MIN_SCORE: i32 = 3;
const REGULAR_MIN_SCORE: i32 = 1;
const SENIOR_AGE_LIMIT: u32 = 60;

/// Maps an accumulated line score onto a plan tier.
pub fn classify(score: i32) -> PlanTier {
    if score >= RESPONSIBLE_MIN_SCORE {
        PlanTier::Responsible
    } else if score >= REGULAR_MIN_SCORE {
        PlanTier::Regular
    } else {
        PlanTier::Economic
    }
}

pub(crate) fn classify_lines(scores: &LineScores) -> RiskProfile {
    RiskProfile {
        auto: classify(scores.auto),
        disability: classify(scores.disability),
        home: classify(scores.home),
        life: classify(scores.life),
    }
}

/// Hard eligibility rules; these replace whatever tier the score produced.
pub(crate) fn apply_eligibility(applicant: &Applicant, profile: &mut RiskProfile) {
    let senior = applicant.age > SENIOR_AGE_LIMIT;

    if applicant.income == 0 || senior {
        profile.disability = PlanTier::Ineligible;
    }
    if senior {
        profile.life = PlanTier::Ineligible;
    }
    if applicant.vehicle.is_none() {
        profile.auto = PlanTier::Ineligible;
    }
    if applicant.house.is_none() {
        profile.home = PlanTier::Ineligible;
    }
}

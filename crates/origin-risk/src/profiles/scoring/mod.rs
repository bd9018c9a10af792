mod policy;
mod rules;

pub use policy::classify;

use super::domain::{Applicant, InsuranceLine, RiskProfile};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying the fixed underwriting rules to an applicant.
///
/// Scoring is a pure function of the applicant and the supplied calendar year.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, applicant: &Applicant, current_year: i32) -> RiskProfile {
        self.assess(applicant, current_year).profile
    }

    /// Score an applicant and keep the per-line integers that produced each tier.
    pub fn assess(&self, applicant: &Applicant, current_year: i32) -> RiskAssessment {
        let scores = rules::accumulate(applicant, current_year);

        let mut profile = policy::classify_lines(&scores);
        policy::apply_eligibility(applicant, &mut profile);

        RiskAssessment { scores, profile }
    }
}

/// Per-line risk points accumulated before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScores {
    pub auto: i32,
    pub disability: i32,
    pub home: i32,
    pub life: i32,
}

impl LineScores {
    pub fn uniform(score: i32) -> Self {
        Self {
            auto: score,
            disability: score,
            home: score,
            life: score,
        }
    }

    pub fn get(&self, line: InsuranceLine) -> i32 {
        match line {
            InsuranceLine::Auto => self.auto,
            InsuranceLine::Disability => self.disability,
            InsuranceLine::Home => self.home,
            InsuranceLine::Life => self.life,
        }
    }

    pub(crate) fn shift_all(&mut self, delta: i32) {
        self.auto += delta;
        self.disability += delta;
        self.home += delta;
        self.life += delta;
    }
}

/// Scoring output: the final profile plus the raw scores behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub scores: LineScores,
    pub profile: RiskProfile,
}

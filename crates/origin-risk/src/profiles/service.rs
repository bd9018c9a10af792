use std::sync::Arc;

use tracing::debug;

use super::clock::CalendarClock;
use super::domain::{Applicant, ApplicantSubmission, RiskProfile};
use super::guard::{ApplicantGuard, ValidationErrors};
use super::scoring::{RiskAssessment, RiskScorer};

/// Service composing the applicant guard, the calendar clock, and the scorer.
pub struct RiskProfileService<C: ?Sized> {
    guard: ApplicantGuard,
    scorer: RiskScorer,
    clock: Arc<C>,
}

impl<C> RiskProfileService<C>
where
    C: CalendarClock + ?Sized + 'static,
{
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            guard: ApplicantGuard::new(),
            scorer: RiskScorer::new(),
            clock,
        }
    }

    /// Validate a raw submission and return its plan assignment.
    pub fn evaluate(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<RiskProfile, RiskProfileServiceError> {
        self.assess(submission).map(|assessment| assessment.profile)
    }

    /// Same as [`evaluate`](Self::evaluate) but keeps the per-line scores.
    pub fn assess(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<RiskAssessment, RiskProfileServiceError> {
        let applicant = self.guard.applicant_from_submission(submission)?;
        Ok(self.assess_applicant(&applicant))
    }

    pub fn assess_applicant(&self, applicant: &Applicant) -> RiskAssessment {
        let current_year = self.clock.current_year();
        let assessment = self.scorer.assess(applicant, current_year);

        debug!(
            current_year,
            auto = assessment.scores.auto,
            disability = assessment.scores.disability,
            home = assessment.scores.home,
            life = assessment.scores.life,
            "accumulated line scores"
        );

        assessment
    }
}

/// Error raised by the risk profile service.
#[derive(Debug, thiserror::Error)]
pub enum RiskProfileServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

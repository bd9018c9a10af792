//! Insurance risk profiling: applicant intake, scoring, and the HTTP surface around them.
//!
//! The scoring engine is a pure function of the applicant and a calendar year. Everything
//! else in this module (guard, service, router) exists to get validated input into it and
//! its profile back out.

pub mod clock;
pub mod domain;
pub(crate) mod guard;
pub mod router;
pub(crate) mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use clock::{CalendarClock, FixedYearClock, SystemClock};
pub use domain::{
    Applicant, ApplicantSubmission, House, HouseSubmission, InsuranceLine, MaritalStatus,
    OwnershipStatus, PlanTier, RiskProfile, Submitted, Vehicle, VehicleSubmission,
    RISK_QUESTION_COUNT,
};
pub use guard::{ApplicantGuard, FieldViolation, ValidationErrors};
pub use router::{risk_profile_router, RISK_PROFILES_PATH};
pub use scoring::{classify, LineScores, RiskAssessment, RiskScorer};
pub use service::{RiskProfileService, RiskProfileServiceError};
pub use views::{ErrorResponse, StandardError};

use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::profiles::clock::FixedYearClock;
use crate::profiles::domain::{
    Applicant, ApplicantSubmission, House, HouseSubmission, MaritalStatus, OwnershipStatus,
    Submitted, Vehicle, VehicleSubmission,
};
use crate::profiles::scoring::{RiskAssessment, RiskScorer};
use crate::profiles::service::RiskProfileService;

pub(super) const CURRENT_YEAR: i32 = 2025;

/// Applicant whose every adjustment step is neutral, so all line scores stay at zero and
/// no eligibility override fires.
pub(super) fn neutral_applicant() -> Applicant {
    Applicant {
        age: 45,
        dependents: 0,
        income: 100_000,
        marital_status: MaritalStatus::Single,
        risk_answers: [0, 0, 0],
        house: Some(House {
            ownership_status: OwnershipStatus::Owned,
        }),
        vehicle: Some(Vehicle { year: 2001 }),
    }
}

pub(super) fn assess(applicant: &Applicant) -> RiskAssessment {
    RiskScorer::new().assess(applicant, CURRENT_YEAR)
}

/// The documented request example: a married 35 year old with two dependents, no income,
/// an owned house and a 2018 vehicle.
pub(super) fn submission() -> ApplicantSubmission {
    ApplicantSubmission {
        age: 35.into(),
        dependents: 2.into(),
        house: HouseSubmission {
            ownership_status: OwnershipStatus::Owned.into(),
        }
        .into(),
        income: 0.into(),
        marital_status: MaritalStatus::Married.into(),
        risk_questions: answers(&[0, 1, 0]),
        vehicle: VehicleSubmission { year: 2018.into() }.into(),
    }
}

pub(super) fn invalid_submission() -> ApplicantSubmission {
    ApplicantSubmission {
        age: 0.into(),
        dependents: (-1).into(),
        house: Submitted::Missing,
        income: (-5).into(),
        marital_status: MaritalStatus::Single.into(),
        risk_questions: answers(&[1, 0]),
        vehicle: VehicleSubmission { year: 0.into() }.into(),
    }
}

pub(super) fn answers(values: &[i64]) -> Submitted<Vec<Submitted<i64>>> {
    values
        .iter()
        .copied()
        .map(Submitted::from)
        .collect::<Vec<_>>()
        .into()
}

pub(super) fn service_for_year(year: i32) -> RiskProfileService<FixedYearClock> {
    RiskProfileService::new(Arc::new(FixedYearClock(year)))
}

pub(super) fn service() -> RiskProfileService<FixedYearClock> {
    service_for_year(CURRENT_YEAR)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

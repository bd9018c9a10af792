use super::super::domain::{Applicant, House, MaritalStatus, OwnershipStatus, Vehicle};
use super::LineScores;

const YOUNG_AGE_LIMIT: u32 = 30;
const MIDDLE_AGE_LIMIT: u32 = 40;
const HIGH_INCOME_THRESHOLD: u32 = 200_000;
const RECENT_VEHICLE_YEARS: i64 = 5;

pub(crate) fn base_score(risk_answers: &[u8]) -> i32 {
    risk_answers.iter().map(|answer| i32::from(*answer)).sum()
}

/// Runs every adjustment step against a fresh accumulator seeded with the base score.
pub(crate) fn accumulate(applicant: &Applicant, current_year: i32) -> LineScores {
    let mut scores = LineScores::uniform(base_score(&applicant.risk_answers));

    adjust_for_age(applicant.age, &mut scores);
    adjust_for_income(applicant.income, &mut scores);
    adjust_for_house(applicant.house.as_ref(), &mut scores);
    adjust_for_dependents(applicant.dependents, &mut scores);
    adjust_for_marital_status(applicant.marital_status, &mut scores);
    adjust_for_vehicle(applicant.vehicle.as_ref(), current_year, &mut scores);

    scores
}

pub(crate) fn adjust_for_age(age: u32, scores: &mut LineScores) {
    if age < YOUNG_AGE_LIMIT {
        scores.shift_all(-2);
    } else if age <= MIDDLE_AGE_LIMIT {
        scores.shift_all(-1);
    }
}

pub(crate) fn adjust_for_income(income: u32, scores: &mut LineScores) {
    if income > HIGH_INCOME_THRESHOLD {
        scores.shift_all(-1);
    }
}

pub(crate) fn adjust_for_house(house: Option<&House>, scores: &mut LineScores) {
    if let Some(House {
        ownership_status: OwnershipStatus::Mortgaged,
    }) = house
    {
        scores.home += 1;
        scores.disability += 1;
    }
}

pub(crate) fn adjust_for_dependents(dependents: u32, scores: &mut LineScores) {
    if dependents > 0 {
        scores.life += 1;
        scores.disability += 1;
    }
}

pub(crate) fn adjust_for_marital_status(status: MaritalStatus, scores: &mut LineScores) {
    if status == MaritalStatus::Married {
        scores.life += 1;
        scores.disability -= 1;
    }
}

pub(crate) fn adjust_for_vehicle(
    vehicle: Option<&Vehicle>,
    current_year: i32,
    scores: &mut LineScores,
) {
    let recent = vehicle
        .map(|vehicle| i64::from(current_year) - i64::from(vehicle.year) <= RECENT_VEHICLE_YEARS)
        .unwrap_or(false);

    if recent {
        scores.auto += 1;
    }
}

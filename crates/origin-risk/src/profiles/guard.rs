use std::fmt;

use serde_json::Value;

use super::domain::{
    Applicant, ApplicantSubmission, House, HouseSubmission, Submitted, Vehicle,
    VehicleSubmission, RISK_QUESTION_COUNT,
};

/// A single rejected field, rendered as `Field {field} {message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn detail(&self) -> String {
        format!("Field {} {}", self.field, self.message)
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field {} {}", self.field, self.message)
    }
}

/// Every violation found in a submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("applicant submission rejected with {} violation(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum Floor {
    Positive,
    AtLeast(i64),
}

impl Floor {
    fn min(self) -> i64 {
        match self {
            Floor::Positive => 1,
            Floor::AtLeast(min) => min,
        }
    }

    fn message(self) -> String {
        match self {
            Floor::Positive => "must be greater than 0".to_string(),
            Floor::AtLeast(min) => format!("must be greater than or equal to {min}"),
        }
    }
}

#[derive(Default)]
struct Collector {
    violations: Vec<FieldViolation>,
}

impl Collector {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(field, message));
    }

    fn unreadable(&mut self, field: &str, raw: &Value) {
        self.push(field, format!("Invalid value: {raw}"));
    }

    fn required<T>(&mut self, field: &str, value: Submitted<T>) -> Option<T> {
        match value {
            Submitted::Present(value) => Some(value),
            Submitted::Missing => {
                self.push(field, "must not be null");
                None
            }
            Submitted::Invalid(raw) => {
                self.unreadable(field, &raw);
                None
            }
        }
    }

    fn optional<T>(&mut self, field: &str, value: Submitted<T>) -> Option<T> {
        match value {
            Submitted::Present(value) => Some(value),
            Submitted::Missing => None,
            Submitted::Invalid(raw) => {
                self.unreadable(field, &raw);
                None
            }
        }
    }

    fn integer<T: TryFrom<i64>>(
        &mut self,
        field: &str,
        value: i64,
        floor: Floor,
        max: i64,
    ) -> Option<T> {
        if value < floor.min() {
            self.push(field, floor.message());
            return None;
        }
        if value > max {
            self.push(field, format!("must be less than or equal to {max}"));
            return None;
        }
        T::try_from(value).ok()
    }

    fn required_integer<T: TryFrom<i64>>(
        &mut self,
        field: &str,
        value: Submitted<i64>,
        floor: Floor,
        max: i64,
    ) -> Option<T> {
        self.required(field, value)
            .and_then(|value| self.integer(field, value, floor, max))
    }

    fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.violations)
    }
}

/// Guard responsible for producing `Applicant` values from raw submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicantGuard;

impl ApplicantGuard {
    pub fn new() -> Self {
        Self
    }

    /// Validate every field of the submission, collecting all violations before returning.
    pub fn applicant_from_submission(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<Applicant, ValidationErrors> {
        let mut collector = Collector::default();
        let unsigned_max = i64::from(u32::MAX);

        let age =
            collector.required_integer::<u32>("age", submission.age, Floor::Positive, unsigned_max);
        let dependents = collector.required_integer::<u32>(
            "dependents",
            submission.dependents,
            Floor::AtLeast(0),
            unsigned_max,
        );
        let house = collector
            .optional("house", submission.house)
            .map(|house| house_from_submission(house, &mut collector));
        let income = collector.required_integer::<u32>(
            "income",
            submission.income,
            Floor::AtLeast(0),
            unsigned_max,
        );
        let marital_status = collector.required("marital_status", submission.marital_status);
        let risk_answers = risk_answers_from_submission(submission.risk_questions, &mut collector);
        let vehicle = collector
            .optional("vehicle", submission.vehicle)
            .map(|vehicle| vehicle_from_submission(vehicle, &mut collector));

        match (age, dependents, income, marital_status, risk_answers) {
            (Some(age), Some(dependents), Some(income), Some(marital_status), Some(risk_answers))
                if collector.is_empty() =>
            {
                Ok(Applicant {
                    age,
                    dependents,
                    income,
                    marital_status,
                    risk_answers,
                    house: house.flatten(),
                    vehicle: vehicle.flatten(),
                })
            }
            _ => Err(collector.into_errors()),
        }
    }
}

fn house_from_submission(house: HouseSubmission, collector: &mut Collector) -> Option<House> {
    collector
        .required("house.ownership_status", house.ownership_status)
        .map(|ownership_status| House { ownership_status })
}

fn vehicle_from_submission(
    vehicle: VehicleSubmission,
    collector: &mut Collector,
) -> Option<Vehicle> {
    collector
        .required_integer::<i32>(
            "vehicle.year",
            vehicle.year,
            Floor::AtLeast(1),
            i64::from(i32::MAX),
        )
        .map(|year| Vehicle { year })
}

fn risk_answers_from_submission(
    answers: Submitted<Vec<Submitted<i64>>>,
    collector: &mut Collector,
) -> Option<[u8; RISK_QUESTION_COUNT]> {
    let answers = collector.required("risk_questions", answers)?;

    if answers.len() != RISK_QUESTION_COUNT {
        collector.push(
            "risk_questions",
            format!("must be of size {RISK_QUESTION_COUNT}"),
        );
        return None;
    }

    let mut parsed = [0u8; RISK_QUESTION_COUNT];
    let mut valid = true;
    for (index, answer) in answers.into_iter().enumerate() {
        let field = format!("risk_questions[{index}]");
        match collector.required_integer::<u8>(
            &field,
            answer,
            Floor::AtLeast(0),
            i64::from(u8::MAX),
        ) {
            Some(value) => parsed[index] = value,
            None => valid = false,
        }
    }

    valid.then_some(parsed)
}

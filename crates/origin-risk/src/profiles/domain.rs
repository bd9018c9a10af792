use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Number of risk questions every applicant answers.
pub const RISK_QUESTION_COUNT: usize = 3;

/// Validated applicant attributes consumed by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub age: u32,
    pub dependents: u32,
    pub income: u32,
    pub marital_status: MaritalStatus,
    pub risk_answers: [u8; RISK_QUESTION_COUNT],
    pub house: Option<House>,
    pub vehicle: Option<Vehicle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipStatus {
    Owned,
    Mortgaged,
}

/// Declared residence; its absence means the applicant owns no house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub ownership_status: OwnershipStatus,
}

/// Declared vehicle; its absence means the applicant owns no vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub year: i32,
}

/// Insurance products scored independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceLine {
    Auto,
    Disability,
    Home,
    Life,
}

impl InsuranceLine {
    pub const ALL: [InsuranceLine; 4] = [
        InsuranceLine::Auto,
        InsuranceLine::Disability,
        InsuranceLine::Home,
        InsuranceLine::Life,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceLine::Auto => "auto",
            InsuranceLine::Disability => "disability",
            InsuranceLine::Home => "home",
            InsuranceLine::Life => "life",
        }
    }
}

impl fmt::Display for InsuranceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recommended plan for a single insurance line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Economic,
    Regular,
    Responsible,
    Ineligible,
}

impl PlanTier {
    pub fn label(&self) -> &'static str {
        match self {
            PlanTier::Economic => "economic",
            PlanTier::Regular => "regular",
            PlanTier::Responsible => "responsible",
            PlanTier::Ineligible => "ineligible",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final plan assignment, one tier per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub auto: PlanTier,
    pub disability: PlanTier,
    pub home: PlanTier,
    pub life: PlanTier,
}

impl RiskProfile {
    pub fn tier(&self, line: InsuranceLine) -> PlanTier {
        match line {
            InsuranceLine::Auto => self.auto,
            InsuranceLine::Disability => self.disability,
            InsuranceLine::Home => self.home,
            InsuranceLine::Life => self.life,
        }
    }

    pub fn tiers(&self) -> impl Iterator<Item = (InsuranceLine, PlanTier)> + '_ {
        InsuranceLine::ALL
            .into_iter()
            .map(move |line| (line, self.tier(line)))
    }
}

/// Raw request body as received from callers.
///
/// Every field keeps what the caller sent, so wrong types and unknown enum values reach
/// `ApplicantGuard` alongside missing and out-of-range values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantSubmission {
    pub age: Submitted<i64>,
    pub dependents: Submitted<i64>,
    pub house: Submitted<HouseSubmission>,
    pub income: Submitted<i64>,
    pub marital_status: Submitted<MaritalStatus>,
    pub risk_questions: Submitted<Vec<Submitted<i64>>>,
    pub vehicle: Submitted<VehicleSubmission>,
}

impl ApplicantSubmission {
    /// Read a parsed JSON document. Anything other than an object is handed back unchanged.
    pub fn from_json(document: Value) -> Result<Self, Value> {
        if !document.is_object() {
            return Err(document);
        }
        match Self::deserialize(&document) {
            Ok(submission) => Ok(submission),
            Err(_) => Err(document),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseSubmission {
    pub ownership_status: Submitted<OwnershipStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSubmission {
    pub year: Submitted<i64>,
}

/// One request field: absent or null, present but unreadable as `T`, or readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted<T> {
    Missing,
    Invalid(Value),
    Present(T),
}

impl<T> Submitted<T> {
    pub fn present(self) -> Option<T> {
        match self {
            Submitted::Present(value) => Some(value),
            Submitted::Missing | Submitted::Invalid(_) => None,
        }
    }
}

impl<T> Default for Submitted<T> {
    fn default() -> Self {
        Submitted::Missing
    }
}

impl<T> From<T> for Submitted<T> {
    fn from(value: T) -> Self {
        Submitted::Present(value)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Submitted<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(Submitted::Missing);
        }
        match T::deserialize(&raw) {
            Ok(value) => Ok(Submitted::Present(value)),
            Err(_) => Ok(Submitted::Invalid(raw)),
        }
    }
}

impl<T: Serialize> Serialize for Submitted<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Submitted::Missing => serializer.serialize_none(),
            Submitted::Invalid(raw) => raw.serialize(serializer),
            Submitted::Present(value) => value.serialize(serializer),
        }
    }
}

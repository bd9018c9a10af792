use super::common::*;
use crate::profiles::domain::{
    Applicant, House, InsuranceLine, MaritalStatus, OwnershipStatus, PlanTier, Vehicle,
};
use crate::profiles::scoring::{classify, LineScores, RiskScorer};

#[test]
fn neutral_applicant_keeps_zero_scores() {
    let assessment = assess(&neutral_applicant());

    assert_eq!(assessment.scores, LineScores::uniform(0));
    for (line, tier) in assessment.profile.tiers() {
        assert_eq!(tier, PlanTier::Economic, "{line} should classify as economic");
    }
}

#[test]
fn base_score_is_sum_of_risk_answers() {
    for (answers, expected) in [
        ([0, 0, 0], 0),
        ([1, 0, 0], 1),
        ([1, 0, 1], 2),
        ([1, 1, 1], 3),
    ] {
        let mut applicant = neutral_applicant();
        applicant.risk_answers = answers;

        let assessment = assess(&applicant);

        assert_eq!(
            assessment.scores,
            LineScores::uniform(expected),
            "answers {answers:?}"
        );
    }
}

#[test]
fn age_under_thirty_subtracts_two_everywhere() {
    let mut applicant = neutral_applicant();
    applicant.age = 26;

    assert_eq!(assess(&applicant).scores, LineScores::uniform(-2));
}

#[test]
fn age_between_thirty_and_forty_subtracts_one_everywhere() {
    for age in [30, 35, 40] {
        let mut applicant = neutral_applicant();
        applicant.age = age;

        assert_eq!(assess(&applicant).scores, LineScores::uniform(-1), "age {age}");
    }
}

#[test]
fn age_over_forty_leaves_scores_untouched() {
    let mut applicant = neutral_applicant();
    applicant.age = 41;

    assert_eq!(assess(&applicant).scores, LineScores::uniform(0));
}

#[test]
fn high_income_subtracts_one_everywhere() {
    let mut applicant = neutral_applicant();
    applicant.income = 300_000;

    assert_eq!(assess(&applicant).scores, LineScores::uniform(-1));
}

#[test]
fn income_at_threshold_leaves_scores_untouched() {
    let mut applicant = neutral_applicant();
    applicant.income = 200_000;

    assert_eq!(assess(&applicant).scores, LineScores::uniform(0));
}

#[test]
fn age_and_income_adjustments_stack() {
    let mut applicant = neutral_applicant();
    applicant.age = 25;
    applicant.income = 250_000;
    applicant.risk_answers = [1, 1, 1];

    assert_eq!(assess(&applicant).scores, LineScores::uniform(0));
}

#[test]
fn mortgaged_house_raises_home_and_disability() {
    let mut applicant = neutral_applicant();
    applicant.house = Some(House {
        ownership_status: OwnershipStatus::Mortgaged,
    });

    let scores = assess(&applicant).scores;

    assert_eq!(
        scores,
        LineScores {
            auto: 0,
            disability: 1,
            home: 1,
            life: 0,
        }
    );
}

#[test]
fn owned_or_absent_house_leaves_scores_untouched() {
    let owned = neutral_applicant();
    let mut absent = neutral_applicant();
    absent.house = None;

    assert_eq!(assess(&owned).scores, LineScores::uniform(0));
    assert_eq!(assess(&absent).scores, LineScores::uniform(0));
}

#[test]
fn dependents_raise_life_and_disability() {
    let mut applicant = neutral_applicant();
    applicant.dependents = 1;

    let scores = assess(&applicant).scores;

    assert_eq!(scores.life, 1);
    assert_eq!(scores.disability, 1);
    assert_eq!(scores.auto, 0);
    assert_eq!(scores.home, 0);
}

#[test]
fn married_applicant_raises_life_and_lowers_disability() {
    let mut applicant = neutral_applicant();
    applicant.marital_status = MaritalStatus::Married;

    let scores = assess(&applicant).scores;

    assert_eq!(scores.life, 1);
    assert_eq!(scores.disability, -1);
    assert_eq!(scores.auto, 0);
    assert_eq!(scores.home, 0);
}

#[test]
fn recent_vehicle_raises_auto_only() {
    let mut applicant = neutral_applicant();
    applicant.vehicle = Some(Vehicle {
        year: CURRENT_YEAR - 2,
    });

    let scores = assess(&applicant).scores;

    assert_eq!(
        scores,
        LineScores {
            auto: 1,
            disability: 0,
            home: 0,
            life: 0,
        }
    );
}

#[test]
fn old_or_absent_vehicle_leaves_auto_untouched() {
    let mut old = neutral_applicant();
    old.vehicle = Some(Vehicle {
        year: CURRENT_YEAR - 7,
    });
    let mut absent = neutral_applicant();
    absent.vehicle = None;

    assert_eq!(assess(&old).scores.auto, 0);
    assert_eq!(assess(&absent).scores.auto, 0);
}

#[test]
fn vehicle_recency_follows_the_supplied_year() {
    let mut applicant = neutral_applicant();
    applicant.vehicle = Some(Vehicle { year: 2018 });
    let scorer = RiskScorer::new();

    assert_eq!(scorer.assess(&applicant, 2021).scores.auto, 1);
    assert_eq!(scorer.assess(&applicant, 2024).scores.auto, 0);
}

#[test]
fn classification_boundaries() {
    assert_eq!(classify(3), PlanTier::Responsible);
    assert_eq!(classify(7), PlanTier::Responsible);
    assert_eq!(classify(2), PlanTier::Regular);
    assert_eq!(classify(1), PlanTier::Regular);
    assert_eq!(classify(0), PlanTier::Economic);
    assert_eq!(classify(-2), PlanTier::Economic);
}

#[test]
fn zero_income_forces_disability_ineligible_despite_high_score() {
    let mut applicant = neutral_applicant();
    applicant.risk_answers = [1, 1, 1];
    applicant.income = 0;

    let assessment = assess(&applicant);

    assert_eq!(assessment.scores.disability, 3);
    assert_eq!(assessment.profile.disability, PlanTier::Ineligible);
    assert_eq!(assessment.profile.auto, PlanTier::Responsible);
    assert_eq!(assessment.profile.home, PlanTier::Responsible);
    assert_eq!(assessment.profile.life, PlanTier::Responsible);
}

#[test]
fn seniors_are_ineligible_for_life_and_disability() {
    let mut applicant = neutral_applicant();
    applicant.age = 66;
    applicant.risk_answers = [1, 1, 1];

    let profile = assess(&applicant).profile;

    assert_eq!(profile.life, PlanTier::Ineligible);
    assert_eq!(profile.disability, PlanTier::Ineligible);
    assert_eq!(profile.auto, PlanTier::Responsible);
    assert_eq!(profile.home, PlanTier::Responsible);
}

#[test]
fn sixty_year_old_remains_eligible() {
    let mut applicant = neutral_applicant();
    applicant.age = 60;

    let profile = assess(&applicant).profile;

    assert_eq!(profile.life, PlanTier::Economic);
    assert_eq!(profile.disability, PlanTier::Economic);
}

#[test]
fn missing_vehicle_and_house_are_ineligible_regardless_of_score() {
    let mut applicant = neutral_applicant();
    applicant.risk_answers = [1, 1, 1];
    applicant.vehicle = None;
    applicant.house = None;

    let assessment = assess(&applicant);

    assert_eq!(assessment.scores.auto, 3);
    assert_eq!(assessment.scores.home, 3);
    assert_eq!(assessment.profile.auto, PlanTier::Ineligible);
    assert_eq!(assessment.profile.home, PlanTier::Ineligible);
    assert_eq!(assessment.profile.life, PlanTier::Responsible);
    assert_eq!(assessment.profile.disability, PlanTier::Responsible);
}

#[test]
fn young_applicant_without_assets() {
    let applicant = Applicant {
        age: 20,
        dependents: 0,
        income: 50_000,
        marital_status: MaritalStatus::Single,
        risk_answers: [1, 1, 1],
        house: None,
        vehicle: None,
    };

    let assessment = assess(&applicant);

    assert_eq!(assessment.scores, LineScores::uniform(1));
    assert_eq!(assessment.profile.auto, PlanTier::Ineligible);
    assert_eq!(assessment.profile.home, PlanTier::Ineligible);
    assert_eq!(assessment.profile.life, PlanTier::Regular);
    assert_eq!(assessment.profile.disability, PlanTier::Regular);
}

#[test]
fn married_senior_with_dependents_and_assets() {
    let applicant = Applicant {
        age: 66,
        dependents: 3,
        income: 50_000,
        marital_status: MaritalStatus::Married,
        risk_answers: [0, 1, 1],
        house: Some(House {
            ownership_status: OwnershipStatus::Owned,
        }),
        vehicle: Some(Vehicle { year: 2023 }),
    };

    let assessment = assess(&applicant);

    assert_eq!(
        assessment.scores,
        LineScores {
            auto: 3,
            disability: 2,
            home: 2,
            life: 4,
        }
    );
    assert_eq!(assessment.profile.disability, PlanTier::Ineligible);
    assert_eq!(assessment.profile.life, PlanTier::Ineligible);
    assert_eq!(assessment.profile.auto, PlanTier::Responsible);
    assert_eq!(assessment.profile.home, PlanTier::Regular);
}

#[test]
fn every_line_receives_a_tier() {
    let assessment = assess(&neutral_applicant());

    let lines: Vec<InsuranceLine> = assessment.profile.tiers().map(|(line, _)| line).collect();
    assert_eq!(lines, InsuranceLine::ALL.to_vec());
    for line in InsuranceLine::ALL {
        assert_eq!(
            assessment.profile.tier(line),
            classify(assessment.scores.get(line))
        );
    }
}

#[test]
fn score_matches_assess_profile() {
    let mut applicant = neutral_applicant();
    applicant.marital_status = MaritalStatus::Married;
    applicant.dependents = 2;
    let scorer = RiskScorer::new();

    assert_eq!(
        scorer.score(&applicant, CURRENT_YEAR),
        scorer.assess(&applicant, CURRENT_YEAR).profile
    );
}

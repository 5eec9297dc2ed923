// Unit tests for the scoring functions.
//
// Tests isolated pure functions: RiskLevel::from_risk boundary conditions,
// compute_risk tiering and clamping, and the probability/level derivation
// in score_at.

use chrono::NaiveDate;
use pcos_risk::scoring::features::FeatureRecord;
use pcos_risk::scoring::level::RiskLevel;
use pcos_risk::scoring::risk::{compute_risk, score, score_at, RiskRules, ScoringError};

fn record(age: f64, weight: f64, height: f64, cycle: f64) -> FeatureRecord {
    FeatureRecord {
        age,
        weight,
        height,
        cycle,
        hair_growth: false,
        skin_darkening: false,
        hair_loss: false,
        pimples: false,
    }
}

// ============================================================
// RiskLevel::from_risk: boundary conditions
// ============================================================

#[test]
fn level_70_is_medium() {
    assert_eq!(RiskLevel::from_risk(70), RiskLevel::Medium);
}

#[test]
fn level_71_is_high() {
    assert_eq!(RiskLevel::from_risk(71), RiskLevel::High);
}

#[test]
fn level_40_is_low() {
    assert_eq!(RiskLevel::from_risk(40), RiskLevel::Low);
}

#[test]
fn level_41_is_medium() {
    assert_eq!(RiskLevel::from_risk(41), RiskLevel::Medium);
}

#[test]
fn level_extremes() {
    assert_eq!(RiskLevel::from_risk(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_risk(100), RiskLevel::High);
}

#[test]
fn level_display_matches_as_str() {
    for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
        assert_eq!(level.to_string(), level.as_str());
    }
}

#[test]
fn level_recommendation_urgency() {
    assert_eq!(RiskLevel::High.recommendation().urgency, "high");
    assert_eq!(RiskLevel::Medium.recommendation().urgency, "medium");
    assert_eq!(RiskLevel::Low.recommendation().urgency, "low");
    assert_eq!(RiskLevel::Low.recommendation().steps.len(), 4);
}

// ============================================================
// compute_risk: rule contributions
// ============================================================

#[test]
fn bmi_between_25_and_30_adds_20() {
    // 70 / 1.6^2 = 27.34
    assert_eq!(
        compute_risk(&record(50.0, 70.0, 160.0, 28.0), &RiskRules::default()),
        Ok(20)
    );
}

#[test]
fn bmi_above_30_adds_30_not_50() {
    // 100 / 1.5^2 = 44.4
    assert_eq!(
        compute_risk(&record(50.0, 100.0, 150.0, 28.0), &RiskRules::default()),
        Ok(30)
    );
}

#[test]
fn bmi_exactly_30_adds_20() {
    // 30 / 1.0^2 = 30.0
    assert_eq!(
        compute_risk(&record(50.0, 30.0, 100.0, 28.0), &RiskRules::default()),
        Ok(20)
    );
}

#[test]
fn bmi_just_above_30_adds_30() {
    // 30.1 / 1.0^2 = 30.1
    assert_eq!(
        compute_risk(&record(50.0, 30.1, 100.0, 28.0), &RiskRules::default()),
        Ok(30)
    );
}

#[test]
fn symptoms_add_ten_each() {
    let rules = RiskRules::default();
    let mut features = record(50.0, 50.0, 170.0, 28.0);
    assert_eq!(compute_risk(&features, &rules), Ok(0));
    features.skin_darkening = true;
    assert_eq!(compute_risk(&features, &rules), Ok(10));
    features.pimples = true;
    assert_eq!(compute_risk(&features, &rules), Ok(20));
}

#[test]
fn everything_present_stays_within_bounds() {
    let mut features = record(20.0, 120.0, 155.0, 60.0);
    features.hair_growth = true;
    features.skin_darkening = true;
    features.hair_loss = true;
    features.pimples = true;
    // BMI 49.9: 30 + 15 + 10 + 40
    let risk = compute_risk(&features, &RiskRules::default()).unwrap();
    assert_eq!(risk, 95);
    assert!(risk <= 100);
}

#[test]
fn scaled_weights_clamp_at_100() {
    let rules = RiskRules {
        bmi_tier2_points: 80,
        irregular_cycle_points: 80,
        ..RiskRules::default()
    };
    assert_eq!(compute_risk(&record(30.0, 90.0, 160.0, 50.0), &rules), Ok(100));
}

#[test]
fn negative_weights_clamp_at_zero() {
    let rules = RiskRules {
        age_points: -25,
        ..RiskRules::default()
    };
    assert_eq!(compute_risk(&record(30.0, 50.0, 170.0, 28.0), &rules), Ok(0));
}

#[test]
fn zero_height_fails() {
    assert_eq!(
        compute_risk(&record(30.0, 60.0, 0.0, 28.0), &RiskRules::default()),
        Err(ScoringError::DivisionByZero)
    );
}

// ============================================================
// score / score_at: derived fields
// ============================================================

#[test]
fn reference_record_scores_65_medium() {
    let mut features = record(28.0, 70.0, 160.0, 40.0);
    features.hair_growth = true;
    features.hair_loss = true;
    let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let result = score_at(&features, &RiskRules::default(), timestamp).unwrap();
    assert_eq!(result.risk, 65);
    assert_eq!(result.probability, 0.65);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.timestamp, timestamp);
}

#[test]
fn probability_is_risk_over_100() {
    let rules = RiskRules::default();
    let ages = [10.0, 30.0];
    let weights = [50.0, 70.0, 100.0];
    let cycles = [15.0, 28.0, 40.0];
    for &age in &ages {
        for &weight in &weights {
            for &cycle in &cycles {
                let result = score(&record(age, weight, 160.0, cycle), &rules).unwrap();
                assert_eq!(result.probability, f64::from(result.risk) / 100.0);
                assert_eq!(result.risk_level, RiskLevel::from_risk(result.risk));
            }
        }
    }
}

#[test]
fn repeated_scoring_is_stable() {
    let mut features = record(33.0, 82.0, 168.0, 19.0);
    features.pimples = true;
    let rules = RiskRules::default();
    let first = score(&features, &rules).unwrap();
    let second = score(&features, &rules).unwrap();
    assert_eq!(first.risk, second.risk);
    assert_eq!(first.probability, second.probability);
    assert_eq!(first.risk_level, second.risk_level);
}

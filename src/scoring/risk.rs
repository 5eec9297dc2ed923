// Rule-based risk score.
//
// Every rule adds a fixed number of points; the sum is clamped to 0-100.
// The BMI rules are mutually exclusive tiers: the upper threshold is checked
// first, so a BMI above 30 contributes only the upper weight.

use chrono::{Local, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::scoring::features::FeatureRecord;
use crate::scoring::level::RiskLevel;

/// Failures that can occur while computing a score.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScoringError {
    /// Height squared (in meters) is zero, so BMI is undefined.
    #[error("float division by zero")]
    DivisionByZero,
}

/// Thresholds and weights for the scoring rules.
pub struct RiskRules {
    /// BMI above this (but not above tier 2) adds `bmi_tier1_points` (default 25.0)
    pub bmi_tier1_threshold: f64,
    pub bmi_tier1_points: i64,
    /// BMI above this adds `bmi_tier2_points` instead of tier 1 (default 30.0)
    pub bmi_tier2_threshold: f64,
    pub bmi_tier2_points: i64,
    /// Cycles shorter than this are irregular (default 21 days)
    pub cycle_min_days: f64,
    /// Cycles longer than this are irregular (default 35 days)
    pub cycle_max_days: f64,
    pub irregular_cycle_points: i64,
    /// Inclusive age window that adds `age_points` (default 15-45)
    pub age_min: f64,
    pub age_max: f64,
    pub age_points: i64,
    /// Points per symptom present (default 10)
    pub symptom_points: i64,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            bmi_tier1_threshold: 25.0,
            bmi_tier1_points: 20,
            bmi_tier2_threshold: 30.0,
            bmi_tier2_points: 30,
            cycle_min_days: 21.0,
            cycle_max_days: 35.0,
            irregular_cycle_points: 15,
            age_min: 15.0,
            age_max: 45.0,
            age_points: 10,
            symptom_points: 10,
        }
    }
}

/// Output of a single scoring call, serialized as the `/predict` response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub risk: u32,
    pub probability: f64,
    #[serde(serialize_with = "iso_timestamp")]
    pub timestamp: NaiveDateTime,
    pub risk_level: RiskLevel,
}

/// Local wall-clock time with microseconds and no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

fn iso_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

/// Compute the clamped 0-100 risk score for a feature record.
pub fn compute_risk(features: &FeatureRecord, rules: &RiskRules) -> Result<u32, ScoringError> {
    let bmi = features.bmi().ok_or(ScoringError::DivisionByZero)?;
    let mut base_score: i64 = 0;

    if bmi > rules.bmi_tier2_threshold {
        base_score += rules.bmi_tier2_points;
    } else if bmi > rules.bmi_tier1_threshold {
        base_score += rules.bmi_tier1_points;
    }

    if features.cycle > rules.cycle_max_days || features.cycle < rules.cycle_min_days {
        base_score += rules.irregular_cycle_points;
    }

    if (rules.age_min..=rules.age_max).contains(&features.age) {
        base_score += rules.age_points;
    }

    base_score += i64::from(features.symptom_count()) * rules.symptom_points;

    Ok(base_score.clamp(0, 100) as u32)
}

/// Score a record and stamp the result with `timestamp`.
pub fn score_at(
    features: &FeatureRecord,
    rules: &RiskRules,
    timestamp: NaiveDateTime,
) -> Result<ScoreResult, ScoringError> {
    let risk = compute_risk(features, rules)?;
    Ok(ScoreResult {
        risk,
        probability: f64::from(risk) / 100.0,
        timestamp,
        risk_level: RiskLevel::from_risk(risk),
    })
}

/// Score a record, stamped with the current local time.
pub fn score(features: &FeatureRecord, rules: &RiskRules) -> Result<ScoreResult, ScoringError> {
    score_at(features, rules, Local::now().naive_local())
}

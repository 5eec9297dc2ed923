// Feature record: the measurements and symptoms a risk score is computed from.
//
// Four numeric fields are mandatory. Presence is checked on the raw JSON
// object before deserialization so that a missing key is reported as a
// validation failure rather than a parse failure.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keys that must be present in a request body, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 4] = ["age", "weight", "height", "cycle"];

/// A subject's measurements and symptom flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    /// Years.
    pub age: f64,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    /// Cycle length in days.
    pub cycle: f64,
    #[serde(default, deserialize_with = "nullable_flag")]
    pub hair_growth: bool,
    #[serde(default, deserialize_with = "nullable_flag")]
    pub skin_darkening: bool,
    #[serde(default, deserialize_with = "nullable_flag")]
    pub hair_loss: bool,
    #[serde(default, deserialize_with = "nullable_flag")]
    pub pimples: bool,
}

/// Symptom flags accept `null` as well as booleans; `null` reads as absent.
fn nullable_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Returns true when `body` is a JSON object carrying every required key.
///
/// Only key presence is checked. A key present with a `null` or non-numeric
/// value passes here and fails later when the record is deserialized.
pub fn has_required_fields(body: &Value) -> bool {
    match body.as_object() {
        Some(map) => REQUIRED_FIELDS.iter().all(|field| map.contains_key(*field)),
        None => false,
    }
}

/// Inclusive clinical input ranges used by strict validation.
struct FieldRange {
    min: f64,
    max: f64,
    below: &'static str,
    above: &'static str,
}

const AGE_RANGE: FieldRange = FieldRange {
    min: 0.0,
    max: 120.0,
    below: "Age must be greater than 0",
    above: "Age must be less than 120",
};

const WEIGHT_RANGE: FieldRange = FieldRange {
    min: 20.0,
    max: 300.0,
    below: "Weight must be greater than 20 kg",
    above: "Weight must be less than 300 kg",
};

const HEIGHT_RANGE: FieldRange = FieldRange {
    min: 100.0,
    max: 250.0,
    below: "Height must be greater than 100 cm",
    above: "Height must be less than 250 cm",
};

const CYCLE_RANGE: FieldRange = FieldRange {
    min: 0.0,
    max: 100.0,
    below: "Cycle length must be greater than 0",
    above: "Cycle length must be less than 100 days",
};

impl FieldRange {
    fn check(&self, value: f64, violations: &mut Vec<String>) {
        if value < self.min {
            violations.push(self.below.to_string());
        } else if value > self.max {
            violations.push(self.above.to_string());
        }
    }
}

impl FeatureRecord {
    /// Body Mass Index from weight (kg) and height (cm).
    ///
    /// Returns `None` when the squared height in meters is exactly zero.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height / 100.0;
        let denominator = height_m * height_m;
        if denominator == 0.0 {
            return None;
        }
        Some(self.weight / denominator)
    }

    /// Number of symptom flags set (0-4).
    pub fn symptom_count(&self) -> u32 {
        [
            self.hair_growth,
            self.skin_darkening,
            self.hair_loss,
            self.pimples,
        ]
        .iter()
        .filter(|present| **present)
        .count() as u32
    }

    /// Messages for every field outside its clinical range, in field order.
    /// Empty when the record is within range.
    pub fn range_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        AGE_RANGE.check(self.age, &mut violations);
        WEIGHT_RANGE.check(self.weight, &mut violations);
        HEIGHT_RANGE.check(self.height, &mut violations);
        CYCLE_RANGE.check(self.cycle, &mut violations);
        violations
    }
}

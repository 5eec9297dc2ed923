// Risk level buckets and the advice attached to each.

use serde::Serialize;

/// Categorical bucket derived from an integer risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Advice shown alongside a risk level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub message: &'static str,
    pub steps: &'static [&'static str],
    pub urgency: &'static str,
}

const HIGH_STEPS: &[&str] = &[
    "Schedule an appointment with a gynecologist immediately",
    "Keep a detailed record of your symptoms",
    "Consider comprehensive hormonal testing",
    "Begin monitoring your diet and exercise routine",
    "Track your menstrual cycle carefully",
];

const MEDIUM_STEPS: &[&str] = &[
    "Track your menstrual cycle regularly",
    "Maintain a balanced, healthy diet",
    "Exercise for at least 30 minutes daily",
    "Consult a healthcare provider if symptoms worsen",
    "Consider lifestyle modifications",
];

const LOW_STEPS: &[&str] = &[
    "Continue maintaining a healthy lifestyle",
    "Schedule regular check-ups",
    "Monitor any changes in your cycle",
    "Stay active and maintain a balanced diet",
];

impl RiskLevel {
    /// Bucket a risk score. Both thresholds are exclusive: 70 is Medium, 40 is Low.
    pub fn from_risk(risk: u32) -> Self {
        match risk {
            r if r > 70 => RiskLevel::High,
            r if r > 40 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        match self {
            RiskLevel::High => Recommendation {
                message: "High risk detected. Please consult a healthcare provider.",
                steps: HIGH_STEPS,
                urgency: "high",
            },
            RiskLevel::Medium => Recommendation {
                message: "Moderate risk detected. Monitor your symptoms.",
                steps: MEDIUM_STEPS,
                urgency: "medium",
            },
            RiskLevel::Low => Recommendation {
                message: "Low risk detected. Maintain healthy habits.",
                steps: LOW_STEPS,
                urgency: "low",
            },
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

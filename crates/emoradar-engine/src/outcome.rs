use emoradar_core::{InterventionType, PredictedOutcome};

const DEFAULT_FACTOR: f64 = 0.5;
const EXPECTED_TIMEFRAME: &str = "5-15 minutes";
/// Factors strictly above this are reported with "moderate" confidence.
const MODERATE_CONFIDENCE_ABOVE: f64 = 0.5;

/// Expected improvement per intervention type.
pub fn improvement_factor(intervention: InterventionType) -> f64 {
    match intervention {
        InterventionType::Immediate => 0.8,
        InterventionType::Motivational => 0.7,
        InterventionType::Adaptive => 0.6,
        InterventionType::Cognitive => 0.5,
        InterventionType::Supportive => 0.4,
    }
}

pub fn predict_outcome(intervention: InterventionType) -> PredictedOutcome {
    outcome_from_factor(improvement_factor(intervention))
}

/// Like [`predict_outcome`], for a type given by name. Unknown names use 0.5.
pub fn predict_outcome_for_name(name: &str) -> PredictedOutcome {
    let factor = name
        .parse::<InterventionType>()
        .map(improvement_factor)
        .unwrap_or(DEFAULT_FACTOR);
    outcome_from_factor(factor)
}

fn outcome_from_factor(factor: f64) -> PredictedOutcome {
    PredictedOutcome {
        likelihood_of_success: format!("{:.0}%", factor * 100.0),
        expected_timeframe: EXPECTED_TIMEFRAME.to_string(),
        confidence_level: if factor > MODERATE_CONFIDENCE_ABOVE {
            "moderate"
        } else {
            "low"
        }
        .to_string(),
    }
}

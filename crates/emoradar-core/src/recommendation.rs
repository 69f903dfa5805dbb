use crate::labels::{Concern, InterventionType, LearningPhase, UrgencyLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub when: String,
    pub duration: String,
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedOutcome {
    /// Integer percentage, e.g. `"40%"`.
    pub likelihood_of_success: String,
    pub expected_timeframe: String,
    pub confidence_level: String,
}

/// The assembled output of one engine evaluation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub primary_concern: Concern,
    pub urgency_level: UrgencyLevel,
    pub intervention_type: InterventionType,
    /// One or two distinct action phrases.
    pub recommended_actions: Vec<String>,
    pub timing: Timing,
    pub explanation: String,
    pub success_indicators: Vec<String>,
    pub learning_phase: LearningPhase,
    pub predicted_outcome: PredictedOutcome,
}

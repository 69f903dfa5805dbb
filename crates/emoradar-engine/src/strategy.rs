//! Strategy and action selection.
//!
//! Urgency narrows the intervention types that may be used; the concern's
//! catalog entry decides which of them exist. Both the type choice (for
//! `High` and `Medium`) and the action phrasing are uniform random draws from
//! the injected random source.

use crate::catalog::{StrategyCatalog, StrategyEntry};
use emoradar_core::{Concern, InterventionType, LearningPhase, UrgencyLevel};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on actions per recommendation.
pub const MAX_ACTIONS: usize = 2;

const PASSIVE_ACTION: &str = "Continue monitoring student progress";
const PASSIVE_EXPLANATION: &str = "No specific intervention needed at this time";
const PASSIVE_INDICATORS: [&str; 2] = ["Maintained engagement", "Steady progress"];
const GENERIC_INDICATORS: [&str; 2] = [
    "Improved overall emotional state",
    "Better learning engagement",
];

/// Result of [`select_strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyChoice {
    pub intervention: InterventionType,
    pub actions: Vec<String>,
    pub explanation: String,
    pub success_indicators: Vec<String>,
}

impl StrategyChoice {
    fn passive() -> Self {
        Self {
            intervention: InterventionType::Supportive,
            actions: vec![PASSIVE_ACTION.to_string()],
            explanation: PASSIVE_EXPLANATION.to_string(),
            success_indicators: PASSIVE_INDICATORS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Intervention types admissible at `urgency`.
pub fn candidate_types(urgency: UrgencyLevel) -> &'static [InterventionType] {
    match urgency {
        UrgencyLevel::Critical => &[InterventionType::Immediate],
        UrgencyLevel::High => &[InterventionType::Immediate, InterventionType::Adaptive],
        UrgencyLevel::Medium => &[InterventionType::Adaptive, InterventionType::Supportive],
        UrgencyLevel::Low => &[InterventionType::Supportive],
    }
}

/// Chooses the intervention type and up to [`MAX_ACTIONS`] distinct actions.
///
/// Concerns without a catalog entry (the built-in catalog has none for
/// `NeutralState`) get the passive "keep monitoring" recommendation. If the
/// urgency-chosen type is missing for the concern, the concern's first
/// declared type is used instead. `phase` does not influence the choice.
pub fn select_strategy<R: Rng + ?Sized>(
    catalog: &StrategyCatalog,
    concern: Concern,
    urgency: UrgencyLevel,
    phase: LearningPhase,
    rng: &mut R,
) -> StrategyChoice {
    let Some(strategies) = catalog.strategies_for(concern) else {
        return StrategyChoice::passive();
    };

    let wanted = match candidate_types(urgency) {
        [only] => *only,
        candidates => candidates
            .choose(rng)
            .copied()
            .unwrap_or(InterventionType::Supportive),
    };

    let Some(entry) = resolve_entry(strategies, wanted) else {
        return StrategyChoice::passive();
    };
    if entry.intervention != wanted {
        debug_event!(
            "no {} strategy for {}, falling back to {}",
            wanted,
            concern,
            entry.intervention
        );
    }

    let actions: Vec<String> = entry
        .actions
        .choose_multiple(rng, MAX_ACTIONS)
        .cloned()
        .collect();

    debug_event!(
        "strategy for {} at {} urgency ({} phase): {}",
        concern,
        urgency,
        phase,
        entry.intervention
    );

    StrategyChoice {
        intervention: entry.intervention,
        actions,
        explanation: explanation(concern, entry.intervention),
        success_indicators: success_indicators(concern),
    }
}

fn resolve_entry(strategies: &[StrategyEntry], wanted: InterventionType) -> Option<&StrategyEntry> {
    strategies
        .iter()
        .find(|entry| entry.intervention == wanted)
        .or_else(|| strategies.first())
}

/// Why the intervention is recommended, phrased per concern.
pub fn explanation(concern: Concern, intervention: InterventionType) -> String {
    let kind = intervention.title();
    match concern {
        Concern::HighFrustration => format!(
            "Student showing signs of learning frustration. {kind} intervention needed to prevent negative learning spiral."
        ),
        Concern::HighConfusion => format!(
            "Cognitive confusion detected. {kind} support will help clarify concepts and reduce cognitive load."
        ),
        Concern::LowEngagement => format!(
            "Engagement levels below optimal range. {kind} strategies will help re-energize learning process."
        ),
        Concern::LowConfidence => format!(
            "Confidence indicators suggest student needs encouragement. {kind} approach will build self-efficacy."
        ),
        Concern::OptimalState => format!(
            "Student in excellent learning state. {kind} enhancement will maximize learning potential."
        ),
        Concern::NeutralState => format!(
            "Emotional state analysis suggests {} intervention would be beneficial.",
            intervention.as_str()
        ),
    }
}

/// Observable signs that the intervention worked.
pub fn success_indicators(concern: Concern) -> Vec<String> {
    let indicators: &[&str] = match concern {
        Concern::HighFrustration => &[
            "Decreased facial tension and more relaxed posture",
            "Renewed willingness to attempt problems",
            "Improved emotional regulation",
        ],
        Concern::HighConfusion => &[
            "Clearer understanding demonstrated through questions",
            "Improved accuracy on practice problems",
            "More confident body language",
        ],
        Concern::LowEngagement => &[
            "Increased attention and focus on materials",
            "Active participation in learning activities",
            "Positive emotional responses to content",
        ],
        Concern::LowConfidence => &[
            "Improved posture and self-assured behavior",
            "Willingness to attempt challenging problems",
            "Positive self-statements about ability",
        ],
        Concern::OptimalState | Concern::NeutralState => &GENERIC_INDICATORS,
    };
    indicators.iter().map(|s| (*s).to_string()).collect()
}

//! Picks the single concern that drives the rest of the evaluation.

use emoradar_core::{Concern, EmotionScores};

const HIGH_FRUSTRATION: f64 = 7.0;
const HIGH_CONFUSION: f64 = 7.0;
const LOW_ENGAGEMENT: f64 = 4.0;
const LOW_CONFIDENCE: f64 = 4.0;

const OPTIMAL_ENGAGEMENT: f64 = 7.0;
const OPTIMAL_CONFIDENCE: f64 = 6.0;
const OPTIMAL_MAX_FRUSTRATION: f64 = 4.0;

/// Returns the distress concern with the highest weight, or `OptimalState` /
/// `NeutralState` when no distress predicate fires.
///
/// Weights are the raw score for "high" concerns and `10 - score` for "low"
/// ones. On equal weight the earlier predicate wins, in the order
/// frustration, confusion, engagement, confidence.
pub fn identify_concern(scores: &EmotionScores) -> Concern {
    let predicates = [
        (
            scores.frustration > HIGH_FRUSTRATION,
            Concern::HighFrustration,
            scores.frustration,
        ),
        (
            scores.confusion > HIGH_CONFUSION,
            Concern::HighConfusion,
            scores.confusion,
        ),
        (
            scores.engagement < LOW_ENGAGEMENT,
            Concern::LowEngagement,
            10.0 - scores.engagement,
        ),
        (
            scores.confidence < LOW_CONFIDENCE,
            Concern::LowConfidence,
            10.0 - scores.confidence,
        ),
    ];

    let mut strongest: Option<(Concern, f64)> = None;
    for (fired, concern, weight) in predicates {
        if !fired {
            continue;
        }
        match strongest {
            Some((_, best)) if weight <= best => {}
            _ => strongest = Some((concern, weight)),
        }
    }

    if let Some((concern, _)) = strongest {
        return concern;
    }

    if scores.engagement > OPTIMAL_ENGAGEMENT
        && scores.confidence > OPTIMAL_CONFIDENCE
        && scores.frustration < OPTIMAL_MAX_FRUSTRATION
    {
        Concern::OptimalState
    } else {
        Concern::NeutralState
    }
}

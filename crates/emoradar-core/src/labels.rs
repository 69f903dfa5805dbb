//! Categorical labels shared between the engine and its callers.

use crate::error::ScoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a label enum whose
/// serde names are the given strings.
macro_rules! label_impls {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ScoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ScoreError::UnknownLabel {
                        kind: $kind,
                        label: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// Where in a lesson the learner currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningPhase {
    Introduction,
    #[default]
    Practice,
    Application,
    Assessment,
    Review,
}

label_impls!(LearningPhase, "learning phase", {
    Introduction => "introduction",
    Practice => "practice",
    Application => "application",
    Assessment => "assessment",
    Review => "review",
});

/// The single emotional dimension judged most in need of attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    HighFrustration,
    HighConfusion,
    LowEngagement,
    LowConfidence,
    OptimalState,
    NeutralState,
}

label_impls!(Concern, "concern", {
    HighFrustration => "high_frustration",
    HighConfusion => "high_confusion",
    LowEngagement => "low_engagement",
    LowConfidence => "low_confidence",
    OptimalState => "optimal_state",
    NeutralState => "neutral_state",
});

/// Severity grade. Ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

label_impls!(UrgencyLevel, "urgency", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

/// Category of remedial strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterventionType {
    /// Stop the current activity.
    Immediate,
    /// Modify the current approach.
    Adaptive,
    /// Provide additional support.
    Supportive,
    /// Boost confidence or engagement.
    Motivational,
    /// Address cognitive load.
    Cognitive,
}

label_impls!(InterventionType, "intervention type", {
    Immediate => "immediate",
    Adaptive => "adaptive",
    Supportive => "supportive",
    Motivational => "motivational",
    Cognitive => "cognitive",
});

impl InterventionType {
    /// Name with a leading capital, as used in explanations ("Adaptive").
    pub fn title(self) -> &'static str {
        match self {
            InterventionType::Immediate => "Immediate",
            InterventionType::Adaptive => "Adaptive",
            InterventionType::Supportive => "Supportive",
            InterventionType::Motivational => "Motivational",
            InterventionType::Cognitive => "Cognitive",
        }
    }
}

//! Strategy catalog: concern → intervention type → candidate action phrases.
//!
//! The built-in catalog is assembled once from static tables and shared via
//! [`Arc`]. Replacement catalogs (e.g. loaded from a JSON file) are validated
//! before use and installed as a whole through [`CatalogHandle::swap`], so a
//! reader always sees either the old or the new table.

use crate::error::{EngineError, Result};
use emoradar_core::{Concern, InterventionType, LearningPhase};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

type StaticEntry = (InterventionType, &'static [&'static str]);

// Declaration order matters: when the urgency-chosen type is missing for a
// concern, the first entry listed here is used.
const BUILTIN: &[(Concern, &[StaticEntry])] = &[
    (
        Concern::HighFrustration,
        &[
            (
                InterventionType::Immediate,
                &[
                    "Take a 5-minute mindful breathing break",
                    "Step away and do light physical activity",
                    "Switch to a completely different subject for 10 minutes",
                    "Talk through the problem out loud or with someone",
                ],
            ),
            (
                InterventionType::Adaptive,
                &[
                    "Break the current problem into smaller, manageable steps",
                    "Use visual aids or diagrams to represent the concept",
                    "Find real-world analogies that relate to your experience",
                    "Try working backwards from the solution",
                ],
            ),
            (
                InterventionType::Supportive,
                &[
                    "Access additional examples of similar problems",
                    "Watch explanatory videos on the topic",
                    "Join a study group or find a learning partner",
                    "Schedule time with a tutor or instructor",
                ],
            ),
        ],
    ),
    (
        Concern::HighConfusion,
        &[
            (
                InterventionType::Cognitive,
                &[
                    "Create a concept map to organize related ideas",
                    "Write a summary of what you do understand so far",
                    "Identify specific points of confusion to focus on",
                    "Use the 'explain it to a 5-year-old' technique",
                ],
            ),
            (
                InterventionType::Adaptive,
                &[
                    "Return to prerequisite concepts and review",
                    "Approach the topic from a different angle or method",
                    "Use multiple learning modalities (visual, audio, kinesthetic)",
                    "Practice with easier examples before tackling hard ones",
                ],
            ),
            (
                InterventionType::Supportive,
                &[
                    "Seek clarification on confusing terminology",
                    "Find additional resources with different explanations",
                    "Ask specific questions rather than 'I don't get it'",
                    "Work with examples that build complexity gradually",
                ],
            ),
        ],
    ),
    (
        Concern::LowEngagement,
        &[
            (
                InterventionType::Motivational,
                &[
                    "Connect the material to your personal interests or goals",
                    "Set small, achievable milestones with rewards",
                    "Find the 'why' behind what you're learning",
                    "Challenge yourself with a fun, related puzzle",
                ],
            ),
            (
                InterventionType::Adaptive,
                &[
                    "Switch to more interactive learning methods",
                    "Incorporate gamification or competition elements",
                    "Use multimedia content (videos, podcasts, apps)",
                    "Apply learning through hands-on projects",
                ],
            ),
            (
                InterventionType::Supportive,
                &[
                    "Study with peers or in a group setting",
                    "Change your learning environment for freshness",
                    "Set shorter study sessions with clear objectives",
                    "Track progress visually to see improvement",
                ],
            ),
        ],
    ),
    (
        Concern::LowConfidence,
        &[
            (
                InterventionType::Motivational,
                &[
                    "Review recent successes and progress made",
                    "Start with easier problems to build momentum",
                    "Focus on effort and improvement rather than perfection",
                    "Remind yourself that struggle is part of learning",
                ],
            ),
            (
                InterventionType::Supportive,
                &[
                    "Practice positive self-talk and growth mindset",
                    "Break challenges into very small, manageable pieces",
                    "Celebrate small wins and incremental progress",
                    "Seek encouragement from mentors or study partners",
                ],
            ),
            (
                InterventionType::Adaptive,
                &[
                    "Use scaffolding techniques with guided practice",
                    "Work with templates or structured approaches",
                    "Practice similar problems before trying new ones",
                    "Build confidence with mastery-based learning",
                ],
            ),
        ],
    ),
    (
        Concern::OptimalState,
        &[
            (
                InterventionType::Adaptive,
                &[
                    "Increase challenge level to maintain optimal difficulty",
                    "Explore advanced applications of current concepts",
                    "Teach the concept to someone else to deepen understanding",
                    "Connect current learning to broader knowledge network",
                ],
            ),
            (
                InterventionType::Supportive,
                &[
                    "Document insights and breakthrough moments",
                    "Apply learning to creative or novel problems",
                    "Explore related topics that spark curiosity",
                    "Prepare to help others who might be struggling",
                ],
            ),
        ],
    ),
];

/// Candidate actions for one intervention type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyEntry {
    pub intervention: InterventionType,
    pub actions: Vec<String>,
}

/// All strategies for one concern, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcernStrategies {
    pub concern: Concern,
    pub strategies: Vec<StrategyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyCatalog {
    pub concerns: Vec<ConcernStrategies>,
}

impl StrategyCatalog {
    /// The built-in catalog, constructed on first use and shared afterwards.
    pub fn builtin() -> Arc<StrategyCatalog> {
        static BUILTIN_CATALOG: OnceLock<Arc<StrategyCatalog>> = OnceLock::new();
        Arc::clone(BUILTIN_CATALOG.get_or_init(|| Arc::new(Self::from_static(BUILTIN))))
    }

    fn from_static(table: &[(Concern, &[StaticEntry])]) -> Self {
        let concerns = table
            .iter()
            .map(|(concern, entries)| ConcernStrategies {
                concern: *concern,
                strategies: entries
                    .iter()
                    .map(|(intervention, actions)| StrategyEntry {
                        intervention: *intervention,
                        actions: actions.iter().map(|a| (*a).to_string()).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { concerns }
    }

    /// Parses and validates a catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: StrategyCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects catalogs that could make strategy selection ambiguous or empty.
    pub fn validate(&self) -> Result<()> {
        if self.concerns.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        let mut seen_concerns = HashSet::new();
        for entry in &self.concerns {
            let concern = entry.concern;
            if !seen_concerns.insert(concern) {
                return Err(EngineError::DuplicateConcern(concern));
            }
            if entry.strategies.is_empty() {
                return Err(EngineError::EmptyStrategy { concern });
            }

            let mut seen_types = HashSet::new();
            for strategy in &entry.strategies {
                let intervention = strategy.intervention;
                if !seen_types.insert(intervention) {
                    return Err(EngineError::DuplicateIntervention {
                        concern,
                        intervention,
                    });
                }
                if strategy.actions.is_empty() {
                    return Err(EngineError::EmptyActions {
                        concern,
                        intervention,
                    });
                }
                let mut seen_actions = HashSet::new();
                for action in &strategy.actions {
                    if !seen_actions.insert(action.as_str()) {
                        return Err(EngineError::DuplicateAction {
                            concern,
                            intervention,
                            action: action.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Strategies for `concern`, or `None` if the catalog has no entry.
    pub fn strategies_for(&self, concern: Concern) -> Option<&[StrategyEntry]> {
        self.concerns
            .iter()
            .find(|c| c.concern == concern)
            .map(|c| c.strategies.as_slice())
    }

    pub fn len(&self) -> usize {
        self.concerns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concerns.is_empty()
    }
}

/// Qualitative emphasis for a learning phase. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseModifier {
    pub focus: &'static str,
    pub patience_level: &'static str,
    pub complexity_reduction: &'static str,
}

const PHASE_MODIFIERS: &[(LearningPhase, PhaseModifier)] = &[
    (
        LearningPhase::Introduction,
        PhaseModifier {
            focus: "building foundation",
            patience_level: "high",
            complexity_reduction: "maximum",
        },
    ),
    (
        LearningPhase::Practice,
        PhaseModifier {
            focus: "skill development",
            patience_level: "medium",
            complexity_reduction: "moderate",
        },
    ),
    (
        LearningPhase::Application,
        PhaseModifier {
            focus: "real-world connection",
            patience_level: "medium",
            complexity_reduction: "minimal",
        },
    ),
    (
        LearningPhase::Assessment,
        PhaseModifier {
            focus: "performance optimization",
            patience_level: "low",
            complexity_reduction: "none",
        },
    ),
];

/// Emphasis for `phase`; `Review` has no entry.
pub fn phase_modifier(phase: LearningPhase) -> Option<&'static PhaseModifier> {
    PHASE_MODIFIERS
        .iter()
        .find(|(p, _)| *p == phase)
        .map(|(_, modifier)| modifier)
}

/// Shared, swappable reference to the active catalog.
#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<StrategyCatalog>>,
}

impl CatalogHandle {
    /// Validates `catalog` and wraps it; invalid catalogs never become active.
    pub fn new(catalog: Arc<StrategyCatalog>) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            current: RwLock::new(catalog),
        })
    }

    /// The catalog active right now. Callers keep this `Arc` for the whole
    /// evaluation, so a concurrent swap never changes it underneath them.
    pub fn snapshot(&self) -> Arc<StrategyCatalog> {
        // The lock only ever guards a pointer assignment, so a poisoned
        // lock still holds a complete catalog.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Validates `next` and installs it, returning the previous catalog.
    pub fn swap(&self, next: StrategyCatalog) -> Result<Arc<StrategyCatalog>> {
        next.validate()?;
        let next = Arc::new(next);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let previous = std::mem::replace(&mut *guard, next);
        info_event!("strategy catalog swapped ({} concerns)", guard.len());
        Ok(previous)
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self {
            current: RwLock::new(StrategyCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid_and_shared() {
        let a = StrategyCatalog::builtin();
        let b = StrategyCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        a.validate().expect("builtin catalog validates");
        assert_eq!(a.len(), 5);
        assert!(a.strategies_for(Concern::NeutralState).is_none());
    }

    #[test]
    fn declaration_order_is_preserved() {
        let catalog = StrategyCatalog::builtin();
        let confusion = catalog
            .strategies_for(Concern::HighConfusion)
            .expect("confusion entry");
        assert_eq!(confusion[0].intervention, InterventionType::Cognitive);
        let confidence = catalog
            .strategies_for(Concern::LowConfidence)
            .expect("confidence entry");
        assert_eq!(confidence[0].intervention, InterventionType::Motivational);
    }

    #[test]
    fn json_export_reloads_identically() {
        let catalog = StrategyCatalog::builtin();
        let json = catalog.to_json_pretty().expect("export");
        let reloaded = StrategyCatalog::from_json(&json).expect("reload");
        assert_eq!(*catalog, reloaded);
    }

    #[test]
    fn validation_rejects_bad_catalogs() {
        assert!(matches!(
            StrategyCatalog::from_json(r#"{"concerns": []}"#),
            Err(EngineError::EmptyCatalog)
        ));
        assert!(matches!(
            StrategyCatalog::from_json(
                r#"{"concerns": [{"concern": "low_engagement", "strategies": []}]}"#
            ),
            Err(EngineError::EmptyStrategy { .. })
        ));
        assert!(matches!(
            StrategyCatalog::from_json(
                r#"{"concerns": [{"concern": "low_engagement", "strategies": [
                    {"intervention": "adaptive", "actions": ["a", "a"]}
                ]}]}"#
            ),
            Err(EngineError::DuplicateAction { .. })
        ));
        assert!(matches!(
            StrategyCatalog::from_json(
                r#"{"concerns": [{"concern": "low_engagement", "strategies": [
                    {"intervention": "adaptive", "actions": []}
                ]}]}"#
            ),
            Err(EngineError::EmptyActions { .. })
        ));
        assert!(matches!(
            StrategyCatalog::from_json("not json"),
            Err(EngineError::Catalog(_))
        ));
    }

    #[test]
    fn swap_replaces_whole_table() {
        let handle = CatalogHandle::default();
        let before = handle.snapshot();

        let replacement = StrategyCatalog::from_json(
            r#"{"concerns": [{"concern": "high_frustration", "strategies": [
                {"intervention": "supportive", "actions": ["Pause and stretch"]}
            ]}]}"#,
        )
        .expect("replacement parses");
        let previous = handle.swap(replacement).expect("swap");

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.len(), 5);
        assert_eq!(handle.snapshot().len(), 1);
    }

    #[test]
    fn invalid_swap_keeps_current() {
        let handle = CatalogHandle::default();
        let err = handle
            .swap(StrategyCatalog { concerns: vec![] })
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyCatalog));
        assert_eq!(handle.snapshot().len(), 5);
    }

    #[test]
    fn handle_rejects_unvalidated_catalog() {
        let catalog = StrategyCatalog {
            concerns: vec![ConcernStrategies {
                concern: Concern::LowConfidence,
                strategies: vec![],
            }],
        };
        assert!(matches!(
            CatalogHandle::new(Arc::new(catalog)),
            Err(EngineError::EmptyStrategy { .. })
        ));
        assert!(CatalogHandle::new(StrategyCatalog::builtin()).is_ok());
    }

    #[test]
    fn review_phase_has_no_modifier() {
        assert!(phase_modifier(LearningPhase::Review).is_none());
        let intro = phase_modifier(LearningPhase::Introduction).expect("intro modifier");
        assert_eq!(intro.focus, "building foundation");
    }
}

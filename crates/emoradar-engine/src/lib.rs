//! Entscheidungs-Engine für Lern-Interventionen.
//!
//! Die [`InterventionEngine`] bildet einen Emotions-Vektor ([`EmotionScores`])
//! auf eine [`Recommendation`] ab: welches Anliegen, wie dringend, welche
//! konkreten Schritte, wann, und mit welcher groben Erfolgsaussicht. Die
//! Auswertung ist zustandslos; der einzige Zufall ist die Auswahl unter
//! gleichwertigen Formulierungen und wird über eine injizierbare
//! Zufallsquelle gezogen.

#[macro_use]
mod telemetry;

pub mod catalog;
pub mod concern;
pub mod error;
pub mod outcome;
pub mod strategy;
pub mod timing;
pub mod urgency;

pub use catalog::{phase_modifier, CatalogHandle, PhaseModifier, StrategyCatalog};
pub use concern::identify_concern;
pub use error::{EngineError, Result};
pub use outcome::{improvement_factor, predict_outcome, predict_outcome_for_name};
pub use strategy::{select_strategy, StrategyChoice};
pub use timing::{compute_timing, compute_timing_for_label};
pub use urgency::grade_urgency;

use emoradar_core::{EmotionScores, LearningPhase, Recommendation};
use rand::Rng;
use std::sync::Arc;

/// Zustandslose Engine über einem austauschbaren Strategie-Katalog.
///
/// Die Engine ist `Send + Sync` und kann von mehreren Threads gleichzeitig
/// genutzt werden; jede Auswertung arbeitet auf einem Snapshot des Katalogs.
#[derive(Debug, Default)]
pub struct InterventionEngine {
    catalog: CatalogHandle,
}

impl InterventionEngine {
    /// Engine mit dem eingebauten Katalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine mit eigenem Katalog; der Katalog wird vorher validiert.
    pub fn with_catalog(catalog: Arc<StrategyCatalog>) -> Result<Self> {
        Ok(Self {
            catalog: CatalogHandle::new(catalog)?,
        })
    }

    /// Der aktuell aktive Katalog.
    pub fn catalog(&self) -> Arc<StrategyCatalog> {
        self.catalog.snapshot()
    }

    /// Ersetzt den Katalog atomar; laufende Auswertungen sehen weiter den alten.
    pub fn swap_catalog(&self, next: StrategyCatalog) -> Result<Arc<StrategyCatalog>> {
        self.catalog.swap(next)
    }

    /// Wertet `scores` mit dem thread-lokalen Zufallsgenerator aus.
    pub fn analyze_intervention_need(
        &self,
        scores: &EmotionScores,
        phase: Option<LearningPhase>,
    ) -> Recommendation {
        self.analyze_with_rng(scores, phase, &mut rand::thread_rng())
    }

    /// Wertet `scores` mit der übergebenen Zufallsquelle aus.
    ///
    /// Reihenfolge: Anliegen → Dringlichkeit → Strategie → Timing → Prognose.
    /// Jeder Schritt nutzt nur bereits berechnete Werte, so dass etwa die
    /// Prognose immer zum gemeldeten Interventionstyp passt.
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        scores: &EmotionScores,
        phase: Option<LearningPhase>,
        rng: &mut R,
    ) -> Recommendation {
        for (field, value) in scores.out_of_range() {
            warn_event!("score '{}' outside 0..=10: {}", field, value);
        }

        let phase = phase.unwrap_or_default();
        let catalog = self.catalog.snapshot();

        let concern = identify_concern(scores);
        let urgency = grade_urgency(scores);
        let choice = select_strategy(&catalog, concern, urgency, phase, rng);
        let timing = compute_timing(urgency);
        let predicted_outcome = predict_outcome(choice.intervention);

        #[cfg(feature = "telemetry")]
        tracing::debug!(
            concern = %concern,
            urgency = %urgency,
            intervention = %choice.intervention,
            phase = %phase,
            "decision"
        );

        Recommendation {
            primary_concern: concern,
            urgency_level: urgency,
            intervention_type: choice.intervention,
            recommended_actions: choice.actions,
            timing,
            explanation: choice.explanation,
            success_indicators: choice.success_indicators,
            learning_phase: phase,
            predicted_outcome,
        }
    }
}

//! Adapter für die Ausgabe des externen Emotions-Detektors.
//!
//! Dieses Modul definiert die [`EmotionReading`], die das aufbereitete
//! Ergebnis einer Detektor-Antwort darstellt, sowie das [`ScoreAdapter`]-Trait,
//! über das sich die Quelle der Scores austauschen lässt. Die Engine selbst
//! kennt nur [`EmotionScores`]; wie diese zustande kommen, entscheidet der
//! Adapter.

use crate::error::{value_kind, Result, ScoreError};
use crate::scores::EmotionScores;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_ACTION: &str = "Continue monitoring";
const DEFAULT_STATE: &str = "neutral";
const FALLBACK_ACTION: &str = "Unable to analyze - please ensure clear image";
const FALLBACK_STATE: &str = "unknown";

/// Grobe Vorab-Einstufung des Detektors, unabhängig von der Engine-Dringlichkeit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingPriority {
    Low,
    Medium,
    High,
}

/// Eine validierte und angereicherte Detektor-Antwort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    /// Die numerischen Scores; `overall_wellbeing` ist immer gesetzt.
    #[serde(flatten)]
    pub scores: EmotionScores,
    /// Ob der Detektor selbst eine Intervention für nötig hält.
    pub intervention_needed: bool,
    /// Freitext-Empfehlung des Detektors.
    pub suggested_action: String,
    /// Ein-Wort-Zusammenfassung des Zustands (z. B. "focused").
    pub emotional_state: String,
    pub intervention_priority: ReadingPriority,
}

impl EmotionReading {
    /// Baut eine Reading aus einem JSON-Objekt und ergänzt fehlende Felder.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or(ScoreError::NotAnObject {
            found: value_kind(value),
        })?;
        let scores = EmotionScores::from_value(value)?;

        let intervention_needed = obj
            .get("intervention_needed")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let suggested_action = obj
            .get("suggested_action")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ACTION)
            .to_string();
        let emotional_state = obj
            .get("emotional_state")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_STATE)
            .to_string();

        Ok(Self::enhance(
            scores,
            intervention_needed,
            suggested_action,
            emotional_state,
        ))
    }

    /// Neutrale Reading für den Fall, dass die Detektor-Antwort unbrauchbar ist.
    pub fn fallback() -> Self {
        Self {
            scores: EmotionScores {
                overall_wellbeing: Some(0.0),
                ..EmotionScores::default()
            },
            intervention_needed: false,
            suggested_action: FALLBACK_ACTION.to_string(),
            emotional_state: FALLBACK_STATE.to_string(),
            intervention_priority: ReadingPriority::Low,
        }
    }

    fn enhance(
        mut scores: EmotionScores,
        mut intervention_needed: bool,
        suggested_action: String,
        emotional_state: String,
    ) -> Self {
        scores.overall_wellbeing = Some(overall_wellbeing(&scores));

        let intervention_priority =
            if scores.frustration > 7.0 || scores.confusion > 8.0 || scores.engagement < 3.0 {
                intervention_needed = true;
                ReadingPriority::High
            } else if scores.frustration > 5.0 || scores.confusion > 6.0 {
                ReadingPriority::Medium
            } else {
                ReadingPriority::Low
            };

        Self {
            scores,
            intervention_needed,
            suggested_action,
            emotional_state,
            intervention_priority,
        }
    }
}

impl Default for EmotionReading {
    fn default() -> Self {
        Self::enhance(
            EmotionScores::default(),
            false,
            DEFAULT_ACTION.to_string(),
            DEFAULT_STATE.to_string(),
        )
    }
}

/// Zusammengesetzter Wohlbefindens-Wert: positive minus negative Dimensionen, durch 5.
pub fn overall_wellbeing(scores: &EmotionScores) -> f64 {
    (scores.engagement + scores.confidence + scores.excitement
        - scores.frustration
        - scores.confusion)
        / 5.0
}

/// Austauschbare Quelle für Scores.
pub trait ScoreAdapter {
    fn read(&self, raw: &str) -> Result<EmotionReading>;
}

/// Liest die JSON-Antwort des Vision-Modells.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReadingAdapter;

impl ScoreAdapter for JsonReadingAdapter {
    fn read(&self, raw: &str) -> Result<EmotionReading> {
        let value: Value = serde_json::from_str(raw.trim())?;
        EmotionReading::from_value(&value)
    }
}

/// Liest über `adapter`, fällt bei unlesbarem Text auf [`EmotionReading::fallback`] zurück.
///
/// Ein falscher Score-Typ wird nie verschluckt, sondern als Fehler gemeldet.
/// Im Fallback-Fall wird der ursprüngliche Fehler zum Protokollieren mitgegeben.
pub fn read_or_fallback<A: ScoreAdapter + ?Sized>(
    adapter: &A,
    raw: &str,
) -> Result<(EmotionReading, Option<ScoreError>)> {
    match adapter.read(raw) {
        Ok(reading) => Ok((reading, None)),
        Err(e @ (ScoreError::Malformed(_) | ScoreError::NotAnObject { .. })) => {
            Ok((EmotionReading::fallback(), Some(e)))
        }
        Err(e) => Err(e),
    }
}

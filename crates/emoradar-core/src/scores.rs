//! The normalized score structure every engine evaluation consumes.
//!
//! Scores are conventionally on a 0–10 scale but are never clamped here.
//! Missing fields default to [`NEUTRAL_SCORE`]; a present field that is not a
//! number is rejected with [`ScoreError::InvalidScoreType`].

use crate::error::{value_kind, Result, ScoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value substituted for any score the upstream detector did not deliver.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Expected range of a single score. Values outside are tolerated.
pub const SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Names of the six score fields, in declaration order.
pub const SCORE_FIELDS: [&str; 6] = [
    "frustration",
    "confusion",
    "engagement",
    "excitement",
    "confidence",
    "learning_readiness",
];

/// A learner's momentary emotional-state vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Value>")]
pub struct EmotionScores {
    pub frustration: f64,
    pub confusion: f64,
    pub engagement: f64,
    pub excitement: f64,
    pub confidence: f64,
    pub learning_readiness: f64,
    /// Derived composite, any sign. Carried through but not used for decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_wellbeing: Option<f64>,
}

impl Default for EmotionScores {
    fn default() -> Self {
        Self {
            frustration: NEUTRAL_SCORE,
            confusion: NEUTRAL_SCORE,
            engagement: NEUTRAL_SCORE,
            excitement: NEUTRAL_SCORE,
            confidence: NEUTRAL_SCORE,
            learning_readiness: NEUTRAL_SCORE,
            overall_wellbeing: None,
        }
    }
}

impl EmotionScores {
    /// Builds scores from an upstream key/value mapping.
    ///
    /// Keys other than the score fields are ignored. `null` counts as absent.
    pub fn from_map(map: &BTreeMap<String, Value>) -> Result<Self> {
        let field = |name: &str| -> Result<f64> {
            Ok(numeric_field(map, name)?.unwrap_or(NEUTRAL_SCORE))
        };
        Ok(Self {
            frustration: field("frustration")?,
            confusion: field("confusion")?,
            engagement: field("engagement")?,
            excitement: field("excitement")?,
            confidence: field("confidence")?,
            learning_readiness: field("learning_readiness")?,
            overall_wellbeing: numeric_field(map, "overall_wellbeing")?,
        })
    }

    /// Like [`EmotionScores::from_map`], for an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(obj) => {
                let map: BTreeMap<String, Value> =
                    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
                Self::from_map(&map)
            }
            other => Err(ScoreError::NotAnObject {
                found: value_kind(other),
            }),
        }
    }

    /// The six score fields paired with their names.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            (SCORE_FIELDS[0], self.frustration),
            (SCORE_FIELDS[1], self.confusion),
            (SCORE_FIELDS[2], self.engagement),
            (SCORE_FIELDS[3], self.excitement),
            (SCORE_FIELDS[4], self.confidence),
            (SCORE_FIELDS[5], self.learning_readiness),
        ]
    }

    /// Fields whose value lies outside [`SCORE_RANGE`] (or is not finite).
    pub fn out_of_range(&self) -> Vec<(&'static str, f64)> {
        self.fields()
            .into_iter()
            .filter(|(_, v)| !SCORE_RANGE.contains(v))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, Value>> for EmotionScores {
    type Error = ScoreError;

    fn try_from(map: BTreeMap<String, Value>) -> Result<Self> {
        Self::from_map(&map)
    }
}

fn numeric_field(map: &BTreeMap<String, Value>, name: &str) -> Result<Option<f64>> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| ScoreError::InvalidScoreType {
                field: name.to_string(),
                found: "number",
            }),
        Some(other) => Err(ScoreError::InvalidScoreType {
            field: name.to_string(),
            found: value_kind(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_are_neutral() {
        let scores: EmotionScores = serde_json::from_value(json!({})).expect("empty map");
        assert_eq!(scores, EmotionScores::default());
        assert!(scores.overall_wellbeing.is_none());
    }

    #[test]
    fn partial_map_keeps_given_values() {
        let scores: EmotionScores =
            serde_json::from_value(json!({"frustration": 9, "engagement": 6.5, "confusion": null}))
                .expect("partial map");
        assert!((scores.frustration - 9.0).abs() < f64::EPSILON);
        assert!((scores.engagement - 6.5).abs() < f64::EPSILON);
        assert!((scores.confusion - NEUTRAL_SCORE).abs() < f64::EPSILON);
    }

    #[test]
    fn non_score_keys_are_ignored() {
        let scores = EmotionScores::from_value(&json!({
            "frustration": 2,
            "intervention_needed": true,
            "suggested_action": "keep going"
        }))
        .expect("extra keys tolerated");
        assert!((scores.frustration - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn string_score_is_rejected() {
        let err = EmotionScores::from_value(&json!({"confidence": "high"})).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::InvalidScoreType { ref field, found: "string" } if field == "confidence"
        ));
        assert!(err.to_string().contains("invalid score type"));
    }

    #[test]
    fn boolean_score_is_rejected_through_serde() {
        let err = serde_json::from_value::<EmotionScores>(json!({"engagement": false})).unwrap_err();
        assert!(err.to_string().contains("invalid score type for 'engagement'"));
    }

    #[test]
    fn out_of_range_is_reported_not_clamped() {
        let scores = EmotionScores {
            frustration: 12.0,
            engagement: -1.0,
            ..EmotionScores::default()
        };
        let names: Vec<_> = scores.out_of_range().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["frustration", "engagement"]);
        assert!((scores.frustration - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_object_is_rejected() {
        let err = EmotionScores::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ScoreError::NotAnObject { found: "array" }));
    }
}

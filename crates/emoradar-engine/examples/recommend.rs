use std::io::{self, Read};

use emoradar_core::{EmotionScores, LearningPhase, Recommendation};
use emoradar_engine::InterventionEngine;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct RecommendationRecord {
    engine: String,
    scores: EmotionScores,
    recommendation: Recommendation,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    // Accepts either a bare score map or `{"scores": {...}, "phase": "..."}`.
    let (scores, phase) = if input.trim().is_empty() {
        (EmotionScores::default(), None)
    } else {
        match serde_json::from_str::<Value>(&input)? {
            Value::Object(mut obj) if obj.contains_key("scores") => {
                let scores = obj
                    .remove("scores")
                    .map(|v| EmotionScores::from_value(&v))
                    .transpose()?
                    .unwrap_or_default();
                let phase = obj
                    .remove("phase")
                    .and_then(|v| v.as_str().map(str::parse::<LearningPhase>))
                    .transpose()?;
                (scores, phase)
            }
            other => (EmotionScores::from_value(&other)?, None),
        }
    };

    let engine = InterventionEngine::new();
    let recommendation = engine.analyze_intervention_need(&scores, phase);

    let record = RecommendationRecord {
        engine: "emoradar-engine".to_string(),
        scores,
        recommendation,
    };

    serde_json::to_writer_pretty(io::stdout(), &record)?;
    println!();

    Ok(())
}

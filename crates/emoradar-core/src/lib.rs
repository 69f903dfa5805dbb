pub mod error;
pub mod labels;
pub mod reading;
pub mod recommendation;
pub mod scores;

pub use error::{Result, ScoreError};
pub use labels::{Concern, InterventionType, LearningPhase, UrgencyLevel};
pub use reading::{read_or_fallback, EmotionReading, JsonReadingAdapter, ReadingPriority, ScoreAdapter};
pub use recommendation::{PredictedOutcome, Recommendation, Timing};
pub use scores::{EmotionScores, NEUTRAL_SCORE, SCORE_FIELDS, SCORE_RANGE};

//! Urgency ladder, evaluated top-down; the first matching rung wins.
//!
//! Graded from the raw scores only, never from the selected concern.

use emoradar_core::{EmotionScores, UrgencyLevel};

pub fn grade_urgency(scores: &EmotionScores) -> UrgencyLevel {
    let EmotionScores {
        frustration,
        confusion,
        engagement,
        confidence,
        ..
    } = *scores;

    if frustration > 8.0 || confusion > 8.0 || engagement < 2.0 {
        UrgencyLevel::Critical
    } else if frustration > 6.0 || confusion > 6.0 || engagement < 4.0 {
        UrgencyLevel::High
    } else if frustration > 4.0 || confusion > 5.0 || engagement < 6.0 || confidence < 5.0 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

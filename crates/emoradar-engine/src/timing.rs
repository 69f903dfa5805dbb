use emoradar_core::{Timing, UrgencyLevel};

struct TimingRow {
    when: &'static str,
    duration: &'static str,
    frequency: &'static str,
}

const CRITICAL: TimingRow = TimingRow {
    when: "immediately",
    duration: "5-10 minutes",
    frequency: "as needed",
};
const HIGH: TimingRow = TimingRow {
    when: "within next 2-3 minutes",
    duration: "3-5 minutes",
    frequency: "monitor every 5 minutes",
};
const MEDIUM: TimingRow = TimingRow {
    when: "at next natural break",
    duration: "2-3 minutes",
    frequency: "check every 10 minutes",
};
const LOW: TimingRow = TimingRow {
    when: "end of current activity",
    duration: "1-2 minutes",
    frequency: "monitor every 15 minutes",
};

/// When, how long and how often to intervene, keyed by urgency alone.
pub fn compute_timing(urgency: UrgencyLevel) -> Timing {
    let row = match urgency {
        UrgencyLevel::Critical => &CRITICAL,
        UrgencyLevel::High => &HIGH,
        UrgencyLevel::Medium => &MEDIUM,
        UrgencyLevel::Low => &LOW,
    };
    Timing {
        when: row.when.to_string(),
        duration: row.duration.to_string(),
        frequency: row.frequency.to_string(),
    }
}

/// Timing for an urgency given by name. Unknown names get the medium row.
pub fn compute_timing_for_label(label: &str) -> Timing {
    compute_timing(label.parse().unwrap_or(UrgencyLevel::Medium))
}

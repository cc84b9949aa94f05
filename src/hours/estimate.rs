use crate::config::RunConfig;
use chrono::{DateTime, Utc};

/// Estimate hours worked from one author's commit timestamps.
///
/// Commits closer together than `max_commit_diff_minutes` are treated as one
/// continuous session and their gaps are credited in full. A larger gap ends
/// the session; the new session starts with at most
/// `first_commit_add_minutes` of credit, and the very first commit gets the
/// same bonus. The result depends only on the sorted sequence, so input
/// order does not matter.
pub fn estimate_hours(timestamps: &[DateTime<Utc>], config: &RunConfig) -> f64 {
    if timestamps.is_empty() {
        return 0.0;
    }

    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    let threshold = config.max_commit_diff_minutes as f64;
    let bonus = config.first_commit_add_minutes as f64;

    let mut minutes = bonus;
    for pair in sorted.windows(2) {
        let diff = (pair[1] - pair[0]).num_seconds() as f64 / 60.0;
        if diff < threshold {
            minutes += diff;
        } else {
            minutes += diff.min(bonus);
        }
    }

    minutes / 60.0
}

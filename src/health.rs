use std::collections::BTreeMap;

use crate::models::{FunctionCode, HealthStatus};

/// Minimum summed score for a function to grade `O`.
const HEALTHY_MIN: i32 = 2;
/// Minimum summed score for a function to grade `o`.
const STRAINED_MIN: i32 = 1;

/// Grade raw per-function health scores into the `O` / `o` / `x` summary.
///
/// Independent of the ordering pipeline. Functions with no recorded score
/// count as zero, so the summary always covers all eight codes.
pub fn health_status(
    scores: &BTreeMap<FunctionCode, i32>,
) -> BTreeMap<FunctionCode, HealthStatus> {
    FunctionCode::ALL
        .iter()
        .map(|&code| {
            let score = scores.get(&code).copied().unwrap_or(0);
            (code, grade(score))
        })
        .collect()
}

fn grade(score: i32) -> HealthStatus {
    if score >= HEALTHY_MIN {
        HealthStatus::Healthy
    } else if score >= STRAINED_MIN {
        HealthStatus::Strained
    } else {
        HealthStatus::Unhealthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_follow_the_thresholds() {
        assert_eq!(grade(3), HealthStatus::Healthy);
        assert_eq!(grade(2), HealthStatus::Healthy);
        assert_eq!(grade(1), HealthStatus::Strained);
        assert_eq!(grade(0), HealthStatus::Unhealthy);
        assert_eq!(grade(-1), HealthStatus::Unhealthy);
    }

    #[test]
    fn summary_covers_all_eight_functions() {
        let scores = BTreeMap::from([(FunctionCode::Ni, 2), (FunctionCode::Fe, 1)]);
        let summary = health_status(&scores);

        assert_eq!(summary.len(), 8);
        assert_eq!(summary[&FunctionCode::Ni], HealthStatus::Healthy);
        assert_eq!(summary[&FunctionCode::Fe], HealthStatus::Strained);
        assert_eq!(summary[&FunctionCode::Se], HealthStatus::Unhealthy);
    }

    #[test]
    fn empty_scores_grade_everything_unhealthy() {
        let summary = health_status(&BTreeMap::new());
        assert!(summary
            .values()
            .all(|&status| status == HealthStatus::Unhealthy));
    }
}

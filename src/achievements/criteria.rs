// ABOUTME: Pure per-criterion evaluation over a workout history
// ABOUTME: Count, single-session, and cumulative scoring; streak stays inert
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use chrono::NaiveDate;

use crate::constants::progress;
use crate::models::{AchievementCriteria, WorkoutSession};

/// Result of scoring one criterion against a workout history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionOutcome {
    /// Whether the criterion is currently satisfied
    pub achieved: bool,
    /// Percent of the threshold satisfied, capped at 100
    pub progress: u8,
    /// Date the criterion was first satisfied, when derivable
    pub achieved_date: Option<NaiveDate>,
}

impl CriterionOutcome {
    /// Outcome for criteria that are never scored: streaks and kinds newer
    /// than this build
    #[must_use]
    pub const fn inert() -> Self {
        Self {
            achieved: false,
            progress: 0,
            achieved_date: None,
        }
    }
}

/// Score one criterion against the full workout history
///
/// Pure function of its inputs; malformed sessions contribute their
/// zero-values and can never fail the evaluation.
#[must_use]
pub fn evaluate_criteria(
    criteria: &AchievementCriteria,
    sessions: &[WorkoutSession],
) -> CriterionOutcome {
    match criteria {
        AchievementCriteria::Count { threshold } => evaluate_count(*threshold, sessions),
        AchievementCriteria::SingleSessionDuration { threshold_minutes } => {
            evaluate_single_session(*threshold_minutes, sessions)
        }
        AchievementCriteria::CumulativeDuration { threshold_minutes } => {
            evaluate_cumulative(*threshold_minutes, sessions)
        }
        // Streak has no evaluator yet. The criteria union is non_exhaustive,
        // so kinds newer than this build degrade the same way instead of
        // erroring.
        AchievementCriteria::Streak { .. } => CriterionOutcome::inert(),
    }
}

/// Percent of `threshold` covered by `value`, rounded and capped at 100
fn ratio_percent(value: f64, threshold: f64) -> u8 {
    if threshold <= 0.0 {
        // Catalog thresholds are positive; a degenerate one is trivially met.
        return progress::COMPLETE;
    }
    let percent = (value / threshold * 100.0).round();
    if percent.is_finite() {
        percent.clamp(0.0, f64::from(progress::COMPLETE)) as u8
    } else {
        0
    }
}

/// Sessions ordered by ascending date, undated sessions first
///
/// The sort is stable, so sessions sharing a date keep their input order and
/// repeated evaluations derive identical achieved dates.
fn sorted_ascending(sessions: &[WorkoutSession]) -> Vec<&WorkoutSession> {
    let mut ordered: Vec<&WorkoutSession> = sessions.iter().collect();
    ordered.sort_by_key(|s| s.date);
    ordered
}

fn evaluate_count(threshold: u32, sessions: &[WorkoutSession]) -> CriterionOutcome {
    let total = sessions.len();
    let achieved = total as u64 >= u64::from(threshold);
    let progress = ratio_percent(total as f64, f64::from(threshold));

    // The achieved date is that of the session which crossed the threshold:
    // the N-th session in ascending date order.
    let achieved_date = if achieved && threshold > 0 {
        sorted_ascending(sessions)
            .get(threshold as usize - 1)
            .and_then(|s| s.date)
    } else {
        None
    };

    CriterionOutcome {
        achieved,
        progress,
        achieved_date,
    }
}

fn evaluate_single_session(threshold_minutes: f64, sessions: &[WorkoutSession]) -> CriterionOutcome {
    let longest = sessions
        .iter()
        .map(WorkoutSession::sanitized_duration)
        .fold(0.0_f64, f64::max);
    let achieved = sessions
        .iter()
        .any(|s| s.sanitized_duration() >= threshold_minutes);

    // Earliest qualifying session: the date the milestone was actually
    // earned. Undated qualifying sessions still set `achieved` but cannot
    // supply a date.
    let achieved_date = sessions
        .iter()
        .filter(|s| s.sanitized_duration() >= threshold_minutes)
        .filter_map(|s| s.date)
        .min();

    CriterionOutcome {
        achieved,
        progress: ratio_percent(longest, threshold_minutes),
        achieved_date,
    }
}

fn evaluate_cumulative(threshold_minutes: f64, sessions: &[WorkoutSession]) -> CriterionOutcome {
    let mut running = 0.0_f64;
    let mut crossed_at: Option<NaiveDate> = None;
    let mut crossed = false;

    for session in sorted_ascending(sessions) {
        running += session.sanitized_duration();
        if !crossed && running >= threshold_minutes {
            crossed = true;
            crossed_at = session.date;
        }
    }

    CriterionOutcome {
        achieved: crossed,
        progress: ratio_percent(running, threshold_minutes),
        achieved_date: crossed_at,
    }
}

// ABOUTME: Achievement engine - evaluates the catalog and reconciles stored state
// ABOUTME: Read-all, compute, write-all; achievement is monotonic once persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridelog Fitness

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use super::catalog::AchievementCatalog;
use super::criteria::{evaluate_criteria, CriterionOutcome};
use crate::errors::AppResult;
use crate::models::{Achievement, AchievementDefinition, AchievementRecord, WorkoutSession};
use crate::storage::StorageProvider;

/// Evaluates the achievement catalog against a user's workout history
///
/// Each pass runs read-all-stored, compute, write-all, in that order. The
/// evaluation itself is a bounded in-memory computation; only the two
/// persistence steps do I/O, and their failures propagate to the caller
/// without retry. Concurrent passes for the same user are not coordinated:
/// the store's last-write-wins upsert plus the monotonic merge of booleans
/// recomputed from the same source data make concurrent writes converge.
pub struct AchievementEngine<S> {
    store: Arc<S>,
    catalog: AchievementCatalog,
}

impl<S: StorageProvider> AchievementEngine<S> {
    /// Engine over the process-wide default catalog
    pub fn new(store: Arc<S>) -> Self {
        Self::with_catalog(store, AchievementCatalog::global().clone())
    }

    /// Engine over an explicit catalog
    pub const fn with_catalog(store: Arc<S>, catalog: AchievementCatalog) -> Self {
        Self { store, catalog }
    }

    /// Catalog this engine evaluates
    #[must_use]
    pub const fn catalog(&self) -> &AchievementCatalog {
        &self.catalog
    }

    /// Evaluate every catalog definition for `user_id` against the supplied
    /// workout history, persist the merged result, and return the
    /// catalog-ordered achievement list
    ///
    /// Re-running with identical inputs produces identical stored state. A
    /// definition persisted as achieved stays achieved regardless of the
    /// current history.
    ///
    /// # Errors
    ///
    /// Returns a storage error when reading stored records or upserting the
    /// merged records fails; evaluation itself never fails.
    pub async fn user_achievements(
        &self,
        user_id: &str,
        workout_logs: &[WorkoutSession],
    ) -> AppResult<Vec<Achievement>> {
        let stored = self
            .store
            .achievement_records(user_id)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        let today = Utc::now().date_naive();
        let achievements: Vec<Achievement> = self
            .catalog
            .definitions()
            .iter()
            .map(|definition| {
                let computed = evaluate_criteria(&definition.criteria, workout_logs);
                merge(definition, computed, stored.get(&definition.id), today)
            })
            .collect();

        for achievement in &achievements {
            self.store
                .upsert_achievement_record(user_id, &AchievementRecord::from(achievement))
                .await
                .map_err(|e| e.with_user_id(user_id).with_resource_id(&achievement.id))?;
        }

        debug!(
            user.id = %user_id,
            sessions = workout_logs.len(),
            achieved = achievements.iter().filter(|a| a.achieved).count(),
            total = achievements.len(),
            "Achievement evaluation pass complete"
        );

        Ok(achievements)
    }
}

/// Merge a freshly computed outcome with the previously stored record
///
/// Achieved is the monotonic union of stored and computed state. The achieved
/// date keeps the stored date when present, falls back to the computed date,
/// and finally to the evaluation date so an achieved record always carries a
/// date. Progress is always the freshly computed value.
fn merge(
    definition: &AchievementDefinition,
    computed: CriterionOutcome,
    stored: Option<&AchievementRecord>,
    today: NaiveDate,
) -> Achievement {
    let previously_achieved = stored.is_some_and(|record| record.achieved);
    let achieved = previously_achieved || computed.achieved;

    let achieved_date = stored
        .and_then(|record| record.achieved_date)
        .or(computed.achieved_date)
        .or_else(|| achieved.then_some(today));

    Achievement {
        id: definition.id.clone(),
        title: definition.title.clone(),
        description: definition.description.clone(),
        icon: definition.icon,
        criteria: definition.criteria.clone(),
        achieved,
        achieved_date,
        progress: computed.progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AchievementCriteria, AchievementIcon};

    fn def(id: &str, criteria: AchievementCriteria) -> AchievementDefinition {
        AchievementDefinition {
            id: id.to_owned(),
            title: "Title".to_owned(),
            description: "Description".to_owned(),
            icon: AchievementIcon::Star,
            criteria,
        }
    }

    fn stored(achieved: bool, achieved_date: Option<NaiveDate>) -> AchievementRecord {
        AchievementRecord {
            id: "x".to_owned(),
            title: "Title".to_owned(),
            description: "Description".to_owned(),
            icon: AchievementIcon::Star,
            criteria: AchievementCriteria::Count { threshold: 1 },
            achieved,
            achieved_date,
            progress: 0,
        }
    }

    #[test]
    fn merge_keeps_stored_achievement_when_history_regresses() {
        let definition = def("d", AchievementCriteria::Count { threshold: 1 });
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let prior_date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let prior = stored(true, Some(prior_date));

        let merged = merge(&definition, CriterionOutcome::inert(), Some(&prior), today);

        assert!(merged.achieved);
        assert_eq!(merged.achieved_date, Some(prior_date));
        assert_eq!(merged.progress, 0);
    }

    #[test]
    fn merge_falls_back_to_evaluation_date() {
        let definition = def("d", AchievementCriteria::Count { threshold: 1 });
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        // Stored as achieved but with no date, and the current computation
        // derives none either: the record must still end up dated.
        let prior = stored(true, None);

        let merged = merge(&definition, CriterionOutcome::inert(), Some(&prior), today);

        assert!(merged.achieved);
        assert_eq!(merged.achieved_date, Some(today));
    }

    #[test]
    fn merge_leaves_unachieved_records_undated() {
        let definition = def("d", AchievementCriteria::Count { threshold: 5 });
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        let merged = merge(&definition, CriterionOutcome::inert(), None, today);

        assert!(!merged.achieved);
        assert_eq!(merged.achieved_date, None);
    }
}

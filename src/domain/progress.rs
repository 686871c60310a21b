//! Per-lesson completion records.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Progress domain entity.
///
/// At most one record exists per (user, lesson); writes go through the
/// store's upsert, so re-completing a lesson updates in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Set of lesson ids the user has completed, derived from a progress
/// snapshot. Only records with `completed == true` count.
#[derive(Debug, Clone, Default)]
pub struct CompletionSet(HashSet<Uuid>);

impl CompletionSet {
    pub fn from_records(records: &[Progress]) -> Self {
        Self(
            records
                .iter()
                .filter(|p| p.completed)
                .map(|p| p.lesson_id)
                .collect(),
        )
    }

    pub fn contains(&self, lesson_id: Uuid) -> bool {
        self.0.contains(&lesson_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Progress response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Progress> for ProgressResponse {
    fn from(progress: Progress) -> Self {
        Self {
            id: progress.id,
            lesson_id: progress.lesson_id,
            completed: progress.completed,
            completed_at: progress.completed_at,
            created_at: progress.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lesson_id: Uuid, completed: bool) -> Progress {
        Progress {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            lesson_id,
            completed,
            completed_at: completed.then(Utc::now),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn completion_set_ignores_incomplete_records() {
        let done = Uuid::new_v4();
        let pending = Uuid::new_v4();
        let set = CompletionSet::from_records(&[record(done, true), record(pending, false)]);

        assert!(set.contains(done));
        assert!(!set.contains(pending));
        assert_eq!(set.len(), 1);
    }
}

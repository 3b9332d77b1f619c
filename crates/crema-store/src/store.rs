//! Main store implementation.

use tokio::sync::RwLock;
use tracing::debug;

use crema_types::Shot;

use crate::error::{Error, Result};

/// Number of records returned when a caller does not constrain `list`.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Concurrent in-memory store for [`Shot`] records.
///
/// Records keep their insertion order, which for generated datasets is
/// ascending brew time. Every read hands out clones, so callers never
/// observe the lock.
#[derive(Debug, Default)]
pub struct ShotStore {
    shots: RwLock<Vec<Shot>>,
}

impl ShotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `shots`, preserving their order.
    pub fn with_shots(shots: Vec<Shot>) -> Self {
        Self {
            shots: RwLock::new(shots),
        }
    }

    /// Insert a record, replacing any existing record with the same id.
    ///
    /// Replacement happens in place, so an updated record keeps its
    /// position in the history. Returns the record as stored.
    pub async fn upsert(&self, shot: Shot) -> Shot {
        let mut shots = self.shots.write().await;
        if let Some(existing) = shots.iter_mut().find(|s| s.shot_id == shot.shot_id) {
            debug!("Replacing shot {}", shot.shot_id);
            *existing = shot.clone();
        } else {
            debug!("Storing shot {}", shot.shot_id);
            shots.push(shot.clone());
        }
        shot
    }

    /// Look up a record by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Shot> {
        let shots = self.shots.read().await;
        shots
            .iter()
            .find(|s| s.shot_id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Return up to `limit` records, newest first.
    ///
    /// A zero or negative limit falls back to [`DEFAULT_LIST_LIMIT`].
    pub async fn list(&self, limit: i64) -> Vec<Shot> {
        let limit = if limit <= 0 {
            DEFAULT_LIST_LIMIT
        } else {
            limit as usize
        };
        let shots = self.shots.read().await;
        shots.iter().rev().take(limit).cloned().collect()
    }

    /// Remove a record by id. Removing an absent id is a no-op.
    pub async fn delete(&self, id: &str) {
        let mut shots = self.shots.write().await;
        if let Some(index) = shots.iter().position(|s| s.shot_id == id) {
            shots.remove(index);
            debug!("Deleted shot {}", id);
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.shots.read().await.len()
    }

    /// True when the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.shots.read().await.is_empty()
    }

    /// Clone the full history in storage order.
    pub async fn snapshot(&self) -> Vec<Shot> {
        self.shots.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crema_types::ShotStatus;

    use super::*;

    fn create_test_shot(id: &str) -> Shot {
        Shot {
            shot_id: id.to_string(),
            brew_time: OffsetDateTime::from_unix_timestamp(1_722_499_200).unwrap(),
            machine_id: "nxlc-100".to_string(),
            user_id: "barista.alex".to_string(),
            software_bundle: "stable-1.5.0".to_string(),
            coffee_type: "espresso".to_string(),
            recipe_id: "rx-101".to_string(),
            grind_size_actual: 34,
            grind_size_target: 35,
            dose_grams: 19.5,
            dose_target_grams: 19.0,
            brew_time_seconds: 27.5,
            peak_pressure_bar: 8.2,
            last_status: ShotStatus::Ok,
        }
    }

    #[tokio::test]
    async fn test_upsert_inserts() {
        let store = ShotStore::new();
        assert!(store.is_empty().await);

        let stored = store.upsert(create_test_shot("a")).await;
        assert_eq!(stored.shot_id, "a");
        assert_eq!(store.len().await, 1);

        let found = store.find_by_id("a").await.unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let store = ShotStore::new();
        store.upsert(create_test_shot("a")).await;
        store.upsert(create_test_shot("b")).await;

        let mut updated = create_test_shot("a");
        updated.dose_grams = 21.0;
        store.upsert(updated).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.find_by_id("a").await.unwrap().dose_grams, 21.0);

        // Replacement did not move "a" to the end of the history.
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot[0].shot_id, "a");
        assert_eq!(snapshot[1].shot_id, "b");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let store = ShotStore::new();
        let err = store.find_by_id("ghost").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = ShotStore::new();
        store.upsert(create_test_shot("a")).await;
        store.upsert(create_test_shot("b")).await;
        store.upsert(create_test_shot("c")).await;

        let listed = store.list(10).await;
        let ids: Vec<&str> = listed.iter().map(|s| s.shot_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_list_non_positive_limit_uses_default() {
        let store = ShotStore::new();
        for i in 0..150 {
            store.upsert(create_test_shot(&format!("shot-{i}"))).await;
        }

        assert_eq!(store.list(0).await.len(), DEFAULT_LIST_LIMIT);
        assert_eq!(store.list(-5).await.len(), DEFAULT_LIST_LIMIT);
    }

    #[tokio::test]
    async fn test_list_oversized_limit() {
        let store = ShotStore::new();
        store.upsert(create_test_shot("a")).await;
        store.upsert(create_test_shot("b")).await;

        assert_eq!(store.list(50).await.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = ShotStore::new();
        store.upsert(create_test_shot("a")).await;

        store.delete("a").await;
        assert!(store.is_empty().await);

        // Deleting again, or deleting an unknown id, is silently fine.
        store.delete("a").await;
        store.delete("ghost").await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_with_shots_preserves_order() {
        let store = ShotStore::with_shots(vec![create_test_shot("a"), create_test_shot("b")]);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].shot_id, "a");
        assert_eq!(snapshot[1].shot_id, "b");
    }
}

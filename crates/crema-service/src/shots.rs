//! Query layer over the shot history.

use std::sync::Arc;

use crema_core::{DailyStats, OverviewStats, daily, overview};
use crema_store::{Result, ShotStore};
use crema_types::Shot;

/// Read and write access to the shot history, plus derived statistics.
///
/// Cheap to clone; every clone shares the same underlying store.
#[derive(Debug, Clone)]
pub struct ShotService {
    store: Arc<ShotStore>,
}

impl ShotService {
    /// Create a service over an existing store.
    pub fn new(store: Arc<ShotStore>) -> Self {
        Self { store }
    }

    /// List recent shots, newest first.
    ///
    /// Non-positive limits fall back to the store's default window.
    pub async fn list(&self, limit: i64) -> Vec<Shot> {
        self.store.list(limit).await
    }

    /// Fetch a single shot by id.
    pub async fn get(&self, id: &str) -> Result<Shot> {
        self.store.find_by_id(id).await
    }

    /// Insert or replace a shot, returning the stored record.
    pub async fn create(&self, shot: Shot) -> Shot {
        self.store.upsert(shot).await
    }

    /// Delete a shot by id. Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) {
        self.store.delete(id).await
    }

    /// Fleet-wide summary over the full history.
    pub async fn overview(&self) -> OverviewStats {
        overview(&self.store.snapshot().await)
    }

    /// Per-day rollup over the full history, ascending by date.
    pub async fn daily(&self) -> Vec<DailyStats> {
        daily(&self.store.snapshot().await)
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, OffsetDateTime};

    use crema_core::ShotGenerator;

    use super::*;

    fn fixed_now() -> OffsetDateTime {
        Date::from_calendar_date(2024, Month::September, 15)
            .unwrap()
            .with_hms(12, 0, 0)
            .unwrap()
            .assume_utc()
    }

    fn create_test_service(count: usize) -> ShotService {
        let shots = ShotGenerator::new(7).with_now(fixed_now()).generate(count);
        ShotService::new(Arc::new(ShotStore::with_shots(shots)))
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let service = create_test_service(20);
        let listed = service.list(20).await;
        assert_eq!(listed.len(), 20);
        for pair in listed.windows(2) {
            assert!(pair[0].brew_time >= pair[1].brew_time);
        }
    }

    #[tokio::test]
    async fn test_get_round_trip() {
        let service = create_test_service(5);
        let newest = service.list(1).await.remove(0);
        let fetched = service.get(&newest.shot_id).await.unwrap();
        assert_eq!(fetched, newest);
    }

    #[tokio::test]
    async fn test_create_then_delete() {
        let service = create_test_service(5);
        let mut shot = service.list(1).await.remove(0);
        shot.shot_id = "manual-1".to_string();

        let stored = service.create(shot).await;
        assert_eq!(service.get("manual-1").await.unwrap(), stored);

        service.delete("manual-1").await;
        assert!(service.get("manual-1").await.is_err());
    }

    #[tokio::test]
    async fn test_overview_covers_whole_history() {
        let service = create_test_service(150);
        let stats = service.overview().await;
        assert_eq!(stats.total_shots, 150);
        assert!(stats.min_brew_time_seconds <= stats.avg_brew_time_seconds);
        assert!(stats.avg_brew_time_seconds <= stats.max_brew_time_seconds);
    }

    #[tokio::test]
    async fn test_daily_ascending() {
        let service = create_test_service(150);
        let days = service.daily().await;
        assert!(!days.is_empty());
        for pair in days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard, RwLock};
use tracing::{debug, info, instrument, warn};

use super::{
    generators::next_player_id, models::PlayerModel, repository::PlayerRepository,
    types::PlayerResponse,
};
use crate::{game::repository::MatchRepository, shared::AppError, stats::calculator};

/// Service for player registration, lookup and success-rate bookkeeping
pub struct PlayerService {
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
    registration_lock: AsyncMutex<()>,
    player_locks: RwLock<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl PlayerService {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            match_repository,
            registration_lock: AsyncMutex::new(()),
            player_locks: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a new player under the next free id
    #[instrument(skip(self))]
    pub async fn create_player(&self, name: Option<&str>) -> Result<PlayerResponse, AppError> {
        // Two registrations must never compute the same id
        let _guard = self.registration_lock.lock().await;

        let existing = self.player_repository.find_all().await?;
        let player_id = next_player_id(&existing)?;
        debug!(player_id = %player_id, "Assigned player id");

        let player = PlayerModel::new(player_id, name);
        let saved = self.player_repository.save(&player).await?;

        info!(player_id = %saved.id, name = %saved.name, "Player created successfully");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn find_player(&self, player_id: &str) -> Result<PlayerModel, AppError> {
        self.player_repository
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| {
                warn!(player_id = %player_id, "Player not found");
                AppError::PlayerNotFound(player_id.to_string())
            })
    }

    #[instrument(skip(self))]
    pub async fn rename_player(
        &self,
        player_id: &str,
        name: Option<&str>,
    ) -> Result<PlayerResponse, AppError> {
        let _guard = self.lock_player(player_id).await;

        let mut player = self.find_player(player_id).await?;
        player.rename(name);
        let saved = self.player_repository.save(&player).await?;

        info!(player_id = %saved.id, name = %saved.name, "Player renamed successfully");
        Ok(saved.into())
    }

    /// Lists every player; an empty store is an error
    #[instrument(skip(self))]
    pub async fn list_players(&self) -> Result<Vec<PlayerResponse>, AppError> {
        let players = self.player_repository.find_all().await?;
        if players.is_empty() {
            warn!("No players registered");
            return Err(AppError::EmptyCollection);
        }

        debug!(player_count = players.len(), "Players listed successfully");
        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }

    /// Recomputes the player's success rate from its stored matches and saves it.
    ///
    /// Holds the player's lock for the whole read-compute-write so concurrent
    /// matches for the same player cannot lose an update.
    #[instrument(skip(self))]
    pub async fn refresh_success_rate(&self, player_id: &str) -> Result<u8, AppError> {
        let _guard = self.lock_player(player_id).await;
        self.refresh_success_rate_locked(player_id).await
    }

    /// Same as `refresh_success_rate` for a caller already holding the
    /// player's lock from `lock_player`
    pub(crate) async fn refresh_success_rate_locked(
        &self,
        player_id: &str,
    ) -> Result<u8, AppError> {
        let mut player = self.find_player(player_id).await?;
        let matches = self.match_repository.find_by_player(player_id).await?;

        player.success_rate = calculator::player_success_rate(&matches);
        self.player_repository.save(&player).await?;

        info!(
            player_id = %player_id,
            match_count = matches.len(),
            success_rate = player.success_rate,
            "Success rate updated"
        );
        Ok(player.success_rate)
    }

    /// Waits for exclusive access to the player's record and match history.
    /// The lock is not reentrant.
    pub(crate) async fn lock_player(&self, player_id: &str) -> OwnedMutexGuard<()> {
        self.player_lock(player_id).await.lock_owned().await
    }

    async fn player_lock(&self, player_id: &str) -> Arc<AsyncMutex<()>> {
        {
            let guard = self.player_locks.read().await;
            if let Some(lock) = guard.get(player_id) {
                return lock.clone();
            }
        }

        let mut guard = self.player_locks.write().await;
        guard
            .entry(player_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{models::MatchModel, repository::InMemoryMatchRepository};
    use crate::player::{models::ANONYMOUS_NAME, repository::InMemoryPlayerRepository};
    use chrono::NaiveDate;

    fn service() -> (PlayerService, Arc<InMemoryMatchRepository>) {
        let matches = Arc::new(InMemoryMatchRepository::new());
        let service = PlayerService::new(
            Arc::new(InMemoryPlayerRepository::new()),
            matches.clone(),
        );
        (service, matches)
    }

    fn played_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 8, 11).unwrap()
    }

    #[tokio::test]
    async fn test_create_player_assigns_sequential_ids() {
        let (service, _) = service();

        let first = service.create_player(Some("Carlos")).await.unwrap();
        let second = service.create_player(None).await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(first.name, "Carlos");
        assert_eq!(first.success_rate, 0);
        assert_eq!(second.id, "2");
        assert_eq!(second.name, ANONYMOUS_NAME);
    }

    #[tokio::test]
    async fn test_concurrent_registrations_get_distinct_ids() {
        let (service, _) = service();
        let service = Arc::new(service);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.create_player(Some("Ana")).await.unwrap() })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }
        ids.sort_by_key(|id| id.parse::<u32>().unwrap());
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[tokio::test]
    async fn test_find_missing_player() {
        let (service, _) = service();
        let result = service.find_player("7").await;
        assert_eq!(result, Err(AppError::PlayerNotFound("7".to_string())));
    }

    #[tokio::test]
    async fn test_rename_player() {
        let (service, _) = service();
        let player = service.create_player(Some("Carlos")).await.unwrap();

        let renamed = service
            .rename_player(&player.id, Some(" Marta 99 "))
            .await
            .unwrap();
        assert_eq!(renamed.name, "Marta");
        assert_eq!(service.find_player(&player.id).await.unwrap().name, "Marta");
    }

    #[tokio::test]
    async fn test_rename_missing_player() {
        let (service, _) = service();
        let result = service.rename_player("1", Some("Marta")).await;
        assert!(matches!(result, Err(AppError::PlayerNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_players_empty_is_error() {
        let (service, _) = service();
        assert_eq!(service.list_players().await, Err(AppError::EmptyCollection));
    }

    #[tokio::test]
    async fn test_list_players() {
        let (service, _) = service();
        service.create_player(Some("Carlos")).await.unwrap();
        service.create_player(Some("Marta")).await.unwrap();

        let players = service.list_players().await.unwrap();
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Carlos", "Marta"]);
    }

    #[tokio::test]
    async fn test_refresh_success_rate_truncates() {
        let (service, matches) = service();
        let player = service.create_player(Some("Carlos")).await.unwrap();

        for won in [true, false, false] {
            matches
                .save(&MatchModel::new(player.id.clone(), played_on(), won))
                .await
                .unwrap();
        }

        let rate = service.refresh_success_rate(&player.id).await.unwrap();
        assert_eq!(rate, 33);
        assert_eq!(service.find_player(&player.id).await.unwrap().success_rate, 33);
    }

    #[tokio::test]
    async fn test_refresh_success_rate_without_matches_is_zero() {
        let (service, _) = service();
        let player = service.create_player(Some("Carlos")).await.unwrap();

        assert_eq!(service.refresh_success_rate(&player.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_refresh_success_rate_missing_player() {
        let (service, _) = service();
        let result = service.refresh_success_rate("3").await;
        assert!(matches!(result, Err(AppError::PlayerNotFound(_))));
    }
}

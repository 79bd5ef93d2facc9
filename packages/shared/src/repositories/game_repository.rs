use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

use crate::models::game::Game;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Inserts or replaces the game stored under `game.id`.
    async fn save(&self, game: &Game) -> Result<(), GameRepositoryError>;

    async fn get(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError>;

    /// Removing an unknown id is not an error.
    async fn delete(&self, game_id: &str) -> Result<(), GameRepositoryError>;

    /// All stored games, oldest first.
    async fn list_all(&self) -> Result<Vec<Game>, GameRepositoryError>;
}

fn sorted_by_creation(mut games: Vec<Game>) -> Vec<Game> {
    games.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    games
}

#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<String, Game>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, game: &Game) -> Result<(), GameRepositoryError> {
        self.games
            .write()
            .await
            .insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn get(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        Ok(self.games.read().await.get(game_id).cloned())
    }

    async fn delete(&self, game_id: &str) -> Result<(), GameRepositoryError> {
        self.games.write().await.remove(game_id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let games = self.games.read().await.values().cloned().collect();
        Ok(sorted_by_creation(games))
    }
}

/// Keeps every game in a single JSON document keyed by game id.
///
/// Each call reads the whole file and, for writes, replaces it. A missing
/// file behaves like an empty store.
pub struct JsonFileGameRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileGameRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<String, Game>, GameRepositoryError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, games: &HashMap<String, Game>) -> Result<(), GameRepositoryError> {
        let contents = serde_json::to_string_pretty(games)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, contents).await?;
        debug!("Wrote {} games to {}", games.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl GameRepository for JsonFileGameRepository {
    async fn save(&self, game: &Game) -> Result<(), GameRepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut games = self.load().await?;
        games.insert(game.id.clone(), game.clone());
        self.store(&games).await
    }

    async fn get(&self, game_id: &str) -> Result<Option<Game>, GameRepositoryError> {
        let mut games = self.load().await?;
        Ok(games.remove(game_id))
    }

    async fn delete(&self, game_id: &str) -> Result<(), GameRepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut games = self.load().await?;
        if games.remove(game_id).is_some() {
            self.store(&games).await?;
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Game>, GameRepositoryError> {
        let games = self.load().await?.into_values().collect();
        Ok(sorted_by_creation(games))
    }
}

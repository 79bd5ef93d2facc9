use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    models::{
        game::Game,
        moves::{Move, MoveSource},
        player::Player,
    },
    repositories::game_repository::GameRepository,
    services::errors::game_service_errors::GameServiceError,
};

pub const COMPUTER_NAME: &str = "Computer";

/// Fetches games from the repository, applies moves and stores the result.
///
/// Every call is a plain get / mutate / save; callers sharing a game id
/// across tasks have to serialize access themselves.
#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    move_source: Arc<dyn MoveSource + Send + Sync>,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn GameRepository + Send + Sync>,
        move_source: Arc<dyn MoveSource + Send + Sync>,
    ) -> Self {
        GameService {
            repository,
            move_source,
        }
    }

    /// `player2_name` is ignored when playing against the computer.
    pub async fn start_game(
        &self,
        player1_name: &str,
        player2_name: &str,
        vs_computer: bool,
    ) -> Result<Game, GameServiceError> {
        let player1 = Player::new(player1_name);
        let player2 = if vs_computer {
            Player::computer(COMPUTER_NAME)
        } else {
            Player::new(player2_name)
        };

        let game = Game::new(player1, player2);
        self.repository.save(&game).await?;

        info!(
            "Started game {} between {} and {}",
            game.id, game.player1.name, game.player2.name
        );
        Ok(game)
    }

    pub async fn make_move(
        &self,
        game_id: &str,
        player_id: &str,
        player_move: Move,
    ) -> Result<Game, GameServiceError> {
        let mut game = self.get_game(game_id).await?;

        debug!("Player {} plays {} in game {}", player_id, player_move, game_id);
        game.submit_move(player_id, player_move, self.move_source.as_ref())?;

        self.repository.save(&game).await?;
        Ok(game)
    }

    pub async fn get_game(&self, game_id: &str) -> Result<Game, GameServiceError> {
        self.repository
            .get(game_id)
            .await?
            .ok_or_else(|| GameServiceError::GameNotFound(game_id.to_string()))
    }

    pub async fn list_games(&self) -> Result<Vec<Game>, GameServiceError> {
        self.repository
            .list_all()
            .await
            .map_err(GameServiceError::from)
    }

    pub async fn delete_game(&self, game_id: &str) -> Result<(), GameServiceError> {
        self.repository.delete(game_id).await?;
        info!("Deleted game {}", game_id);
        Ok(())
    }
}

use crate::models::errors::game_errors::GameError;
use crate::repositories::errors::game_repository_errors::GameRepositoryError;

#[derive(Debug)]
pub enum GameServiceError {
    GameNotFound(String),
    Game(GameError),
    RepositoryError(GameRepositoryError),
}

impl std::fmt::Display for GameServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameServiceError::GameNotFound(game_id) => write!(f, "Game not found: {}", game_id),
            GameServiceError::Game(err) => write!(f, "Game error: {}", err),
            GameServiceError::RepositoryError(err) => {
                write!(f, "Repository error: {}", err)
            }
        }
    }
}

impl std::error::Error for GameServiceError {}

impl From<GameError> for GameServiceError {
    fn from(err: GameError) -> Self {
        GameServiceError::Game(err)
    }
}

impl From<GameRepositoryError> for GameServiceError {
    fn from(err: GameRepositoryError) -> Self {
        GameServiceError::RepositoryError(err)
    }
}

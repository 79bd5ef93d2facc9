#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameAlreadyEnded,
    InvalidPlayer(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameAlreadyEnded => write!(f, "Game has already ended"),
            GameError::InvalidPlayer(player_id) => {
                write!(f, "Invalid player ID: {}", player_id)
            }
        }
    }
}

impl std::error::Error for GameError {}

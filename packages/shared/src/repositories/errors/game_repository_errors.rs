#[derive(Debug)]
pub enum GameRepositoryError {
    Serialization(String),
    Io(String),
}

impl std::fmt::Display for GameRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameRepositoryError::Serialization(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            GameRepositoryError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
        }
    }
}

impl std::error::Error for GameRepositoryError {}

impl From<std::io::Error> for GameRepositoryError {
    fn from(err: std::io::Error) -> Self {
        GameRepositoryError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GameRepositoryError {
    fn from(err: serde_json::Error) -> Self {
        GameRepositoryError::Serialization(err.to_string())
    }
}

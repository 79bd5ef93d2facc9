use shared::services::errors::game_service_errors::GameServiceError;

#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    GameService(GameServiceError),
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameServiceError> for CliError {
    fn from(error: GameServiceError) -> Self {
        CliError::GameService(error)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::GameService(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Stdin closed while we were waiting for an answer.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, CliError::Io(err) if err.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

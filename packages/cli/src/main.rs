use std::io;
use std::sync::Arc;

use shared::models::moves::RandomMoveSource;
use shared::repositories::game_repository::{
    GameRepository, InMemoryGameRepository, JsonFileGameRepository,
};
use shared::services::game_service::GameService;
use tracing::{error, info};

mod config;
mod error;
mod prompt;
mod render;
mod session;

use config::Config;
use prompt::Prompter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let repository: Arc<dyn GameRepository + Send + Sync> = match &config.store_path {
        Some(path) => {
            info!("Storing games in {}", path.display());
            Arc::new(JsonFileGameRepository::new(path))
        }
        None => Arc::new(InMemoryGameRepository::new()),
    };
    let service = GameService::new(repository, Arc::new(RandomMoveSource::new()));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match session::run(&service, &mut prompter).await {
        Ok(()) => {}
        Err(e) if e.is_end_of_input() => info!("Input closed, ending session"),
        Err(e) => {
            error!("Session failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

pub mod game_errors;

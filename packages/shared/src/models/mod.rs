pub mod errors;
pub mod game;
pub mod moves;
pub mod player;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::errors::game_errors::GameError;
use crate::models::moves::{Move, MoveSource, RoundOutcome};
use crate::models::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Completed,
}

/// A best-of-forever match between two players.
///
/// `scores` and `current_moves` are keyed by exactly the two player ids for
/// the whole lifetime of the game. A round resolves as soon as both current
/// move slots are filled, after which the slots are cleared again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub player1: Player,
    pub player2: Player,
    pub scores: HashMap<String, u32>,
    pub current_moves: HashMap<String, Option<Move>>,
    pub status: GameStatus,
    pub last_round_moves: HashMap<String, Move>,
    pub last_round_winner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(player1: Player, player2: Player) -> Self {
        let scores = HashMap::from([(player1.id.clone(), 0), (player2.id.clone(), 0)]);
        let current_moves = HashMap::from([(player1.id.clone(), None), (player2.id.clone(), None)]);

        Game {
            id: Uuid::new_v4().to_string(),
            player1,
            player2,
            scores,
            current_moves,
            status: GameStatus::Ongoing,
            last_round_moves: HashMap::new(),
            last_round_winner: None,
            created_at: Utc::now(),
        }
    }

    /// Records `player_move` for `player_id`, lets a computer opponent pick
    /// its move, and resolves the round once both slots are filled.
    pub fn submit_move(
        &mut self,
        player_id: &str,
        player_move: Move,
        move_source: &dyn MoveSource,
    ) -> Result<(), GameError> {
        if !self.is_ongoing() {
            return Err(GameError::GameAlreadyEnded);
        }
        if self.player(player_id).is_none() {
            return Err(GameError::InvalidPlayer(player_id.to_string()));
        }

        self.current_moves
            .insert(player_id.to_string(), Some(player_move));
        self.fill_computer_move(move_source);

        if let (Some(move1), Some(move2)) = (
            self.current_move(&self.player1.id),
            self.current_move(&self.player2.id),
        ) {
            self.resolve_round(move1, move2);
        }

        Ok(())
    }

    // Only one participant can be computer controlled.
    fn fill_computer_move(&mut self, move_source: &dyn MoveSource) {
        let computer_id = [&self.player1, &self.player2]
            .into_iter()
            .find(|player| player.is_computer)
            .map(|player| player.id.clone());

        if let Some(computer_id) = computer_id {
            if self.current_move(&computer_id).is_none() {
                let computer_move = move_source.next_move();
                debug!("Computer player {} picked {}", computer_id, computer_move);
                self.current_moves.insert(computer_id, Some(computer_move));
            }
        }
    }

    fn resolve_round(&mut self, move1: Move, move2: Move) {
        let player1_id = self.player1.id.clone();
        let player2_id = self.player2.id.clone();

        self.last_round_moves = HashMap::from([
            (player1_id.clone(), move1),
            (player2_id.clone(), move2),
        ]);

        self.last_round_winner = match Move::compare(move1, move2) {
            RoundOutcome::FirstWins => Some(player1_id),
            RoundOutcome::SecondWins => Some(player2_id),
            RoundOutcome::Tie => None,
        };
        if let Some(winner_id) = &self.last_round_winner {
            *self.scores.entry(winner_id.clone()).or_insert(0) += 1;
        }

        debug!(
            "Game {} round resolved: {} vs {}, winner {:?}",
            self.id, move1, move2, self.last_round_winner
        );

        for slot in self.current_moves.values_mut() {
            *slot = None;
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.status == GameStatus::Ongoing
    }

    pub fn has_computer(&self) -> bool {
        self.player1.is_computer || self.player2.is_computer
    }

    pub fn players(&self) -> [&Player; 2] {
        [&self.player1, &self.player2]
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players()
            .into_iter()
            .find(|player| player.id == player_id)
    }

    pub fn player_name(&self, player_id: &str) -> Option<&str> {
        self.player(player_id).map(|player| player.name.as_str())
    }

    pub fn score(&self, player_id: &str) -> Option<u32> {
        self.scores.get(player_id).copied()
    }

    pub fn current_move(&self, player_id: &str) -> Option<Move> {
        self.current_moves.get(player_id).copied().flatten()
    }

    pub fn last_round_winner_name(&self) -> Option<&str> {
        self.last_round_winner
            .as_deref()
            .and_then(|winner_id| self.player_name(winner_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::moves::MockMoveSource;

    fn human_game() -> Game {
        Game::new(Player::new("Alice"), Player::new("Bob"))
    }

    fn unused_source() -> MockMoveSource {
        let mut source = MockMoveSource::new();
        source.expect_next_move().never();
        source
    }

    fn fixed_source(computer_move: Move) -> MockMoveSource {
        let mut source = MockMoveSource::new();
        source.expect_next_move().return_const(computer_move);
        source
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = human_game();

        assert_eq!(game.scores.len(), 2);
        assert_eq!(game.score(&game.player1.id), Some(0));
        assert_eq!(game.score(&game.player2.id), Some(0));
        assert_eq!(game.current_moves.len(), 2);
        assert!(game.current_moves.values().all(Option::is_none));
        assert_eq!(game.status, GameStatus::Ongoing);
        assert!(game.last_round_moves.is_empty());
        assert!(game.last_round_winner.is_none());
        assert!(Uuid::parse_str(&game.id).is_ok());
    }

    #[test]
    fn test_single_move_does_not_resolve_round() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        let bob = game.player2.id.clone();

        game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();

        assert_eq!(game.current_move(&alice), Some(Move::Rock));
        assert_eq!(game.current_move(&bob), None);
        assert!(game.last_round_moves.is_empty());
        assert!(game.last_round_winner.is_none());
    }

    #[test]
    fn test_resubmitting_before_opponent_replaces_move() {
        let mut game = human_game();
        let alice = game.player1.id.clone();

        game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();
        game.submit_move(&alice, Move::Paper, &unused_source()).unwrap();

        assert_eq!(game.current_move(&alice), Some(Move::Paper));
        assert!(game.last_round_moves.is_empty());
    }

    #[test]
    fn test_rock_beats_scissors() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        let bob = game.player2.id.clone();

        game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();
        game.submit_move(&bob, Move::Scissors, &unused_source()).unwrap();

        assert_eq!(game.score(&alice), Some(1));
        assert_eq!(game.score(&bob), Some(0));
        assert_eq!(game.last_round_winner.as_deref(), Some(alice.as_str()));
        assert_eq!(game.last_round_winner_name(), Some("Alice"));
        assert!(game.current_moves.values().all(Option::is_none));
        assert_eq!(game.current_moves.len(), 2);
    }

    #[test]
    fn test_second_player_win_in_submission_order() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        let bob = game.player2.id.clone();

        game.submit_move(&bob, Move::Paper, &unused_source()).unwrap();
        game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();

        assert_eq!(game.score(&alice), Some(0));
        assert_eq!(game.score(&bob), Some(1));
        assert_eq!(game.last_round_winner.as_deref(), Some(bob.as_str()));
        assert_eq!(game.last_round_moves.get(&alice), Some(&Move::Rock));
        assert_eq!(game.last_round_moves.get(&bob), Some(&Move::Paper));
    }

    #[test]
    fn test_tie_leaves_scores_unchanged() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        let bob = game.player2.id.clone();

        game.submit_move(&alice, Move::Scissors, &unused_source()).unwrap();
        game.submit_move(&bob, Move::Scissors, &unused_source()).unwrap();

        assert_eq!(game.score(&alice), Some(0));
        assert_eq!(game.score(&bob), Some(0));
        assert!(game.last_round_winner.is_none());
        assert_eq!(game.last_round_moves.len(), 2);
    }

    #[test]
    fn test_tie_clears_previous_winner() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        let bob = game.player2.id.clone();

        game.submit_move(&alice, Move::Paper, &unused_source()).unwrap();
        game.submit_move(&bob, Move::Rock, &unused_source()).unwrap();
        assert!(game.last_round_winner.is_some());

        game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();
        game.submit_move(&bob, Move::Rock, &unused_source()).unwrap();

        assert!(game.last_round_winner.is_none());
        assert_eq!(game.score(&alice), Some(1));
    }

    #[test]
    fn test_scores_accumulate_across_rounds() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        let bob = game.player2.id.clone();

        for _ in 0..3 {
            game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();
            game.submit_move(&bob, Move::Scissors, &unused_source()).unwrap();
        }
        game.submit_move(&alice, Move::Rock, &unused_source()).unwrap();
        game.submit_move(&bob, Move::Paper, &unused_source()).unwrap();

        assert_eq!(game.score(&alice), Some(3));
        assert_eq!(game.score(&bob), Some(1));
        assert_eq!(game.status, GameStatus::Ongoing);
    }

    #[test]
    fn test_completed_game_rejects_moves() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        game.status = GameStatus::Completed;
        let before = game.clone();

        let result = game.submit_move(&alice, Move::Rock, &unused_source());

        assert_eq!(result, Err(GameError::GameAlreadyEnded));
        assert_eq!(game, before);
    }

    #[test]
    fn test_unknown_player_is_rejected() {
        let mut game = human_game();
        let before = game.clone();

        let result = game.submit_move("not-a-player", Move::Rock, &unused_source());

        assert_eq!(
            result,
            Err(GameError::InvalidPlayer("not-a-player".to_string()))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_computer_move_resolves_round_immediately() {
        let mut game = Game::new(Player::new("Alice"), Player::computer("Computer"));
        let alice = game.player1.id.clone();
        let computer = game.player2.id.clone();

        let mut source = MockMoveSource::new();
        source
            .expect_next_move()
            .times(1)
            .return_const(Move::Scissors);

        game.submit_move(&alice, Move::Rock, &source).unwrap();

        assert_eq!(game.last_round_moves.get(&computer), Some(&Move::Scissors));
        assert_eq!(game.last_round_winner.as_deref(), Some(alice.as_str()));
        assert_eq!(game.score(&alice), Some(1));
        assert!(game.current_moves.values().all(Option::is_none));
    }

    #[test]
    fn test_computer_as_first_player() {
        let mut game = Game::new(Player::computer("Computer"), Player::new("Bob"));
        let computer = game.player1.id.clone();
        let bob = game.player2.id.clone();

        game.submit_move(&bob, Move::Rock, &fixed_source(Move::Paper))
            .unwrap();

        assert_eq!(game.score(&computer), Some(1));
        assert_eq!(game.last_round_winner_name(), Some("Computer"));
    }

    #[test]
    fn test_computer_plays_every_round() {
        let mut game = Game::new(Player::new("Alice"), Player::computer("Computer"));
        let alice = game.player1.id.clone();
        let source = fixed_source(Move::Rock);

        for _ in 0..5 {
            game.submit_move(&alice, Move::Rock, &source).unwrap();
            assert!(game.last_round_winner.is_none());
            assert_eq!(game.last_round_moves.len(), 2);
        }
        assert_eq!(game.score(&alice), Some(0));
    }

    #[test]
    fn test_player_lookup_helpers() {
        let game = Game::new(Player::new("Alice"), Player::computer("Computer"));

        assert!(game.has_computer());
        assert_eq!(game.player_name(&game.player2.id), Some("Computer"));
        assert!(game.player("missing").is_none());
        assert!(game.last_round_winner_name().is_none());
        assert!(!human_game().has_computer());
    }

    #[test]
    fn test_game_serialization_round_trip() {
        let mut game = human_game();
        let alice = game.player1.id.clone();
        game.submit_move(&alice, Move::Paper, &unused_source()).unwrap();

        let serialized = serde_json::to_string(&game).unwrap();
        assert!(serialized.contains("\"Ongoing\""));
        assert!(serialized.contains("\"paper\""));

        let deserialized: Game = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, game);
    }
}

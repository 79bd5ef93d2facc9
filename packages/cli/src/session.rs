use std::io::{BufRead, Write};

use shared::models::player::Player;
use shared::services::game_service::{GameService, COMPUTER_NAME};
use tracing::info;

use crate::error::CliError;
use crate::prompt::Prompter;
use crate::render;

/// Plays rounds until the players decline another one or the game ends.
pub async fn run<R: BufRead, W: Write>(
    service: &GameService,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    prompter.say("Welcome to Rock-Paper-Scissors Game!")?;
    let player1_name = prompter.ask("Enter name for Player 1: ")?;

    let vs_computer = prompter.confirm("Play against computer? (y/n): ")?;
    let player2_name = if vs_computer {
        COMPUTER_NAME.to_string()
    } else {
        prompter.ask("Enter name for Player 2: ")?
    };

    let mut game = service
        .start_game(&player1_name, &player2_name, vs_computer)
        .await?;

    loop {
        let humans: Vec<Player> = game
            .players()
            .into_iter()
            .filter(|player| !player.is_computer)
            .cloned()
            .collect();

        for player in humans {
            prompter.say("")?;
            prompter.say(&format!(
                "{}'s turn (other player, please close your eyes):",
                player.name
            ))?;
            let chosen = prompter.read_move()?;
            game = service.make_move(&game.id, &player.id, chosen).await?;
            prompter.say(&format!("{} has made their choice.", player.name))?;
            prompter.ask("Press Enter to continue...")?;
        }

        prompter.say("")?;
        prompter.say(render::round_result(&game).trim_end())?;
        prompter.say(render::scores(&game).trim_end())?;
        prompter.say(&render::rule('='))?;

        if !game.is_ongoing() {
            break;
        }
        prompter.say("")?;
        if !prompter.confirm("Do you want to play another round? (y/n): ")? {
            break;
        }
    }

    info!("Session for game {} finished", game.id);
    prompter.say("Thanks for playing!")?;
    Ok(())
}

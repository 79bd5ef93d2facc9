use std::fmt::Write;

use shared::models::game::Game;

pub const WIDTH: usize = 40;

pub fn rule(fill: char) -> String {
    fill.to_string().repeat(WIDTH)
}

/// Both moves of the last resolved round and who took it.
pub fn round_result(game: &Game) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{:^width$}", "🏆 ROUND RESULT 🏆", width = WIDTH);
    let _ = writeln!(out, "{}", rule('-'));

    let moves: Vec<_> = game
        .players()
        .into_iter()
        .filter_map(|player| {
            game.last_round_moves
                .get(&player.id)
                .map(|chosen| (player.name.as_str(), *chosen))
        })
        .collect();
    if moves.len() < 2 {
        let _ = writeln!(out, "No round has been played yet.");
        return out;
    }
    for (name, chosen) in moves {
        let _ = writeln!(out, "{} chose {}", name, chosen);
    }
    let _ = writeln!(out, "{}", rule('-'));

    let announcement = match game.last_round_winner_name() {
        Some(winner) => format!("🎉 {} wins the round! 🎉", winner),
        None => "🤝 It's a tie! 🤝".to_string(),
    };
    let _ = writeln!(out, "{:^width$}", announcement, width = WIDTH);
    out
}

/// Running totals with names padded to the longest one.
pub fn scores(game: &Game) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "{:^width$}", "📊 CURRENT SCORES 📊", width = WIDTH);
    let _ = writeln!(out, "{}", rule('-'));

    let name_width = game
        .players()
        .iter()
        .map(|player| player.name.chars().count())
        .max()
        .unwrap_or(0);

    for player in game.players() {
        let score = game.score(&player.id).unwrap_or(0);
        let _ = writeln!(
            out,
            "  {:<name_width$} : {:>2}",
            player.name,
            score,
            name_width = name_width
        );
    }
    out
}

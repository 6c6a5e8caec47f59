use crate::domain::model::EvaluatedGame;

/// Collapses every whitespace run (newlines included) into a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fragment(game: &EvaluatedGame) -> String {
    format!(
        "{} @ {}: {}-{}.",
        game.visitor_nick(),
        game.home_nick(),
        game.visitor_score(),
        game.home_score()
    )
}

/// Builds the SMS body for the close games, or `None` when nothing is close.
///
/// Close games keep their input order in the multi-game summary. Scores are
/// quoted as the feed reported them; the parsed values only decide closeness.
pub fn compose_message(games: &[EvaluatedGame]) -> Option<String> {
    let close_games: Vec<&EvaluatedGame> = games.iter().filter(|g| g.is_close).collect();

    let message = match close_games.as_slice() {
        [] => return None,
        [game] => format!(
            "There is a close NBA game on right now between the {}
             and {}! Score:
             {}-{}.",
            game.visitor_nick(),
            game.home_nick(),
            game.visitor_score(),
            game.home_score()
        ),
        many => format!(
            "There are {} close NBA games on right now!
             {}",
            many.len(),
            many.iter()
                .map(|game| fragment(game))
                .collect::<Vec<_>>()
                .join(" ")
        ),
    };

    Some(normalize_whitespace(&message))
}

use crate::domain::model::{EvaluatedGame, Game};
use crate::utils::error::{NbaAlertError, Result};

pub const DEFAULT_FINAL_PERIOD: &str = "4/4";
pub const DEFAULT_CLOSE_MARGIN: u32 = 4;

/// When a game counts as close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseGameRule {
    /// Compared verbatim with `currentPeriod`, so overtime never matches.
    pub final_period_marker: String,
    /// Exclusive upper bound on the absolute score difference.
    pub close_margin: u32,
}

impl Default for CloseGameRule {
    fn default() -> Self {
        Self {
            final_period_marker: DEFAULT_FINAL_PERIOD.to_string(),
            close_margin: DEFAULT_CLOSE_MARGIN,
        }
    }
}

/// Scores are non-negative; a sign or overflow is a parse error.
fn parse_points(team: &str, points: &str) -> Result<u32> {
    points
        .trim()
        .parse::<u32>()
        .map_err(|source| NbaAlertError::ScoreParseError {
            team: team.to_string(),
            value: points.to_string(),
            source,
        })
}

pub fn evaluate(game: Game, rule: &CloseGameRule) -> Result<EvaluatedGame> {
    let visitor_points = parse_points(&game.v_team.nick_name, &game.v_team.score.points)?;
    let home_points = parse_points(&game.h_team.nick_name, &game.h_team.score.points)?;

    let is_close = game.current_period == rule.final_period_marker
        && visitor_points.abs_diff(home_points) < rule.close_margin;

    Ok(EvaluatedGame {
        game,
        home_points,
        visitor_points,
        is_close,
    })
}

/// Evaluates every game in input order; the first bad score aborts.
pub fn evaluate_all(games: Vec<Game>, rule: &CloseGameRule) -> Result<Vec<EvaluatedGame>> {
    games.into_iter().map(|game| evaluate(game, rule)).collect()
}

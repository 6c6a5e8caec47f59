use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One live game as reported by the NBA API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default)]
    pub game_id: Option<String>,
    /// Period indicator such as `"4/4"` (fourth of four periods).
    pub current_period: String,
    pub h_team: TeamSnapshot,
    pub v_team: TeamSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    #[serde(default)]
    pub team_id: Option<String>,
    pub nick_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Score {
    /// Points as the numeric string the API sends.
    pub points: String,
}

/// Body of the live-games endpoint: `{"api": {"games": [...]}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveGamesResponse {
    pub api: LiveGamesPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveGamesPayload {
    pub games: Vec<Game>,
}

/// A game with its scores parsed and the closeness flag derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGame {
    pub game: Game,
    pub home_points: u32,
    pub visitor_points: u32,
    pub is_close: bool,
}

impl EvaluatedGame {
    pub fn home_nick(&self) -> &str {
        &self.game.h_team.nick_name
    }

    pub fn visitor_nick(&self) -> &str {
        &self.game.v_team.nick_name
    }

    /// Home score exactly as the feed sent it, minus surrounding whitespace.
    pub fn home_score(&self) -> &str {
        self.game.h_team.score.points.trim()
    }

    pub fn visitor_score(&self) -> &str {
        self.game.v_team.score.points.trim()
    }
}

/// Outcome of one pass of the close-games job.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub games_checked: usize,
    pub close_games: usize,
    pub message: Option<String>,
    pub notified: bool,
}

//! Input data model for tournament result documents.
//!
//! The tournament runner emits one JSON object per tournament:
//!
//! ```json
//! {
//!   "agents": ["alpha", "beta"],
//!   "games": [
//!     {
//!       "black": "alpha", "white": "beta",
//!       "blackScore": 40, "whiteScore": 24,
//!       "winner": "BLACK",
//!       "blackTimedOut": false, "whiteTimedOut": false,
//!       "blackCrashed": false, "whiteCrashed": false
//!     }
//!   ]
//! }
//! ```
//!
//! Every field except `black` and `white` is optional. Missing or `null`
//! scores count as 0, missing flags as `false`. The `winner` tag is only
//! definitive when it is exactly `"BLACK"` or `"WHITE"`; any other value
//! (including an explicit `"DRAW"`) defers to the score comparison.

use serde::Deserialize;

/// A whole tournament result document.
///
/// Both top-level lists are optional and tolerate an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentRecord {
    #[serde(default)]
    agents: Option<Vec<String>>,
    #[serde(default)]
    games: Option<Vec<GameRecord>>,
}

impl TournamentRecord {
    /// Declared agent identifiers, in declaration order.
    pub fn agents(&self) -> &[String] {
        self.agents.as_deref().unwrap_or_default()
    }

    /// Game records, in input order.
    pub fn games(&self) -> &[GameRecord] {
        self.games.as_deref().unwrap_or_default()
    }
}

/// One game between two agents, as recorded by the runner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Agent playing black.
    pub black: String,
    /// Agent playing white.
    pub white: String,
    #[serde(default)]
    black_score: Option<u64>,
    #[serde(default)]
    white_score: Option<u64>,
    #[serde(default)]
    winner: Option<String>,
    /// Black exceeded its time budget during this game.
    #[serde(default)]
    pub black_timed_out: bool,
    /// White exceeded its time budget during this game.
    #[serde(default)]
    pub white_timed_out: bool,
    /// Black's process crashed during this game.
    #[serde(default)]
    pub black_crashed: bool,
    /// White's process crashed during this game.
    #[serde(default)]
    pub white_crashed: bool,
}

/// Resolved result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Black won, white lost.
    BlackWin,
    /// White won, black lost.
    WhiteWin,
    /// Neither side won.
    Draw,
}

impl GameRecord {
    /// Black's final score (0 when missing or `null`).
    pub fn black_score(&self) -> u64 {
        self.black_score.unwrap_or(0)
    }

    /// White's final score (0 when missing or `null`).
    pub fn white_score(&self) -> u64 {
        self.white_score.unwrap_or(0)
    }

    /// Resolve the game result.
    ///
    /// A `winner` tag of `"BLACK"` or `"WHITE"` is authoritative. Anything
    /// else falls back to the score comparison, so a game tagged `"DRAW"`
    /// with unequal scores still credits the higher-scoring side with the
    /// win. Historical rankings depend on this fallback; keep it.
    pub fn outcome(&self) -> Outcome {
        match self.winner.as_deref() {
            Some("BLACK") => Outcome::BlackWin,
            Some("WHITE") => Outcome::WhiteWin,
            _ => {
                let (b, w) = (self.black_score(), self.white_score());
                if b == w {
                    Outcome::Draw
                } else if b > w {
                    Outcome::BlackWin
                } else {
                    Outcome::WhiteWin
                }
            }
        }
    }
}
